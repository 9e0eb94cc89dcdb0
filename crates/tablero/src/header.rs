//! Session-based user header.
//!
//! The login page stores the username in sessionStorage; a missing entry
//! means the user landed here directly and gets bounced back to login.

use crate::browser::storage::Storage;

/// sessionStorage key written by the login page.
pub const USERNAME_KEY: &str = "username";

/// Header display data derived from the session username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserHeader {
    username: String,
}

impl UserHeader {
    /// Build from a raw username. Whitespace-only names count as absent.
    #[must_use]
    pub fn from_username(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            username: trimmed.to_string(),
        })
    }

    /// Load from session storage. `None` means "redirect to login".
    #[must_use]
    pub fn load(session: &Storage) -> Option<Self> {
        session
            .get(USERNAME_KEY)
            .and_then(|name| Self::from_username(&name))
    }

    /// Name shown in the header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.username
    }

    /// Uppercased first letter for the avatar circle.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_username() {
        let header = UserHeader::from_username("amira").expect("present");
        assert_eq!(header.display_name(), "amira");
        assert_eq!(header.avatar_initial(), "A");
    }

    #[test]
    fn test_missing_or_blank_username() {
        assert_eq!(UserHeader::from_username(""), None);
        assert_eq!(UserHeader::from_username("   "), None);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let header = UserHeader::from_username("  omar  ").expect("present");
        assert_eq!(header.display_name(), "omar");
    }

    #[test]
    fn test_avatar_initial_is_unicode_aware() {
        let header = UserHeader::from_username("ßen").expect("present");
        // ß uppercases to SS.
        assert_eq!(header.avatar_initial(), "SS");

        let arabic = UserHeader::from_username("محمد").expect("present");
        assert_eq!(arabic.avatar_initial(), "م");
    }

    #[test]
    fn test_load_from_session_storage() {
        let session = Storage::session();
        assert_eq!(UserHeader::load(&session), None);

        session.set(USERNAME_KEY, "lina").expect("set");
        let header = UserHeader::load(&session).expect("present");
        assert_eq!(header.display_name(), "lina");
    }
}
