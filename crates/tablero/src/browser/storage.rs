//! Browser storage bindings for localStorage and sessionStorage.
//!
//! In WASM this uses the real Web Storage APIs; everywhere else an in-memory
//! fallback backs the same interface so preference logic is testable without
//! a browser.

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

/// Storage type (local or session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    #[default]
    Local,
    /// sessionStorage - cleared when the browser tab closes
    Session,
}

/// Browser storage interface.
#[derive(Debug)]
pub struct Storage {
    storage_type: StorageType,
    /// In-memory fallback for non-WASM environments
    #[cfg(not(target_arch = "wasm32"))]
    memory: std::sync::Mutex<HashMap<String, String>>,
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(StorageType::Local)
    }
}

impl Storage {
    /// Create a new storage instance.
    #[must_use]
    pub fn new(storage_type: StorageType) -> Self {
        Self {
            storage_type,
            #[cfg(not(target_arch = "wasm32"))]
            memory: std::sync::Mutex::new(HashMap::new()),
        }
    }

    /// Create a localStorage instance.
    #[must_use]
    pub fn local() -> Self {
        Self::new(StorageType::Local)
    }

    /// Create a sessionStorage instance.
    #[must_use]
    pub fn session() -> Self {
        Self::new(StorageType::Session)
    }

    /// Get the storage type.
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    /// Get a value from storage.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.get_wasm(key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().ok()?.get(key).cloned()
        }
    }

    /// Set a value in storage.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.set_wasm(key, value)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Remove a value from storage.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.remove_wasm(key)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StorageError::AccessDenied)?
                .remove(key);
            Ok(())
        }
    }

    // WASM implementations
    #[cfg(target_arch = "wasm32")]
    fn get_storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.storage_type {
            StorageType::Local => window.local_storage().ok()?,
            StorageType::Session => window.session_storage().ok()?,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn get_wasm(&self, key: &str) -> Option<String> {
        self.get_storage()?.get_item(key).ok()?
    }

    #[cfg(target_arch = "wasm32")]
    fn set_wasm(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.get_storage()
            .ok_or(StorageError::NotAvailable)?
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded)
    }

    #[cfg(target_arch = "wasm32")]
    fn remove_wasm(&self, key: &str) -> Result<(), StorageError> {
        self.get_storage()
            .ok_or(StorageError::NotAvailable)?
            .remove_item(key)
            .map_err(|_| StorageError::AccessDenied)
    }
}

/// Storage error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is not available (e.g., in incognito mode)
    NotAvailable,
    /// Storage quota exceeded
    QuotaExceeded,
    /// Access denied
    AccessDenied,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "storage not available"),
            Self::QuotaExceeded => write!(f, "storage quota exceeded"),
            Self::AccessDenied => write!(f, "storage access denied"),
        }
    }
}

impl std::error::Error for StorageError {}
