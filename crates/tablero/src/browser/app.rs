//! WASM application entry point: state, DOM wiring, and redraw triggers.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::canvas2d::Canvas2DRenderer;
use crate::browser::storage::Storage;
use crate::forms::{self, FormMessage, NotificationKind};
use crate::header::UserHeader;
use crate::prefs::Preferences;
use crate::stats::{self, StatValue};
use crate::views::{SettingsTab, View, ViewState};
use tablero_charts::{ChartRegistry, RenderContext, SurfaceProvider};
use tablero_core::{DrawCommand, Locale, Rect, Size, SurfaceSpec, ThemeMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlCanvasElement, HtmlElement};

/// Milliseconds to let layout (direction, text metrics) settle before the
/// post-toggle redraw measures surfaces.
const REDRAW_SETTLE_MS: i32 = 100;
const ACTIVE_CLASS: &str = "active";
const LOGIN_PAGE: &str = "../index.html";

/// A pending `setTimeout`, cancelled on drop or replacement.
struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    fn once(delay_ms: i32, callback: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// A running `setInterval`, cancelled on drop.
struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    fn every(period_ms: i32, callback: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

struct AppState {
    registry: ChartRegistry,
    prefs: Preferences,
    theme: ThemeMode,
    locale: Locale,
    views: ViewState,
    pending_redraw: Option<Timeout>,
}

impl AppState {
    fn context(&self) -> RenderContext {
        RenderContext::new(self.theme, self.locale)
    }
}

/// Measures and prepares canvas elements by id; absence is a normal skip.
struct DomSurfaces {
    document: Document,
    specs: HashMap<String, SurfaceSpec>,
}

impl DomSurfaces {
    fn new() -> Option<Self> {
        Some(Self {
            document: window()?.document()?,
            specs: HashMap::new(),
        })
    }

    fn canvas(&self, id: &str) -> Option<HtmlCanvasElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }
}

impl SurfaceProvider for DomSurfaces {
    fn surface_bounds(&mut self, id: &str) -> Option<Rect> {
        let canvas = self.canvas(id)?;
        let rect = canvas.get_bounding_client_rect();
        let spec = SurfaceSpec::from_logical(Size::new(rect.width() as f32, rect.height() as f32));
        self.specs.insert(id.to_string(), spec);
        Some(spec.bounds())
    }

    fn submit(&mut self, id: &str, commands: Vec<DrawCommand>) {
        let Some(spec) = self.specs.get(id).copied() else {
            return;
        };
        let Some(canvas) = self.canvas(id) else {
            return;
        };
        if let Ok(renderer) = Canvas2DRenderer::new(canvas) {
            renderer.prepare(&spec);
            renderer.render(&commands);
        }
    }
}

fn render_charts(state: &Rc<RefCell<AppState>>) {
    let Some(mut surfaces) = DomSurfaces::new() else {
        return;
    };
    let state = state.borrow();
    state.registry.render_all(&state.context(), &mut surfaces);
}

fn schedule_redraw(state: &Rc<RefCell<AppState>>) {
    let handle = Rc::clone(state);
    let timeout = Timeout::once(REDRAW_SETTLE_MS, move || render_charts(&handle));
    // Replacing a pending timeout cancels it, so rapid toggles coalesce into
    // one redraw.
    state.borrow_mut().pending_redraw = timeout;
}

fn apply_document_attributes(theme: ThemeMode, locale: Locale) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    root.set_attribute("data-theme", theme.as_str()).ok();
    root.set_attribute("lang", locale.as_str()).ok();
    root.set_attribute("dir", locale.direction().as_str()).ok();
}

fn set_active_class(document: &Document, id: &str, active: bool) {
    if let Some(element) = document.get_element_by_id(id) {
        if active {
            element.class_list().add_1(ACTIVE_CLASS).ok();
        } else {
            element.class_list().remove_1(ACTIVE_CLASS).ok();
        }
    }
}

/// Main application runner for the browser.
#[wasm_bindgen]
pub struct DashboardApp {
    state: Rc<RefCell<AppState>>,
    resize_listener: Option<Closure<dyn FnMut()>>,
    pulse_timer: Option<Interval>,
    stat_animation: Option<Interval>,
}

#[wasm_bindgen]
impl DashboardApp {
    /// Create the app: restore preferences and apply them to the document.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        let prefs = Preferences::new();
        let theme = prefs.theme();
        let locale = prefs.locale();
        apply_document_attributes(theme, locale);

        Self {
            state: Rc::new(RefCell::new(AppState {
                registry: ChartRegistry::standard(),
                prefs,
                theme,
                locale,
                views: ViewState::new(),
                pending_redraw: None,
            })),
            resize_listener: None,
            pulse_timer: None,
            stat_animation: None,
        }
    }

    /// Wire everything up: session header, initial render, resize listener,
    /// stat count-up, and the cosmetic pulse timer.
    pub fn start(&mut self) {
        self.init_user_header();
        render_charts(&self.state);
        self.attach_resize_listener();
        self.start_stat_animation();
        self.start_pulse_timer();
    }

    /// Flip the color mode; persists, retags the document, and schedules a
    /// deferred chart redraw. Returns the new mode.
    pub fn toggle_theme(&self) -> String {
        let theme = {
            let mut state = self.state.borrow_mut();
            state.theme = state.theme.toggled();
            if state.prefs.set_theme(state.theme).is_err() {
                web_sys::console::warn_1(&JsValue::from_str("theme preference not persisted"));
            }
            apply_document_attributes(state.theme, state.locale);
            state.theme
        };
        schedule_redraw(&self.state);
        theme.as_str().to_string()
    }

    /// Flip the language; persists, retags the document (including `dir`),
    /// and schedules a deferred chart redraw. Returns the new locale tag.
    pub fn toggle_language(&self) -> String {
        let locale = {
            let mut state = self.state.borrow_mut();
            state.locale = state.locale.toggled();
            if state.prefs.set_locale(state.locale).is_err() {
                web_sys::console::warn_1(&JsValue::from_str("language preference not persisted"));
            }
            apply_document_attributes(state.theme, state.locale);
            state.locale
        };
        schedule_redraw(&self.state);
        locale.as_str().to_string()
    }

    /// Current theme attribute value.
    pub fn theme(&self) -> String {
        self.state.borrow().theme.as_str().to_string()
    }

    /// Current language attribute value.
    pub fn language(&self) -> String {
        self.state.borrow().locale.as_str().to_string()
    }

    /// Current document direction attribute value.
    pub fn direction(&self) -> String {
        self.state.borrow().locale.direction().as_str().to_string()
    }

    /// Switch views by container element id, moving the `active` classes and
    /// redrawing the charts when the dashboard becomes visible.
    pub fn activate_view(&self, element_id: &str) {
        let Some(view) = View::from_element_id(element_id) else {
            return;
        };
        let needs_redraw = self.state.borrow_mut().views.activate(view);

        if let Some(document) = window().and_then(|w| w.document()) {
            for candidate in View::ALL {
                let active = candidate == view;
                set_active_class(&document, candidate.element_id(), active);
                set_active_class(&document, candidate.button_id(), active);
            }
        }

        if needs_redraw {
            schedule_redraw(&self.state);
        }
    }

    /// Switch settings tabs by panel id, moving the panel `active` class.
    pub fn select_tab(&self, panel_id: &str) {
        let Some(tab) = SettingsTab::from_panel_id(panel_id) else {
            return;
        };
        self.state.borrow_mut().views.select_tab(tab);

        if let Some(document) = window().and_then(|w| w.document()) {
            for candidate in SettingsTab::ALL {
                set_active_class(&document, candidate.panel_id(), candidate == tab);
            }
        }
    }

    /// Redraw all mounted charts immediately.
    pub fn redraw(&self) {
        render_charts(&self.state);
    }

    /// Generate a fresh operator code (`OP-{year}-{NNNN}`).
    pub fn generate_operator_code(&self) -> String {
        let year = js_sys::Date::new_0().get_full_year();
        let random = (js_sys::Math::random() * 10_000.0) as u32;
        forms::operator_code(year, random)
    }

    /// Permission preset for a role select value, as 0/1 toggle states.
    pub fn role_permissions(&self, role: &str) -> Vec<u8> {
        forms::role_permissions(role)
            .iter()
            .map(|&enabled| u8::from(enabled))
            .collect()
    }

    /// Display label for a picked folder path.
    pub fn folder_label(&self, path: &str) -> String {
        forms::folder_from_path(path)
            .unwrap_or(forms::FOLDER_FALLBACK)
            .to_string()
    }

    /// Localized toast text for a form event (`code-generated`, `data-saved`).
    pub fn form_message(&self, kind: &str) -> String {
        let message = match kind {
            "code-generated" => FormMessage::CodeGenerated,
            _ => FormMessage::DataSaved,
        };
        message.text(self.state.borrow().locale).to_string()
    }

    /// Screen side a toast anchors to in the current locale (`left`/`right`).
    pub fn toast_side(&self) -> String {
        forms::toast_side(self.state.borrow().locale.direction()).to_string()
    }

    /// Toast background color for a notification kind (`success`, `error`).
    pub fn notification_color(&self, kind: &str) -> String {
        let kind = match kind {
            "error" => NotificationKind::Error,
            _ => NotificationKind::Success,
        };
        kind.color().to_hex()
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardApp {
    /// Show the session username in the header, or bounce to the login page.
    fn init_user_header(&self) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };

        let Some(header) = UserHeader::load(&Storage::session()) else {
            if let Some(w) = window() {
                w.location().set_href(LOGIN_PAGE).ok();
            }
            return;
        };

        if let Some(name_el) = document.get_element_by_id("headerUsername") {
            name_el.set_text_content(Some(header.display_name()));
        }
        if let Some(avatar) = document.get_element_by_id("avatarCircle") {
            avatar.set_text_content(Some(&header.avatar_initial()));
        }
    }

    /// Re-render on window resize while the dashboard view is active.
    fn attach_resize_listener(&mut self) {
        let handle = Rc::clone(&self.state);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if handle.borrow().views.dashboard_visible() {
                render_charts(&handle);
            }
        });
        if let Some(w) = window() {
            w.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .ok();
        }
        self.resize_listener = Some(closure);
    }

    /// Count every stat tile up from zero over fifty steps.
    fn start_stat_animation(&mut self) {
        let Some(tiles) = stat_tiles() else {
            return;
        };
        if tiles.is_empty() {
            return;
        }

        let interval_id = Rc::new(Cell::new(0));
        let id_handle = Rc::clone(&interval_id);
        let mut step = 0u32;
        let interval = Interval::every(stats::COUNT_UP_INTERVAL_MS, move || {
            step += 1;
            for (element, stat) in &tiles {
                element.set_text_content(Some(&stat.display(stat.at_step(step))));
            }
            if step >= stats::COUNT_UP_STEPS {
                if let Some(w) = window() {
                    w.clear_interval_with_handle(id_handle.get());
                }
            }
        });
        if let Some(interval) = &interval {
            interval_id.set(interval.id);
        }
        self.stat_animation = interval;
    }

    /// Periodically pulse random stat tiles while the dashboard is visible.
    fn start_pulse_timer(&mut self) {
        let handle = Rc::clone(&self.state);
        self.pulse_timer = Interval::every(stats::PULSE_INTERVAL_MS, move || {
            if handle.borrow().views.dashboard_visible() {
                pulse_stat_tiles();
            }
        });
    }
}

/// All `.stat-value` tiles with a parseable numeric value.
fn stat_tiles() -> Option<Vec<(HtmlElement, StatValue)>> {
    let document = window()?.document()?;
    let nodes = document.query_selector_all(".stat-value").ok()?;
    let mut tiles = Vec::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let text = element.text_content().unwrap_or_default();
        if let Some(stat) = StatValue::parse(&text) {
            tiles.push((element, stat));
        }
    }
    Some(tiles)
}

/// Scale a random subset of stat tiles up briefly.
fn pulse_stat_tiles() {
    let Some(tiles) = stat_tiles() else {
        return;
    };
    for (element, _) in tiles {
        if !stats::should_pulse(js_sys::Math::random()) {
            continue;
        }
        element
            .style()
            .set_property("transform", &format!("scale({})", stats::PULSE_SCALE))
            .ok();

        let reset_target = element.clone();
        let reset = Closure::once_into_js(move || {
            reset_target
                .style()
                .set_property("transform", "scale(1)")
                .ok();
        });
        if let Some(w) = window() {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                reset.unchecked_ref(),
                stats::PULSE_DURATION_MS,
            )
            .ok();
        }
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
