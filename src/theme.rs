// Light/dark theme toggle, persisted under a single local storage key.

use crate::dom_helpers;
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Storage};

const THEME_STYLE_ID: &str = "theme-styles";
const THEME_CSS: &str = "
    .theme-toggle-container {
        display: flex;
        align-items: center;
        gap: 10px;
        padding: 8px 12px;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(10px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        transition: all 0.3s ease;
        margin-left: 15px;
    }
    .theme-toggle-container:hover {
        background: rgba(255, 255, 255, 0.2);
        transform: translateY(-1px);
    }
    .theme-toggle {
        background: var(--primary-color);
        color: white;
        border: none;
        border-radius: 50%;
        width: 40px;
        height: 40px;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s ease;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .theme-toggle:hover { transform: scale(1.1); background: var(--info-color); }
    .theme-label {
        font-size: 0.9rem;
        font-weight: 600;
        color: var(--dark-color);
        white-space: nowrap;
        user-select: none;
    }
    .dark-theme .theme-toggle-container {
        background: rgba(42, 42, 42, 0.95);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .dark-theme .theme-label { color: #ffffff; }
    .dark-theme {
        --bg-color: #1a1a1a;
        --text-color: #ffffff;
        --dark-color: #ffffff;
        --light-color: #1a1a1a;
        background-color: #1a1a1a;
        color: #ffffff;
    }
    .dark-theme .navbar { background: rgba(0, 0, 0, 0.95) !important; }
    .dark-theme .section-title { color: #ffffff !important; }
    .dark-theme .interest-card { background: #2a2a2a !important; color: #ffffff; }
    .dark-theme .gallery-item { background: #2a2a2a; }
    .dark-theme section { background-color: #1a1a1a !important; }
    .dark-theme .bg-light { background-color: #2a2a2a !important; }
    .dark-theme .about-content h3 { color: var(--primary-color) !important; }
    .dark-theme .skill-header h5 { color: #ffffff !important; }
    .dark-theme .counter-label { color: #cccccc !important; }
    .dark-theme .floating-card { background: #2a2a2a !important; color: #ffffff; }
    .dark-theme .floating-card h5 { color: #ffffff !important; }
    .dark-theme .floating-card p,
    .dark-theme p,
    .dark-theme .lead { color: #cccccc !important; }
";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";
    pub const DARK_CLASS: &'static str = "dark-theme";

    /// Only an exact `"dark"` restores dark mode.
    pub fn from_stored(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // The control offers the other mode
    pub fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), JsValue>;
}

impl ThemeStore for Storage {
    fn load(&self) -> Option<String> {
        self.get_item(Theme::STORAGE_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) -> Result<(), JsValue> {
        self.set_item(Theme::STORAGE_KEY, value)
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    theme: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the persisted choice; anything unrecognized means light.
    pub fn restore(store: S) -> Self {
        let theme = Theme::from_stored(store.load().as_deref());
        ThemeController { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme. Persisting is separate so a failing store never
    /// leaves the controller and the page disagreeing.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn persist(&mut self) -> Result<(), JsValue> {
        self.store.save(self.theme.as_str())
    }
}

struct ThemeView {
    body: Element,
    icon: Option<Element>,
    label: Option<Element>,
}

impl ThemeView {
    fn apply(&self, theme: Theme) -> Result<(), JsValue> {
        self.body
            .class_list()
            .toggle_with_force(Theme::DARK_CLASS, theme == Theme::Dark)?;
        if let Some(icon) = &self.icon {
            icon.set_class_name(theme.icon_class());
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(theme.label()));
        }
        Ok(())
    }
}

pub fn init_theme_toggle() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let container = match document.query_selector(".theme-toggle-container")? {
        Some(container) => container,
        None => return Ok(()),
    };
    let toggle = match container.query_selector(".theme-toggle")? {
        Some(toggle) => toggle,
        None => return Ok(()),
    };
    let storage = match dom_helpers::window()?.local_storage()? {
        Some(storage) => storage,
        None => return Ok(()),
    };

    dom_helpers::inject_style_once(&document, THEME_STYLE_ID, THEME_CSS)?;

    let view = ThemeView {
        body: dom_helpers::body()?.unchecked_into::<Element>(),
        icon: toggle.query_selector("i")?,
        label: container.query_selector(".theme-label")?,
    };
    let mut controller = ThemeController::restore(storage);
    if controller.theme() == Theme::Dark {
        view.apply(Theme::Dark)?;
    }

    let on_click = Closure::wrap(Box::new(move || {
        let theme = controller.toggle();
        if let Err(e) = view.apply(theme) {
            web_sys::console::warn_2(&"theme toggle failed:".into(), &e);
        }
        // private mode or a full quota only costs the saved preference
        if let Err(e) = controller.persist() {
            web_sys::console::warn_2(&"theme not saved:".into(), &e);
        }
    }) as Box<dyn FnMut()>);
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
