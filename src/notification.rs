// Transient toast in the top right corner.

use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub const VISIBLE_MS: i32 = 3000;
pub const SLIDE_OUT_MS: i32 = 300;

const STYLE_ID: &str = "notification-styles";
const CSS: &str = "
    .notification {
        position: fixed;
        top: 20px;
        right: 20px;
        padding: 15px 20px;
        border-radius: 10px;
        color: white;
        font-weight: 500;
        z-index: 10000;
        animation: slideIn 0.3s ease;
        max-width: 300px;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
    }
    .notification-success { background: linear-gradient(135deg, #28a745, #34ce57); }
    .notification-error { background: linear-gradient(135deg, #dc3545, #f56565); }
    .notification-info { background: linear-gradient(135deg, #007bff, #17a2b8); }
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class_name(&self) -> String {
        let kind = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        };
        format!("notification notification-{}", kind)
    }
}

impl Default for NotificationKind {
    fn default() -> Self {
        NotificationKind::Info
    }
}

pub fn show_notification(message: &str, kind: NotificationKind) -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    dom_helpers::inject_style_once(&document, STYLE_ID, CSS)?;

    let notification = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    notification.set_class_name(&kind.class_name());
    notification.set_text_content(Some(message));
    dom_helpers::body()?.append_child(&notification)?;

    dom_helpers::set_timeout(VISIBLE_MS, move || {
        let _ = notification
            .style()
            .set_property("animation", "slideOut 0.3s ease");
        let _ = dom_helpers::set_timeout(SLIDE_OUT_MS, move || {
            // the page may already have dropped it
            if notification.parent_node().is_some() {
                notification.remove();
            }
        });
    })?;
    Ok(())
}
