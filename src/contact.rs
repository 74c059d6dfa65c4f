// Contact form: turns the four form fields into a WhatsApp deep link and
// hands it to the browser. Nothing is sent from here and nothing is
// validated; delivery is entirely up to the messaging service.

use crate::dom_helpers;
use crate::notification::{self, NotificationKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub const SERVICE_URL: &'static str = "https://wa.me";
    pub const RECIPIENT: &'static str = "254705280974";
    pub const GREETING: &'static str = "Hello Timothy! 👋";
    pub const SIGNATURE: &'static str = "Sent from your portfolio website.";
    pub const SENT_NOTICE: &'static str = "Message sent! Opening WhatsApp...";

    pub fn text(&self) -> String {
        format!(
            "{}\n\nName: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n\n{}",
            ContactMessage::GREETING,
            self.name,
            self.email,
            self.subject,
            self.message,
            ContactMessage::SIGNATURE,
        )
    }

    /// The full deep link. Long messages are not truncated; the service may
    /// refuse URLs beyond its own limit.
    ///
    /// `!*'()` are percent-encoded too, unlike `encodeURIComponent`; the
    /// decoded text is the same.
    pub fn deep_link(&self) -> String {
        format!(
            "{}/{}?text={}",
            ContactMessage::SERVICE_URL,
            ContactMessage::RECIPIENT,
            urlencoding::encode(&self.text())
        )
    }
}

// Reads a field by id whether it is an <input> or a <textarea>
fn field_value(document: &Document, id: &str) -> String {
    let element = match document.get_element_by_id(id) {
        Some(element) => element,
        None => return String::new(),
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_form(document: &Document) -> ContactMessage {
    ContactMessage {
        name: field_value(document, "name"),
        email: field_value(document, "email"),
        subject: field_value(document, "subject"),
        message: field_value(document, "message"),
    }
}

fn submit(document: &Document, form: &HtmlFormElement) -> Result<(), JsValue> {
    let link = read_form(document).deep_link();
    dom_helpers::window()?.open_with_url_and_target(&link, "_blank")?;
    notification::show_notification(ContactMessage::SENT_NOTICE, NotificationKind::Success)?;
    form.reset();
    Ok(())
}

pub fn init_contact_form() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let form = match document.get_element_by_id("contactForm") {
        Some(form) => form.dyn_into::<HtmlFormElement>()?,
        None => return Ok(()),
    };

    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if let Err(e) = submit(&document, &form) {
            web_sys::console::warn_2(&"contact handoff failed:".into(), &e);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}
