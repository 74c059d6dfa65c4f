// Gallery lightbox: clicking a gallery item opens its image in a full page
// overlay that closes on a backdrop click, the close button or Escape.

use crate::dom_helpers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

pub const FADE_OUT_MS: i32 = 300;

const STYLE_ID: &str = "lightbox-styles";
const CSS: &str = "
    .lightbox {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background: rgba(0, 0, 0, 0.9);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 10000;
        animation: fadeIn 0.3s ease;
    }
    .lightbox-content { position: relative; max-width: 90%; max-height: 90%; }
    .lightbox img { width: 100%; height: auto; border-radius: 10px; }
    .lightbox-close {
        position: absolute;
        top: -10px;
        right: -10px;
        background: var(--primary-color);
        color: white;
        border: none;
        border-radius: 50%;
        width: 40px;
        height: 40px;
        font-size: 1.5rem;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .lightbox-close:hover { background: var(--danger-color); transform: scale(1.1); }
    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }
";

/// Holds the one open overlay, if any.
///
/// Every dismissal hands the overlay back at most once, so the teardown
/// runs exactly once however many triggers fire. While an overlay is open,
/// further opens are refused instead of stacking.
#[derive(Debug)]
pub struct LightboxSlot<T> {
    current: Option<(u64, T)>,
    next_id: u64,
}

impl<T> Default for LightboxSlot<T> {
    fn default() -> Self {
        LightboxSlot {
            current: None,
            next_id: 0,
        }
    }
}

impl<T> LightboxSlot<T> {
    pub fn new() -> Self {
        LightboxSlot::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Id the next successful `open` will return.
    pub fn pending_id(&self) -> u64 {
        self.next_id
    }

    /// Stores `overlay` and returns its id, or `None` if one is already open.
    pub fn open(&mut self, overlay: T) -> Option<u64> {
        if self.current.is_some() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some((id, overlay));
        Some(id)
    }

    // Escape closes whatever is open
    pub fn dismiss_current(&mut self) -> Option<T> {
        self.current.take().map(|(_, overlay)| overlay)
    }

    /// Closes overlay `id` if it is still the open one.
    pub fn dismiss(&mut self, id: u64) -> Option<T> {
        match &self.current {
            Some((open_id, _)) if *open_id == id => self.dismiss_current(),
            _ => None,
        }
    }
}

// Listeners live exactly as long as the overlay they belong to
struct Overlay {
    element: HtmlElement,
    _on_backdrop: Closure<dyn FnMut(MouseEvent)>,
    _on_close: Closure<dyn FnMut()>,
}

type SharedSlot = Rc<RefCell<LightboxSlot<Overlay>>>;

// Fade out, then detach. The overlay's own listeners are dropped with it
// in the later task, after whichever of them triggered this has returned.
fn teardown(overlay: Overlay) {
    let _ = overlay
        .element
        .style()
        .set_property("animation", "fadeOut 0.3s ease");
    let result = dom_helpers::set_timeout(FADE_OUT_MS, move || {
        if overlay.element.parent_node().is_some() {
            overlay.element.remove();
        }
    });
    if let Err(e) = result {
        web_sys::console::warn_2(&"lightbox teardown failed:".into(), &e);
    }
}

fn build_overlay(
    document: &Document,
    src: &str,
    alt: &str,
) -> Result<(HtmlElement, Element), JsValue> {
    let overlay = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    overlay.set_class_name("lightbox");

    let content = document.create_element("div")?;
    content.set_class_name("lightbox-content");

    let image = document.create_element("img")?;
    image.set_attribute("src", src)?;
    image.set_attribute("alt", alt)?;

    let close = document.create_element("button")?;
    close.set_class_name("lightbox-close");
    close.set_text_content(Some("\u{00d7}"));

    content.append_child(&image)?;
    content.append_child(&close)?;
    overlay.append_child(&content)?;
    Ok((overlay, close))
}

fn open_lightbox(slot: &SharedSlot, item: &Element) -> Result<(), JsValue> {
    if slot.borrow().is_open() {
        return Ok(());
    }
    let image = match item.query_selector("img")? {
        Some(image) => image,
        None => return Ok(()),
    };
    // resolved URL, as the image itself loaded it
    let src = js_sys::Reflect::get(&image, &"src".into())?
        .as_string()
        .unwrap_or_default();
    let alt = image.get_attribute("alt").unwrap_or_default();

    let document = dom_helpers::document()?;
    dom_helpers::inject_style_once(&document, STYLE_ID, CSS)?;
    let (element, close) = build_overlay(&document, &src, &alt)?;

    let id = slot.borrow().pending_id();

    let backdrop_slot = slot.clone();
    let backdrop: EventTarget = element.clone().into();
    let on_backdrop = Closure::wrap(Box::new(move |event: MouseEvent| {
        // clicks on the image or button bubble up with another target
        let on_backdrop = event.target().map_or(false, |target| target == backdrop);
        if on_backdrop {
            let dismissed = backdrop_slot.borrow_mut().dismiss(id);
            if let Some(overlay) = dismissed {
                teardown(overlay);
            }
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let close_slot = slot.clone();
    let on_close = Closure::wrap(Box::new(move || {
        let dismissed = close_slot.borrow_mut().dismiss(id);
        if let Some(overlay) = dismissed {
            teardown(overlay);
        }
    }) as Box<dyn FnMut()>);

    element.add_event_listener_with_callback("click", on_backdrop.as_ref().unchecked_ref())?;
    close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
    dom_helpers::body()?.append_child(&element)?;

    slot.borrow_mut().open(Overlay {
        element,
        _on_backdrop: on_backdrop,
        _on_close: on_close,
    });
    Ok(())
}

pub fn init_gallery_lightbox() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let items = dom_helpers::query_all(&document, ".gallery-item")?;
    if items.is_empty() {
        return Ok(());
    }
    let slot: SharedSlot = Rc::new(RefCell::new(LightboxSlot::new()));

    for item in items {
        let item_slot = slot.clone();
        let clicked = item.clone();
        let on_click = Closure::wrap(Box::new(move || {
            if let Err(e) = open_lightbox(&item_slot, &clicked) {
                web_sys::console::warn_2(&"lightbox failed to open:".into(), &e);
            }
        }) as Box<dyn FnMut()>);
        item.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    let escape_slot = slot;
    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if event.key() != "Escape" {
            return;
        }
        let dismissed = escape_slot.borrow_mut().dismiss_current();
        if let Some(overlay) = dismissed {
            teardown(overlay);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_trigger_closes_the_open_overlay_once() {
        let mut slot = LightboxSlot::new();
        let id = slot.open("a").unwrap();

        // backdrop click
        assert_eq!(slot.dismiss(id), Some("a"));
        // close button and Escape arriving afterwards find nothing
        assert_eq!(slot.dismiss(id), None);
        assert_eq!(slot.dismiss_current(), None);
        assert!(!slot.is_open());
    }

    #[test]
    fn escape_closes_whatever_is_open() {
        let mut slot = LightboxSlot::new();
        slot.open("a").unwrap();
        assert_eq!(slot.dismiss_current(), Some("a"));
    }

    #[test]
    fn dismissing_with_nothing_open_is_a_no_op() {
        let mut slot: LightboxSlot<&str> = LightboxSlot::new();
        assert_eq!(slot.dismiss_current(), None);
        assert_eq!(slot.dismiss(0), None);
    }

    #[test]
    fn overlays_do_not_stack() {
        let mut slot = LightboxSlot::new();
        assert!(slot.open("a").is_some());
        assert_eq!(slot.open("b"), None);
        assert_eq!(slot.dismiss_current(), Some("a"));
    }

    #[test]
    fn stale_trigger_leaves_a_newer_overlay_alone() {
        let mut slot = LightboxSlot::new();
        let first = slot.open("a").unwrap();
        assert_eq!(slot.pending_id(), first + 1);
        slot.dismiss(first);
        let second = slot.open("b").unwrap();
        assert_ne!(first, second);
        assert_eq!(slot.dismiss(first), None);
        assert_eq!(slot.dismiss(second), Some("b"));
    }
}
