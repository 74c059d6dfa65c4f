// Helper functions for dealing with the DOM: lookups, timers and one-off
// stylesheet injection shared by the page controllers.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document should have a body"))
}

pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    match document.query_selector(selector)? {
        Some(element) => Ok(Some(element.dyn_into::<HtmlElement>()?)),
        None => Ok(None),
    }
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}

/// Appends a `<style>` block to the document head unless one with `id` exists.
pub fn inject_style_once(document: &Document, id: &str, css: &str) -> Result<(), JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document should have a head"))?;
    head.append_child(&style)?;
    Ok(())
}

pub fn set_timeout<F>(delay_ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    )
}

/// Drives a self-rescheduling timer. `step` runs after `first_delay_ms` and
/// returns the delay before its next run, or `None` to stop.
///
/// The callback keeps itself alive through its own slot. Once `step` stops,
/// the slot is emptied from a later task, never while the callback runs.
pub fn schedule_repeating<F>(first_delay_ms: i32, mut step: F) -> Result<(), JsValue>
where
    F: FnMut() -> Option<i32> + 'static,
{
    let window = window()?;
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = slot.clone();
    let timer_window = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let delay = match step() {
            Some(delay) => delay,
            None => {
                let finished = handle.clone();
                let _ = set_timeout(0, move || {
                    finished.borrow_mut().take();
                });
                return;
            }
        };
        if let Some(callback) = handle.borrow().as_ref() {
            if let Err(e) = timer_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay,
            ) {
                web_sys::console::warn_2(&"failed to reschedule timer".into(), &e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = slot.borrow().as_ref() {
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            first_delay_ms,
        )?;
    }
    Ok(())
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref())
}
