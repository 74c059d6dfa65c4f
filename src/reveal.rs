// Reveal-on-view: counters, skill bars and lazy images each start their
// effect the first time they scroll sufficiently into view, and only then.

use crate::counter::{parse_target, CounterAnimation};
use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// What happens when an observed element is revealed.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealKind {
    Counter { target: Option<i64> },
    ProgressBar { width: String },
    LazyImage { src: String },
}

impl RevealKind {
    pub const COUNTER_SELECTOR: &'static str = ".counter";
    pub const PROGRESS_BAR_SELECTOR: &'static str = ".progress-bar";
    pub const LAZY_IMAGE_SELECTOR: &'static str = "img[data-src]";

    pub const PROGRESS_BAR_DELAY_MS: i32 = 200;

    pub fn threshold(&self) -> f64 {
        match self {
            RevealKind::LazyImage { .. } => 0.1,
            _ => 0.5,
        }
    }

    pub fn root_margin(&self) -> Option<&'static str> {
        match self {
            RevealKind::LazyImage { .. } => Some("0px 0px 50px 0px"),
            _ => None,
        }
    }

    pub fn counter(element: &Element) -> RevealKind {
        let target = element
            .get_attribute("data-target")
            .and_then(|raw| parse_target(&raw));
        RevealKind::Counter { target }
    }

    pub fn progress_bar(element: &Element) -> RevealKind {
        RevealKind::ProgressBar {
            width: element.get_attribute("data-width").unwrap_or_default(),
        }
    }

    pub fn lazy_image(element: &Element) -> RevealKind {
        RevealKind::LazyImage {
            src: element.get_attribute("data-src").unwrap_or_default(),
        }
    }
}

/// At-most-once trigger for a single observed element.
#[derive(Clone, Debug, Default)]
pub struct RevealOnce {
    fired: bool,
}

impl RevealOnce {
    pub fn new() -> Self {
        RevealOnce::default()
    }

    /// True exactly once: the first time the element is seen intersecting.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

fn run(element: Element, kind: &RevealKind) -> Result<(), JsValue> {
    match kind {
        RevealKind::Counter { target: Some(target) } => {
            let mut animation = CounterAnimation::new(*target);
            dom_helpers::schedule_repeating(CounterAnimation::STEP_DELAY_MS, move || {
                let value = animation.tick()?;
                element.set_text_content(Some(&value.to_string()));
                if animation.is_finished() {
                    None
                } else {
                    Some(CounterAnimation::STEP_DELAY_MS)
                }
            })
        }
        RevealKind::Counter { target: None } => {
            warn!(
                "counter has no numeric data-target: {:?}",
                element.get_attribute("data-target")
            );
            Ok(())
        }
        RevealKind::ProgressBar { width } => {
            let bar = element.dyn_into::<HtmlElement>()?;
            let width = format!("{}%", width);
            dom_helpers::set_timeout(RevealKind::PROGRESS_BAR_DELAY_MS, move || {
                let _ = bar.style().set_property("width", &width);
            })?;
            Ok(())
        }
        RevealKind::LazyImage { src } => {
            element.set_attribute("src", src)?;
            element.class_list().remove_1("lazy")?;
            Ok(())
        }
    }
}

// One observer per kind; each element is unobserved after it fires
fn observe_all(selector: &str, make_kind: fn(&Element) -> RevealKind) -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let elements = dom_helpers::query_all(&document, selector)?;
    let first = match elements.first() {
        Some(first) => make_kind(first),
        None => return Ok(()),
    };

    let mut tracked: Vec<(Element, RevealOnce)> = elements
        .iter()
        .map(|element| (element.clone(), RevealOnce::new()))
        .collect();
    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                let target = entry.target();
                let fired = tracked
                    .iter_mut()
                    .find(|(element, _)| *element == target)
                    .map_or(false, |(_, once)| once.observe(entry.is_intersecting()));
                if !fired {
                    continue;
                }
                observer.unobserve(&target);
                let kind = make_kind(&target);
                if let Err(e) = run(target, &kind) {
                    web_sys::console::warn_2(&"reveal failed:".into(), &e);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(first.threshold()));
    if let Some(margin) = first.root_margin() {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &options,
    )?;
    on_intersect.forget();

    for element in &elements {
        observer.observe(element);
    }
    Ok(())
}

pub fn init_counters() -> Result<(), JsValue> {
    observe_all(RevealKind::COUNTER_SELECTOR, RevealKind::counter)
}

pub fn init_progress_bars() -> Result<(), JsValue> {
    observe_all(RevealKind::PROGRESS_BAR_SELECTOR, RevealKind::progress_bar)
}

pub fn init_lazy_images() -> Result<(), JsValue> {
    observe_all(RevealKind::LAZY_IMAGE_SELECTOR, RevealKind::lazy_image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_on_first_intersection() {
        let mut once = RevealOnce::new();
        assert!(!once.observe(false));
        assert!(once.observe(true));
        assert!(!once.observe(false));
        assert!(!once.observe(true));
        assert!(once.has_fired());
    }

    #[test]
    fn lazy_images_use_a_wider_net() {
        let image = RevealKind::LazyImage { src: "a.png".into() };
        let bar = RevealKind::ProgressBar { width: "80".into() };
        assert_eq!(image.threshold(), 0.1);
        assert_eq!(image.root_margin(), Some("0px 0px 50px 0px"));
        assert_eq!(bar.threshold(), 0.5);
        assert_eq!(bar.root_margin(), None);
    }
}
