// Navbar chrome, active link tracking, back-to-top, smooth anchor scrolling
// and the page-loaded marker.

use crate::dom_helpers;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

pub const NAVBAR_SOLID_OFFSET: f64 = 100.0;
pub const SECTION_LOOKAHEAD: f64 = 200.0;
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64) -> NavbarStyle {
        if scroll_y > NAVBAR_SOLID_OFFSET {
            NavbarStyle {
                background: "rgba(0, 0, 0, 0.95)",
                box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
            }
        } else {
            NavbarStyle {
                background: "rgba(0, 0, 0, 0.9)",
                box_shadow: "none",
            }
        }
    }
}

/// A section's id and its offset from the top of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The last section, in document order, whose top is within the lookahead
/// of the current scroll position. Sections without an id never match a link.
pub fn active_section(scroll_y: f64, sections: &[SectionOffset]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| !section.id.is_empty())
        .filter(|section| scroll_y >= section.top - SECTION_LOOKAHEAD)
        .last()
        .map(|section| section.id.as_str())
}

pub fn shows_back_to_top(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn section_offsets(sections: &[Element]) -> Vec<SectionOffset> {
    sections
        .iter()
        .filter_map(|section| section.dyn_ref::<HtmlElement>())
        .map(|section| SectionOffset {
            id: section.id(),
            top: section.offset_top() as f64,
        })
        .collect()
}

fn highlight(links: &[Element], active: Option<&str>) -> Result<(), JsValue> {
    let wanted = active.map(|id| format!("#{}", id));
    for link in links {
        let classes = link.class_list();
        classes.remove_1("active")?;
        if wanted.is_some() && link.get_attribute("href") == wanted {
            classes.add_1("active")?;
        }
    }
    Ok(())
}

fn on_window<F>(event: &str, f: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    dom_helpers::window()?
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn init_navbar() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let navbar = match dom_helpers::query_html(&document, ".navbar")? {
        Some(navbar) => navbar,
        None => return Ok(()),
    };
    let links = dom_helpers::query_all(&document, ".nav-link")?;

    on_window("scroll", move || {
        let style = NavbarStyle::for_scroll(scroll_y());
        let css = navbar.style();
        let _ = css.set_property("background", style.background);
        let _ = css.set_property("box-shadow", style.box_shadow);
    })?;

    // sections are looked up on every scroll, the page may add some later
    on_window("scroll", move || {
        let sections = match dom_helpers::query_all(&document, "section") {
            Ok(sections) => section_offsets(&sections),
            Err(_) => return,
        };
        let _ = highlight(&links, active_section(scroll_y(), &sections));
    })
}

pub fn init_back_to_top() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let button = match document.query_selector(".back-to-top")? {
        Some(button) => button,
        None => return Ok(()),
    };

    let shown = button.clone();
    on_window("scroll", move || {
        let _ = shown
            .class_list()
            .toggle_with_force("show", shows_back_to_top(scroll_y()));
    })?;

    let on_click = Closure::wrap(Box::new(move || {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

pub fn init_smooth_scrolling() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    for anchor in dom_helpers::query_all(&document, "a[href^=\"#\"]")? {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let lookup = document.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            // a bare "#" is not a valid selector
            if href.len() < 2 {
                return;
            }
            if let Ok(Some(target)) = lookup.query_selector(&href) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

pub fn init_loaded_marker() -> Result<(), JsValue> {
    on_window("load", || {
        let mark = || -> Result<(), JsValue> {
            dom_helpers::body()?.class_list().add_1("loaded")?;
            let document = dom_helpers::document()?;
            for element in dom_helpers::query_all(&document, ".loading")? {
                element.class_list().add_1("loaded")?;
            }
            Ok(())
        };
        if let Err(e) = mark() {
            web_sys::console::warn_2(&"page loaded marker failed:".into(), &e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset { id: "home".into(), top: 0.0 },
            SectionOffset { id: "about".into(), top: 700.0 },
            SectionOffset { id: "contact".into(), top: 1500.0 },
        ]
    }

    #[test]
    fn navbar_turns_solid_past_the_offset() {
        assert_eq!(NavbarStyle::for_scroll(100.0).box_shadow, "none");
        assert_eq!(NavbarStyle::for_scroll(100.5).background, "rgba(0, 0, 0, 0.95)");
    }

    #[test]
    fn picks_the_last_section_within_lookahead() {
        let sections = sections();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(499.0, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), Some("about"));
        assert_eq!(active_section(5000.0, &sections), Some("contact"));
    }

    #[test]
    fn no_section_means_no_active_link() {
        let late = vec![SectionOffset { id: "late".into(), top: 900.0 }];
        assert_eq!(active_section(0.0, &late), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn sections_without_an_id_are_skipped() {
        let mut sections = sections();
        sections.push(SectionOffset { id: String::new(), top: 2000.0 });
        assert_eq!(active_section(5000.0, &sections), Some("contact"));

        let anonymous = vec![SectionOffset { id: String::new(), top: 0.0 }];
        assert_eq!(active_section(0.0, &anonymous), None);
    }

    #[test]
    fn back_to_top_appears_after_offset() {
        assert!(!shows_back_to_top(300.0));
        assert!(shows_back_to_top(301.0));
    }
}
