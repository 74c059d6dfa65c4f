//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_interactivity::theme::{self, Theme, ThemeController};
use portfolio_interactivity::{lightbox, particle_engine};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn theme_round_trips_through_local_storage() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(Theme::STORAGE_KEY).unwrap();

    let mut controller = ThemeController::restore(storage.clone());
    assert_eq!(controller.theme(), Theme::Light);

    assert_eq!(controller.toggle(), Theme::Dark);
    controller.persist().unwrap();
    assert_eq!(
        storage.get_item(Theme::STORAGE_KEY).unwrap().as_deref(),
        Some("dark")
    );
    assert_eq!(ThemeController::restore(storage.clone()).theme(), Theme::Dark);

    storage.set_item(Theme::STORAGE_KEY, "sepia").unwrap();
    assert_eq!(ThemeController::restore(storage.clone()).theme(), Theme::Light);
    storage.remove_item(Theme::STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn theme_toggle_injects_its_stylesheet_once() {
    let document = document();
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(Theme::STORAGE_KEY).unwrap();

    let container = document.create_element("div").unwrap();
    container.set_class_name("theme-toggle-container");
    let button = document.create_element("button").unwrap();
    button.set_class_name("theme-toggle");
    container.append_child(&button).unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    theme::init_theme_toggle().unwrap();
    theme::init_theme_toggle().unwrap();
    let styles = document.query_selector_all("style#theme-styles").unwrap();
    assert_eq!(styles.length(), 1);
    let css = styles.get(0).unwrap().text_content().unwrap_or_default();
    assert!(css.contains(".dark-theme"));
    assert!(css.contains(".theme-toggle-container"));
    container.remove();
}

#[wasm_bindgen_test]
fn particle_canvas_matches_the_hero_section() {
    let document = document();
    let hero = document
        .create_element("section")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    hero.set_class_name("hero-section");
    hero.style().set_property("display", "block").unwrap();
    hero.style().set_property("width", "300px").unwrap();
    hero.style().set_property("height", "200px").unwrap();
    document.body().unwrap().append_child(&hero).unwrap();

    particle_engine::init_particles().unwrap();

    let canvas = hero
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    assert_eq!(canvas.width(), 300);
    assert_eq!(canvas.height(), 200);
    hero.remove();
}

fn gallery_item(document: &Document, alt: &str) -> HtmlElement {
    let item = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    item.set_class_name("gallery-item");
    let image = document.create_element("img").unwrap();
    image.set_attribute("src", "data:,").unwrap();
    image.set_attribute("alt", alt).unwrap();
    item.append_child(&image).unwrap();
    document.body().unwrap().append_child(&item).unwrap();
    item
}

fn lightbox_count(document: &Document) -> u32 {
    document.query_selector_all(".lightbox").unwrap().length()
}

// Overlays are appended to the body, and fading ones linger for a moment.
fn newest_lightbox(document: &Document) -> HtmlElement {
    let overlays = document.query_selector_all(".lightbox").unwrap();
    overlays
        .get(overlays.length() - 1)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn fading(overlay: &HtmlElement) -> bool {
    overlay
        .style()
        .get_property_value("animation")
        .unwrap()
        .contains("fadeOut")
}

#[wasm_bindgen_test]
fn lightbox_opens_once_and_escape_dismisses_it() {
    let document = document();
    let item = gallery_item(&document, "shot");

    lightbox::init_gallery_lightbox().unwrap();
    let before = lightbox_count(&document);
    item.click();
    item.click();
    assert_eq!(lightbox_count(&document), before + 1);

    let overlay = newest_lightbox(&document);
    let image = overlay.query_selector("img").unwrap().unwrap();
    assert_eq!(image.get_attribute("alt").as_deref(), Some("shot"));

    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&escape).unwrap();
    assert!(fading(&overlay));

    // nothing left open: a second Escape is harmless
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&escape).unwrap();
    item.remove();
}

#[wasm_bindgen_test]
fn clicking_the_enlarged_image_keeps_the_lightbox_open() {
    let document = document();
    let item = gallery_item(&document, "keep");

    lightbox::init_gallery_lightbox().unwrap();
    item.click();
    let overlay = newest_lightbox(&document);
    overlay
        .query_selector("img")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert!(!fading(&overlay));

    overlay.click();
    assert!(fading(&overlay));
    item.remove();
}

#[wasm_bindgen_test]
fn backdrop_and_close_button_each_dismiss_the_lightbox() {
    let document = document();
    let item = gallery_item(&document, "twice");

    lightbox::init_gallery_lightbox().unwrap();
    item.click();
    let first = newest_lightbox(&document);
    first.click();
    assert!(fading(&first));

    // the slot is free again while the first overlay is still fading
    item.click();
    let second = newest_lightbox(&document);
    assert!(first != second);
    assert!(!fading(&second));
    second
        .query_selector(".lightbox-close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
    assert!(fading(&second));
    item.remove();
}
