// Mounts the particle canvas over the hero section and runs the
// simulate-and-render loop once per display frame.

use crate::color::Color;
use crate::dom_helpers;
use crate::particle_field::ParticleField;
use crate::renderer::Renderer;
use crate::Timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

const HERO_SELECTOR: &str = ".hero-section";

fn create_canvas(document: &web_sys::Document) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    let style = canvas.style();
    style.set_property("position", "absolute")?;
    style.set_property("top", "0")?;
    style.set_property("left", "0")?;
    style.set_property("width", "100%")?;
    style.set_property("height", "100%")?;
    style.set_property("pointer-events", "none")?;
    style.set_property("z-index", "1")?;
    Ok(canvas)
}

// Match the canvas to the hero section and start over with fresh particles
fn reset(canvas: &HtmlCanvasElement, hero: &HtmlElement, field: &mut ParticleField) {
    let _timer = Timer::new("ParticleField::reset");
    let width = hero.offset_width().max(0) as u32;
    let height = hero.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    field.reset(
        width as f64,
        height as f64,
        ParticleField::DEFAULT_COUNT,
        &mut rand::thread_rng(),
    );
}

pub fn init_particles() -> Result<(), JsValue> {
    let document = dom_helpers::document()?;
    let hero = match dom_helpers::query_html(&document, HERO_SELECTOR)? {
        Some(hero) => hero,
        None => return Ok(()),
    };

    let canvas = create_canvas(&document)?;
    hero.append_child(&canvas)?;
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let field = Rc::new(RefCell::new(ParticleField::new(0.0, 0.0)));
    reset(&canvas, &hero, &mut field.borrow_mut());
    log!(
        "particle field: {} particles on {}x{}",
        field.borrow().particles().len(),
        canvas.width(),
        canvas.height()
    );

    {
        let field = field.clone();
        let canvas = canvas.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            reset(&canvas, &hero, &mut field.borrow_mut());
        }) as Box<dyn FnMut()>);
        dom_helpers::window()?
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    let renderer = Renderer::new(Color::PRIMARY);
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut field = field.borrow_mut();
            field.update();
            renderer.render(&context, &field);
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(e) = dom_helpers::request_animation_frame(callback) {
                web_sys::console::warn_2(&"particle loop stopped:".into(), &e);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = frame.borrow().as_ref() {
        dom_helpers::request_animation_frame(callback)?;
    }
    Ok(())
}
