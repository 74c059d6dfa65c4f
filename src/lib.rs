use wasm_bindgen::prelude::*;
use web_sys::console;

// A macro to provide `println!(..)`-style syntax for `console.log` logging.
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into());
    }
}

// Same as `log!` but for features that degraded instead of starting.
macro_rules! warn {
    ( $( $t:tt )* ) => {
        web_sys::console::warn_1(&format!( $( $t )* ).into());
    }
}

mod aos;
pub mod color;
pub mod contact;
pub mod counter;
mod dom_helpers;
pub mod lightbox;
pub mod navigation;
pub mod notification;
pub mod particle;
pub mod particle_engine;
pub mod particle_field;
pub mod renderer;
pub mod reveal;
pub mod theme;
pub mod typing;
mod utils;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Wires every page controller once the document is ready.
///
/// A feature whose markup is missing does nothing; a feature that fails
/// to start is reported on the console and the rest still start.
#[wasm_bindgen]
pub fn start() {
    let _timer = Timer::new("portfolio::start");
    aos::init();

    let features: [(&str, fn() -> Result<(), JsValue>); 12] = [
        ("navbar", navigation::init_navbar),
        ("counters", reveal::init_counters),
        ("skill bars", reveal::init_progress_bars),
        ("lazy images", reveal::init_lazy_images),
        ("back to top", navigation::init_back_to_top),
        ("contact form", contact::init_contact_form),
        ("typing effect", typing::init_typing_effect),
        ("particles", particle_engine::init_particles),
        ("smooth scrolling", navigation::init_smooth_scrolling),
        ("theme toggle", theme::init_theme_toggle),
        ("gallery lightbox", lightbox::init_gallery_lightbox),
        ("page loaded", navigation::init_loaded_marker),
    ];
    for (name, init) in features.iter() {
        if let Err(e) = init() {
            console::warn_2(&format!("{} failed to start:", name).into(), &e);
        }
    }

    print_banner();
}

fn print_banner() {
    console::log_2(
        &"%cTimothy Nyongoki Portfolio".into(),
        &"color: #007bff; font-size: 20px; font-weight: bold;".into(),
    );
    console::log_2(
        &"%cBuilt with ❤️ using HTML5, CSS3, Rust and WebAssembly".into(),
        &"color: #28a745; font-size: 14px;".into(),
    );
    console::log_2(
        &format!(
            "%cInterested in collaboration? WhatsApp: +{}",
            contact::ContactMessage::RECIPIENT
        )
        .into(),
        &"color: #17a2b8; font-size: 12px;".into(),
    );
}
