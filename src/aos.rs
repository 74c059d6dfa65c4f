// Hands the page's scroll animations over to the host AOS library.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

pub const DURATION_MS: u32 = 1000;
pub const EASING: &str = "ease-in-out";
pub const ONCE: bool = true;
pub const MIRROR: bool = false;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

fn options() -> Result<JsValue, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"duration".into(), &DURATION_MS.into())?;
    Reflect::set(&options, &"easing".into(), &EASING.into())?;
    Reflect::set(&options, &"once".into(), &ONCE.into())?;
    Reflect::set(&options, &"mirror".into(), &MIRROR.into())?;
    Ok(options.into())
}

// Missing library just means no scroll animations
pub fn init() {
    if let Err(e) = options().and_then(|options| aos_init(&options)) {
        web_sys::console::warn_2(&"AOS unavailable:".into(), &e);
    }
}
