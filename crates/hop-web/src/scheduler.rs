//! Frame scheduling: `requestAnimationFrame`, or a fixed timer when the host
//! has none.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Schedule `callback` for the next frame.
pub fn request_frame(window: &Window, callback: &Closure<dyn FnMut()>, fallback_ms: i32) -> Result<(), JsValue> {
    let f: &js_sys::Function = callback.as_ref().unchecked_ref();
    if let Err(err) = window.request_animation_frame(f) {
        log::debug!("requestAnimationFrame unavailable ({:?}), using {}ms timer", err, fallback_ms);
        window.set_timeout_with_callback_and_timeout_and_arguments_0(f, fallback_ms)?;
    }
    Ok(())
}

/// Call `frame` once per frame for the rest of the page's life.
pub fn run_forever(window: Window, fallback_ms: i32, mut frame: impl FnMut() + 'static) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let loop_window = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        frame();
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(&loop_window, callback, fallback_ms) {
                log::error!("frame loop stopped: {:?}", err);
            }
        }
    }));

    let first = slot.borrow();
    let started = match first.as_ref() {
        Some(callback) => request_frame(&window, callback, fallback_ms),
        None => Err(JsValue::from_str("frame callback missing")),
    };
    started
}
