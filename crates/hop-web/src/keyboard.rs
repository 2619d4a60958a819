use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};
use hop_engine::InputEvent;

/// Forward `keydown`/`keyup` on the document to `handler`.
/// When the handler recognises the key, the browser default (page scroll for
/// space) is suppressed.
pub fn listen<H>(document: &Document, handler: H) -> Result<(), JsValue>
where
    H: Fn(InputEvent) -> bool + Clone + 'static,
{
    for (kind, down) in [("keydown", true), ("keyup", false)] {
        let handler = handler.clone();
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let key_code = key_code(&event);
            let input = if down {
                InputEvent::KeyDown { key_code }
            } else {
                InputEvent::KeyUp { key_code }
            };
            if handler(input) {
                event.prevent_default();
            }
        });
        document.add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }
    Ok(())
}

/// `keyCode`, or `charCode` for hosts that only fill that one.
fn key_code(event: &KeyboardEvent) -> u32 {
    match event.key_code() {
        0 => event.char_code(),
        code => code,
    }
}
