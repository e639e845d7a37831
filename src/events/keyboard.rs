use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

pub fn wire_keydown(
    target: &web::EventTarget,
    mut handler: impl FnMut(&web::KeyboardEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handler(&ev);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Escape anywhere on the page
pub fn wire_escape(document: &web::Document, mut handler: impl FnMut() + 'static) {
    wire_keydown(document, move |ev| {
        if is_escape(&ev.key()) {
            handler();
        }
    });
}
