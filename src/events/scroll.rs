use crate::frame::FrameDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registers a passive scroll listener on the window.
pub fn wire_scroll(window: &web::Window, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

// Scroll only flags the engine; sampling waits for the next frame.
pub fn wire_pour_scroll(window: &web::Window, driver: &FrameDriver) {
    let driver = driver.clone();
    wire_scroll(window, move || driver.mark_dirty());
}

pub fn wire_visibility(document: &web::Document, driver: &FrameDriver) {
    let driver = driver.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        driver.on_visibility(doc.hidden());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
