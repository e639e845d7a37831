use crate::core::page::header_scrolled;
use crate::dom;
use crate::events::scroll::wire_scroll;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn update(header: &web::Element, window: &web::Window) {
    dom::toggle_class(header, "scrolled", header_scrolled(dom::window_scroll_y(window)));
}

/// Sticky header: at most one class update per frame however fast the
/// page scrolls.
pub fn init(window: &web::Window, document: &web::Document) {
    let Some(header) = document.get_element_by_id("siteHeader") else {
        return;
    };
    update(&header, window);

    let ticking = Rc::new(Cell::new(false));
    let on_frame = {
        let ticking = ticking.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            update(&header, &window);
            ticking.set(false);
        }) as Box<dyn FnMut()>)
    };
    let win = window.clone();
    wire_scroll(window, move || {
        if ticking.get() {
            return;
        }
        if win
            .request_animation_frame(on_frame.as_ref().unchecked_ref())
            .is_ok()
        {
            ticking.set(true);
        }
    });
}
