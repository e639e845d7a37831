use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_click(
    target: &web::EventTarget,
    mut handler: impl FnMut(&web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        handler(&ev);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_hover(
    target: &web::EventTarget,
    mut on_enter: impl FnMut() + 'static,
    mut on_leave: impl FnMut() + 'static,
) {
    let enter =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || on_enter()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
    enter.forget();

    let leave =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || on_leave()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}

/// True when the event originated inside `el` (or is `el` itself).
pub fn event_within(ev: &web::Event, el: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|node| el.contains(Some(&node)))
        .unwrap_or(false)
}
