use crate::constants::HEADER_HEIGHT_DEFAULT;
use crate::core::page::{anchor_id, anchor_scroll_top, parse_header_height};
use crate::dom;
use crate::events::pointer::wire_click;
use wasm_bindgen::JsValue;
use web_sys as web;

fn header_height(window: &web::Window, document: &web::Document) -> i32 {
    document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value("--header-height").ok())
        .map(|raw| parse_header_height(&raw))
        .unwrap_or(HEADER_HEIGHT_DEFAULT)
}

/// In-page links scroll so the target lands just below the sticky header.
pub fn init(window: &web::Window, document: &web::Document, reduced_motion: bool) {
    let offset = header_height(window, document);
    let behavior = if reduced_motion {
        web::ScrollBehavior::Instant
    } else {
        web::ScrollBehavior::Smooth
    };

    for link in dom::query_all(document, "a[href^=\"#\"]") {
        let (window, document, anchor) = (window.clone(), document.clone(), link.clone());
        wire_click(&link, move |ev| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            ev.prevent_default();

            let top = anchor_scroll_top(
                target.get_bounding_client_rect().top(),
                dom::window_scroll_y(&window),
                offset,
            );
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(behavior);
            window.scroll_to_with_scroll_to_options(&opts);
            if let Ok(history) = window.history() {
                _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
            }
        });
    }
}
