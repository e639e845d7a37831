use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub type ElementList = SmallVec<[web::Element; 8]>;

/// Evaluates a media query once; `false` when unsupported.
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn collect(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> ElementList {
    let mut out = ElementList::new();
    if let Ok(list) = list {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> ElementList {
    collect(document.query_selector_all(selector))
}

#[inline]
pub fn query_all_in(root: &web::Element, selector: &str) -> ElementList {
    collect(root.query_selector_all(selector))
}

#[inline]
pub fn set_attr_fixed(el: &web::Element, name: &str, value: f32, decimals: usize) {
    _ = el.set_attribute(name, &format!("{:.*}", decimals, value));
}

/// Inline style for either HTML or SVG elements. An empty value clears it.
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    } else if let Some(svg) = el.dyn_ref::<web::SvgElement>() {
        _ = svg.style().set_property(property, value);
    }
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

pub fn window_scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height(document: &web::Document) -> f64 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}
