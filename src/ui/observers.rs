use crate::constants::{ACTIVE_NAV_ROOT_MARGIN, LAZY_ROOT_MARGIN};
use crate::core::page::{lazy_image_src, link_targets_section};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Calls `on_visible` for every target that starts intersecting. `None` when
// the browser has no IntersectionObserver.
fn observe(
    targets: &[web::Element],
    root_margin: &str,
    threshold: Option<f64>,
    mut on_visible: impl FnMut(&web::Element, &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(root_margin);
    if let Some(t) = threshold {
        opts.set_threshold(&JsValue::from_f64(t));
    }
    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    callback.forget();
    for t in targets {
        observer.observe(t);
    }
    Some(observer)
}

/// Swaps `data-src` into `src` shortly before a lazy image scrolls in.
pub fn init_lazy_images(document: &web::Document) {
    let images = dom::query_all(document, "img[loading=\"lazy\"]");
    if images.is_empty() {
        return;
    }
    observe(&images, LAZY_ROOT_MARGIN, None, |img, observer| {
        let data_src = img.get_attribute("data-src");
        if let Some(src) = lazy_image_src(data_src.as_deref()) {
            _ = img.set_attribute("src", src);
            _ = img.remove_attribute("data-src");
        }
        observer.unobserve(img);
    });
}

/// Highlights the nav links pointing at the section currently in view.
pub fn init_active_nav(document: &web::Document) {
    let sections = dom::query_all(document, "section[id]");
    let links = dom::query_all(document, ".nav-link, .mobile-nav-link");
    if sections.is_empty() || links.is_empty() {
        return;
    }
    observe(&sections, ACTIVE_NAV_ROOT_MARGIN, Some(0.0), move |section, _| {
        let id = section.id();
        for link in &links {
            let on = link_targets_section(link.get_attribute("href").as_deref(), &id);
            dom::set_style(link, "color", if on { "var(--white)" } else { "" });
            dom::set_style(link, "opacity", if on { "1" } else { "" });
        }
    });
}
