use crate::core::page::{tab_key_target, tab_panel_id};
use crate::dom::{self, ElementList};
use crate::events::keyboard::wire_keydown;
use crate::events::pointer::wire_click;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn activate(tabs: &[web::Element], panels: &[web::Element], index: usize) {
    let Some(tab) = tabs.get(index) else {
        return;
    };
    let panel_id = tab.get_attribute("data-tab").map(|id| tab_panel_id(&id));
    for (i, t) in tabs.iter().enumerate() {
        let on = i == index;
        dom::toggle_class(t, "active", on);
        _ = t.set_attribute("aria-selected", if on { "true" } else { "false" });
    }
    for p in panels {
        let on = panel_id.as_deref() == Some(p.id().as_str());
        if on {
            _ = p.remove_attribute("hidden");
        } else {
            _ = p.set_attribute("hidden", "");
        }
        dom::toggle_class(p, "active", on);
    }
}

pub fn init(document: &web::Document) {
    let Some(container) = document.query_selector(".menu-tabs").ok().flatten() else {
        return;
    };
    let tabs: Rc<ElementList> = Rc::new(dom::query_all_in(&container, ".menu-tab"));
    let panels: Rc<ElementList> = Rc::new(dom::query_all(document, ".tab-panel"));

    for (i, tab) in tabs.iter().enumerate() {
        let (t, p) = (tabs.clone(), panels.clone());
        wire_click(tab, move |_| activate(&t, &p, i));

        let (t, p) = (tabs.clone(), panels.clone());
        wire_keydown(tab, move |ev| {
            let Some(next) = tab_key_target(&ev.key(), i, t.len()) else {
                return;
            };
            ev.prevent_default();
            if let Some(el) = t[next].dyn_ref::<web::HtmlElement>() {
                _ = el.focus();
            }
            activate(&t, &p, next);
        });
    }
}
