use crate::core::page::{MobileNav, NavEvent};
use crate::dom;
use crate::events::keyboard::wire_escape;
use crate::events::pointer::{event_within, wire_click};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct NavView {
    hamburger: web::Element,
    drawer: web::Element,
}

impl NavView {
    fn render(&self, open: bool) {
        dom::toggle_class(&self.hamburger, "open", open);
        dom::toggle_class(&self.drawer, "open", open);
        _ = self
            .hamburger
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        if open {
            _ = self.drawer.remove_attribute("aria-hidden");
        } else {
            _ = self.drawer.set_attribute("aria-hidden", "true");
        }
    }
}

pub fn init(document: &web::Document) {
    let (Some(hamburger), Some(drawer)) = (
        document.get_element_by_id("hamburger"),
        document.get_element_by_id("mobileNav"),
    ) else {
        return;
    };
    let view = Rc::new(NavView { hamburger, drawer });
    let state = Rc::new(RefCell::new(MobileNav::default()));

    let dispatch: Rc<dyn Fn(NavEvent)> = {
        let view = view.clone();
        Rc::new(move |event: NavEvent| {
            let changed = state.borrow_mut().handle(event);
            if let Some(open) = changed {
                view.render(open);
                log::debug!("[nav] {:?} -> open={}", event, open);
            }
        })
    };

    let d = dispatch.clone();
    wire_click(&view.hamburger, move |_| d(NavEvent::HamburgerClick));

    for link in dom::query_all_in(&view.drawer, "a") {
        let d = dispatch.clone();
        wire_click(&link, move |_| d(NavEvent::LinkClick));
    }

    let d = dispatch.clone();
    wire_escape(document, move || d(NavEvent::Escape));

    let d = dispatch;
    let v = view.clone();
    wire_click(document, move |ev| {
        if !event_within(ev, &v.drawer) && !event_within(ev, &v.hamburger) {
            d(NavEvent::OutsideClick);
        }
    });
}
