use crate::constants::CONTACT_DIM_OPACITY;
use crate::dom::{self, ElementList};
use crate::events::pointer::wire_hover;
use std::rc::Rc;
use web_sys as web;

// Hovering a contact card dims its siblings.
pub fn init(document: &web::Document) {
    let cards: Rc<ElementList> = Rc::new(dom::query_all(document, ".contact-card"));
    for (i, card) in cards.iter().enumerate() {
        let enter_cards = cards.clone();
        let leave_cards = cards.clone();
        wire_hover(
            card,
            move || {
                for (j, c) in enter_cards.iter().enumerate() {
                    if j != i {
                        dom::set_style(c, "opacity", CONTACT_DIM_OPACITY);
                    }
                }
            },
            move || {
                for c in leave_cards.iter() {
                    dom::set_style(c, "opacity", "");
                }
            },
        );
    }
}
