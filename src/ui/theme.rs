use crate::constants::THEME_STORAGE_KEY;
use crate::core::page::Theme;
use crate::dom;
use crate::events::pointer::wire_click;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

struct ThemeView {
    root: Option<web::Element>,
    sun: Option<web::Element>,
    moon: Option<web::Element>,
}

impl ThemeView {
    fn apply(&self, theme: Theme) {
        if let Some(root) = &self.root {
            if theme == Theme::Dark {
                _ = root.set_attribute("data-theme", "dark");
            } else {
                _ = root.remove_attribute("data-theme");
            }
        }
        let (sun, moon) = match theme {
            Theme::Dark => ("none", "block"),
            Theme::Light => ("block", "none"),
        };
        if let Some(el) = &self.sun {
            dom::set_style(el, "display", sun);
        }
        if let Some(el) = &self.moon {
            dom::set_style(el, "display", moon);
        }
    }
}

pub fn init(window: &web::Window, document: &web::Document) {
    let Some(button) = document.get_element_by_id("themeToggle") else {
        return;
    };
    let view = ThemeView {
        root: document.document_element(),
        sun: button.query_selector(".sun-icon").ok().flatten(),
        moon: button.query_selector(".moon-icon").ok().flatten(),
    };

    let storage = window.local_storage().ok().flatten();
    let saved = storage
        .as_ref()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    let prefers_dark = dom::media_matches(window, "(prefers-color-scheme: dark)");
    let theme = Rc::new(Cell::new(Theme::initial(saved.as_deref(), prefers_dark)));
    view.apply(theme.get());

    wire_click(&button, move |_| {
        let next = theme.get().toggled();
        theme.set(next);
        view.apply(next);
        if let Some(s) = &storage {
            _ = s.set_item(THEME_STORAGE_KEY, next.as_str());
        }
        log::info!("[theme] {}", next.as_str());
    });
}
