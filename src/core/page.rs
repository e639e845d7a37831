use crate::constants::{ANCHOR_EXTRA_GAP_PX, HEADER_HEIGHT_DEFAULT, HEADER_SCROLLED_PX};

// Decision logic for the page chrome around the pour animation. The DOM
// wiring in `ui/` calls into these so the rules stay host-testable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Saved preference wins; otherwise follow the OS colour scheme.
    pub fn initial(saved: Option<&str>, prefers_dark: bool) -> Self {
        saved.and_then(Theme::parse).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_PX
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    HamburgerClick,
    LinkClick,
    Escape,
    OutsideClick,
}

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Applies `event` and returns the new open state if it changed.
    pub fn handle(&mut self, event: NavEvent) -> Option<bool> {
        let next = match event {
            NavEvent::HamburgerClick => !self.open,
            NavEvent::LinkClick | NavEvent::Escape | NavEvent::OutsideClick => false,
        };
        if next == self.open {
            return None;
        }
        self.open = next;
        Some(next)
    }
}

/// Index of the tab a key press moves to, wrapping at both ends.
pub fn tab_key_target(key: &str, current: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowRight" => Some((current + 1) % len),
        "ArrowLeft" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

#[inline]
pub fn tab_panel_id(tab: &str) -> String {
    format!("tab-{tab}")
}

/// Fragment id of an in-page link, `None` for a bare `#`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Integer prefix of a CSS length such as `" 72px"`, like `parseInt`.
pub fn parse_header_height(raw: &str) -> i32 {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end]
        .parse::<i32>()
        .map(|v| sign * v)
        .unwrap_or(HEADER_HEIGHT_DEFAULT)
}

/// Document offset to scroll to so the target clears the sticky header.
#[inline]
pub fn anchor_scroll_top(rect_top: f64, scroll_y: f64, header_height: i32) -> f64 {
    (rect_top + scroll_y - header_height as f64 - ANCHOR_EXTRA_GAP_PX).max(0.0)
}

#[inline]
pub fn link_targets_section(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(anchor_id) == Some(section_id)
}

/// Deferred image source to load; an empty `data-src` leaves the image alone.
#[inline]
pub fn lazy_image_src(data_src: Option<&str>) -> Option<&str> {
    data_src.filter(|src| !src.is_empty())
}
