// Host-side tests for the page chrome decision logic (theme, nav, tabs, anchors).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod page {
        include!("../src/core/page.rs");
    }
}

use crate::core::page::*;

#[test]
fn saved_theme_wins_over_os_preference() {
    assert_eq!(Theme::initial(Some("dark"), false), Theme::Dark);
    assert_eq!(Theme::initial(Some("light"), true), Theme::Light);
}

#[test]
fn os_preference_used_without_valid_saved_theme() {
    assert_eq!(Theme::initial(None, true), Theme::Dark);
    assert_eq!(Theme::initial(None, false), Theme::Light);
    assert_eq!(Theme::initial(Some("sepia"), true), Theme::Dark);
    assert_eq!(Theme::initial(Some(""), false), Theme::Light);
}

#[test]
fn theme_toggles_and_round_trips_through_storage_string() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn header_turns_solid_past_sixty_pixels() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(60.0));
    assert!(header_scrolled(60.5));
    assert!(header_scrolled(900.0));
}

#[test]
fn hamburger_toggles_drawer() {
    let mut nav = MobileNav::default();
    assert!(!nav.is_open());
    assert_eq!(nav.handle(NavEvent::HamburgerClick), Some(true));
    assert!(nav.is_open());
    assert_eq!(nav.handle(NavEvent::HamburgerClick), Some(false));
    assert!(!nav.is_open());
}

#[test]
fn closing_events_only_act_when_open() {
    for event in [NavEvent::LinkClick, NavEvent::Escape, NavEvent::OutsideClick] {
        let mut nav = MobileNav::default();
        assert_eq!(nav.handle(event), None, "{event:?} changed a closed drawer");

        nav.handle(NavEvent::HamburgerClick);
        assert_eq!(nav.handle(event), Some(false), "{event:?} did not close");
        assert!(!nav.is_open());
    }
}

#[test]
fn tab_keys_wrap_around() {
    assert_eq!(tab_key_target("ArrowRight", 0, 4), Some(1));
    assert_eq!(tab_key_target("ArrowRight", 3, 4), Some(0));
    assert_eq!(tab_key_target("ArrowLeft", 0, 4), Some(3));
    assert_eq!(tab_key_target("ArrowLeft", 2, 4), Some(1));
    assert_eq!(tab_key_target("Home", 2, 4), Some(0));
    assert_eq!(tab_key_target("End", 1, 4), Some(3));
}

#[test]
fn other_keys_and_empty_tab_lists_are_ignored() {
    assert_eq!(tab_key_target("Enter", 1, 4), None);
    assert_eq!(tab_key_target("a", 1, 4), None);
    assert_eq!(tab_key_target("ArrowRight", 0, 0), None);
}

#[test]
fn tab_panel_ids_are_prefixed() {
    assert_eq!(tab_panel_id("snacks"), "tab-snacks");
}

#[test]
fn anchor_ids_skip_bare_hash() {
    assert_eq!(anchor_id("#menu"), Some("menu"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("/about"), None);
}

#[test]
fn header_height_parses_like_parse_int() {
    assert_eq!(parse_header_height("72px"), 72);
    assert_eq!(parse_header_height(" 64px"), 64);
    assert_eq!(parse_header_height("80"), 80);
    assert_eq!(parse_header_height("-4px"), -4);
    assert_eq!(parse_header_height(""), 72);
    assert_eq!(parse_header_height("auto"), 72);
}

#[test]
fn anchor_scroll_clears_header_and_never_goes_negative() {
    assert_eq!(anchor_scroll_top(500.0, 1000.0, 72), 1420.0);
    assert_eq!(anchor_scroll_top(-200.0, 100.0, 72), 0.0);
}

#[test]
fn nav_links_match_their_section() {
    assert!(link_targets_section(Some("#about"), "about"));
    assert!(!link_targets_section(Some("#menu"), "about"));
    assert!(!link_targets_section(Some("about"), "about"));
    assert!(!link_targets_section(None, "about"));
}

#[test]
fn lazy_images_skip_empty_data_src() {
    assert_eq!(lazy_image_src(Some("/img/chai.webp")), Some("/img/chai.webp"));
    assert_eq!(lazy_image_src(Some("")), None);
    assert_eq!(lazy_image_src(None), None);
}
