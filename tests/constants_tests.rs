// Host-side tests for tuning constants and the default configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::constants::*;
use crate::core::config::PourConfig;

#[test]
#[allow(clippy::assertions_on_constants)]
fn phase_schedule_is_ordered() {
    // pour begins slightly before the tilt locks
    assert!(0.0 < POUR_START && POUR_START < PHASE1_END && PHASE1_END < 1.0);
    assert!(TILT_MAX_DEG > POUR_TILT_THRESHOLD_DEG);
    assert!(STEAM_FADE_DEG < TILT_MAX_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_rates_are_fractions_with_slower_retract() {
    for rate in [
        TILT_RATE_FORWARD,
        TILT_RATE_RETRACT,
        POUR_RATE_FORWARD,
        POUR_RATE_RETRACT,
    ] {
        assert!(rate > 0.0 && rate < 1.0);
    }
    assert!(TILT_RATE_FORWARD > TILT_RATE_RETRACT);
    assert!(POUR_RATE_FORWARD > POUR_RATE_RETRACT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stroke_regimes_are_ordered() {
    assert!(STROKE_DRIP_END < STROKE_STREAM_END);
    assert!(STROKE_DRIP_BASE < STROKE_STREAM_BASE && STROKE_STREAM_BASE < STROKE_RIBBON_BASE);
}

#[test]
fn sample_and_pool_sizes() {
    assert_eq!(SAMPLE_COUNT, 33);
    assert_eq!(DROPLET_COUNT, 6);
    assert!(((SAMPLE_COUNT as f32 * DROPLET_TAIL_START).floor() as usize) < SAMPLE_COUNT);
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = PourConfig::default();
    assert_eq!(cfg.phase.phase1_end, PHASE1_END);
    assert_eq!(cfg.phase.pour_start, POUR_START);
    assert_eq!(cfg.phase.tilt_max_deg, TILT_MAX_DEG);
    assert_eq!(cfg.rates.tilt_forward, TILT_RATE_FORWARD);
    assert_eq!(cfg.rates.pour_retract, POUR_RATE_RETRACT);
    assert_eq!(cfg.stream.pivot.to_array(), PIVOT);
    assert_eq!(cfg.stream.lip.to_array(), LIP);
    assert_eq!(cfg.stream.gravity, GRAVITY);
    assert_eq!(cfg.stream.gravity_exponent, 1.5);
    assert_eq!(cfg.stroke.drip_end, STROKE_DRIP_END);
    assert_eq!(cfg.stroke.ribbon_slope, STROKE_RIBBON_SLOPE);
    assert_eq!(cfg.splash.rx_max, SPLASH_RX_MAX);
    assert_eq!(cfg.splash.ry_ratio, SPLASH_RY_RATIO);
    assert_eq!(cfg.droplets.opacity_max, DROPLET_OPACITY_MAX);
    assert_eq!(cfg.droplets.radius_idle, DROPLET_RADIUS_IDLE);
    assert_eq!(cfg.tea.base_y, TEA_BASE_Y);
    assert_eq!(cfg.steam_fade_deg, STEAM_FADE_DEG);
}
