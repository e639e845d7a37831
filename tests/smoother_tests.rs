// Host-side tests for the asymmetric tilt/pour smoother.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod phase {
        include!("../src/core/phase.rs");
    }
    pub mod smoother {
        include!("../src/core/smoother.rs");
    }
}

use crate::core::config::SmoothingRates;
use crate::core::phase::PhaseTargets;
use crate::core::smoother::*;

fn steps_to_reach(mut current: f32, target: f32, forward: f32, retract: f32, eps: f32) -> usize {
    let mut steps = 0;
    while (target - current).abs() > eps {
        current = approach(current, target, forward, retract);
        steps += 1;
        assert!(steps < 10_000, "did not converge");
    }
    steps
}

#[test]
fn approach_converges_without_overshoot() {
    let rates = SmoothingRates::default();
    for (start, target) in [(0.0_f32, 56.0_f32), (56.0, 0.0), (0.2, 0.9), (1.0, 0.1)] {
        let gap = (target - start).abs();
        let mut cur = start;
        let mut err = gap;
        let mut steps = 0;
        while err > 1e-3 * gap {
            let next = approach(cur, target, rates.tilt_forward, rates.tilt_retract);
            let next_err = (target - next).abs();
            // stays on the side of the target it started from
            assert_eq!((next - target).signum(), (start - target).signum());
            // shrinks by at least the slower rate every step
            assert!(next_err <= err * (1.0 - rates.tilt_retract) + 1e-5);
            cur = next;
            err = next_err;
            steps += 1;
            assert!(steps < 500, "did not converge from {start} to {target}");
        }
    }
}

#[test]
fn approach_at_target_stays_put() {
    assert_eq!(approach(0.5, 0.5, 0.09, 0.05), 0.5);
}

#[test]
fn forward_rates_exceed_retract_rates() {
    let r = SmoothingRates::default();
    assert!(r.tilt_forward > r.tilt_retract);
    assert!(r.pour_forward > r.pour_retract);
}

#[test]
fn retracting_is_slower_than_pouring_for_equal_gap() {
    let r = SmoothingRates::default();
    let eps = 1e-3;

    let up = steps_to_reach(0.0, 1.0, r.pour_forward, r.pour_retract, eps);
    let down = steps_to_reach(1.0, 0.0, r.pour_forward, r.pour_retract, eps);
    assert!(down > up, "pour: down {down} vs up {up}");

    let up = steps_to_reach(0.0, 56.0, r.tilt_forward, r.tilt_retract, eps);
    let down = steps_to_reach(56.0, 0.0, r.tilt_forward, r.tilt_retract, eps);
    assert!(down > up, "tilt: down {down} vs up {up}");
}

#[test]
fn state_step_uses_forward_rate_on_the_way_up() {
    let mut state = AnimationState::default();
    state.set_targets(PhaseTargets {
        tilt: 56.0,
        pour: 1.0,
    });
    state.step(&SmoothingRates::default());
    assert!((state.current_tilt - 56.0 * 0.11).abs() < 1e-4);
    assert!((state.current_pour - 0.09).abs() < 1e-6);
    assert_eq!(state.target_tilt, 56.0);
    assert_eq!(state.target_pour, 1.0);
}

#[test]
fn state_step_uses_retract_rate_on_the_way_down() {
    let mut state = AnimationState {
        current_tilt: 56.0,
        target_tilt: 0.0,
        current_pour: 1.0,
        target_pour: 0.0,
    };
    state.step(&SmoothingRates::default());
    assert!((state.current_tilt - 56.0 * 0.93).abs() < 1e-4);
    assert!((state.current_pour - 0.95).abs() < 1e-6);
}
