use crate::core::config::SmoothingRates;
use crate::core::phase::PhaseTargets;

/// Exponential approach with a separate rate for rising and falling values.
#[inline]
pub fn approach(current: f32, target: f32, forward: f32, retract: f32) -> f32 {
    let rate = if current < target { forward } else { retract };
    current + (target - current) * rate
}

/// Smoothed tilt/pour and the targets they chase.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub current_tilt: f32,
    pub target_tilt: f32,
    pub current_pour: f32,
    pub target_pour: f32,
}

impl AnimationState {
    #[inline]
    pub fn set_targets(&mut self, targets: PhaseTargets) {
        self.target_tilt = targets.tilt;
        self.target_pour = targets.pour;
    }

    /// One frame of easing. Liquid falls fast and drains back slowly.
    pub fn step(&mut self, rates: &SmoothingRates) {
        self.current_tilt = approach(
            self.current_tilt,
            self.target_tilt,
            rates.tilt_forward,
            rates.tilt_retract,
        );
        self.current_pour = approach(
            self.current_pour,
            self.target_pour,
            rates.pour_forward,
            rates.pour_retract,
        );
    }
}
