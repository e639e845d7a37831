use crate::core::config::PourConfig;
use crate::core::phase::{phase_targets, Phase};
use crate::core::scene::{steam_opacity, ScenePose, TeaLevel};
use crate::core::smoother::AnimationState;
use crate::core::stream::{build_stream, StreamGeometry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Paused,
}

/// What the caller has to do with its frame callback after a visibility
/// change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Cancel the pending frame.
    Pause,
    /// Schedule a new frame.
    Resume,
    Unchanged,
}

/// Owns all mutable pour state. Scroll and visibility handlers only flip
/// flags here; the per-frame work happens in [`PourEngine::frame`].
pub struct PourEngine {
    cfg: PourConfig,
    state: AnimationState,
    dirty: bool,
    driver: DriverState,
    phase: Phase,
    stream: StreamGeometry,
    pose: ScenePose,
}

impl PourEngine {
    pub fn new(cfg: PourConfig) -> Self {
        let state = AnimationState::default();
        let pose = ScenePose {
            tilt_deg: 0.0,
            tea: TeaLevel::for_pour(&cfg.tea, 0.0),
            steam_opacity: 1.0,
        };
        Self {
            state,
            dirty: true,
            driver: DriverState::Running,
            phase: Phase::Tilting,
            stream: build_stream(&cfg, 0.0, 0.0),
            cfg,
            pose,
        }
    }

    #[inline]
    pub fn config(&self) -> &PourConfig {
        &self.cfg
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn stream(&self) -> &StreamGeometry {
        &self.stream
    }

    #[inline]
    pub fn pose(&self) -> ScenePose {
        self.pose
    }

    #[inline]
    pub fn driver_state(&self) -> DriverState {
        self.driver
    }

    /// Called from the scroll handler. Many scroll events between two frames
    /// collapse into one resample.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn set_hidden(&mut self, hidden: bool) -> Transition {
        match (self.driver, hidden) {
            (DriverState::Running, true) => {
                self.driver = DriverState::Paused;
                Transition::Pause
            }
            (DriverState::Paused, false) => {
                self.driver = DriverState::Running;
                self.dirty = true;
                Transition::Resume
            }
            _ => Transition::Unchanged,
        }
    }

    /// Advances one frame. `sample_progress` is only called when a scroll
    /// happened since the previous frame. Easing always runs so in-flight
    /// interpolation finishes without further input. Returns whether the
    /// scroll position was resampled.
    pub fn frame(&mut self, sample_progress: impl FnOnce() -> f32) -> bool {
        if self.driver == DriverState::Paused {
            return false;
        }
        let resampled = self.dirty;
        if self.dirty {
            self.dirty = false;
            let s = sample_progress();
            let phase = Phase::for_progress(&self.cfg.phase, s);
            if phase != self.phase {
                log::debug!("[pour] phase {:?} -> {:?} at s={:.3}", self.phase, phase, s);
                self.phase = phase;
            }
            self.state.set_targets(phase_targets(&self.cfg.phase, s));
        }

        self.state.step(&self.cfg.rates);
        let tilt = self.state.current_tilt;
        let pour = self.state.current_pour;
        self.stream.rebuild(&self.cfg, pour, tilt);
        self.pose = ScenePose {
            tilt_deg: tilt,
            tea: TeaLevel::for_pour(&self.cfg.tea, pour),
            steam_opacity: steam_opacity(tilt, self.cfg.steam_fade_deg),
        };
        resampled
    }
}
