use crate::core::config::PhaseConfig;

/// Which part of the scroll schedule a progress value falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Tilt still ramping towards its maximum.
    Tilting,
    /// Tilt locked at its maximum; only the pour keeps growing.
    Locked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseTargets {
    pub tilt: f32,
    pub pour: f32,
}

/// Normalized scroll progress. Zero when the document cannot scroll.
#[inline]
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let max = document_height - viewport_height;
    if max > 0.0 {
        (scroll_y / max).clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

impl Phase {
    #[inline]
    pub fn for_progress(cfg: &PhaseConfig, s: f32) -> Self {
        if s < cfg.phase1_end {
            Phase::Tilting
        } else {
            Phase::Locked
        }
    }
}

#[inline]
pub fn target_tilt(cfg: &PhaseConfig, s: f32) -> f32 {
    (s / cfg.phase1_end).clamp(0.0, 1.0) * cfg.tilt_max_deg
}

#[inline]
pub fn target_pour(cfg: &PhaseConfig, s: f32) -> f32 {
    if s < cfg.pour_start {
        0.0
    } else {
        ((s - cfg.pour_start) / (1.0 - cfg.pour_start)).clamp(0.0, 1.0)
    }
}

pub fn phase_targets(cfg: &PhaseConfig, s: f32) -> PhaseTargets {
    PhaseTargets {
        tilt: target_tilt(cfg, s),
        pour: target_pour(cfg, s),
    }
}
