use crate::constants::*;
use glam::Vec2;

/// Scroll schedule for the two pour phases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseConfig {
    pub phase1_end: f32,
    pub pour_start: f32,
    pub tilt_max_deg: f32,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            phase1_end: PHASE1_END,
            pour_start: POUR_START,
            tilt_max_deg: TILT_MAX_DEG,
        }
    }
}

/// Per-frame approach rates. Forward applies while the value is rising.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingRates {
    pub tilt_forward: f32,
    pub tilt_retract: f32,
    pub pour_forward: f32,
    pub pour_retract: f32,
}

impl Default for SmoothingRates {
    fn default() -> Self {
        Self {
            tilt_forward: TILT_RATE_FORWARD,
            tilt_retract: TILT_RATE_RETRACT,
            pour_forward: POUR_RATE_FORWARD,
            pour_retract: POUR_RATE_RETRACT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StreamConfig {
    pub pivot: Vec2,
    pub lip: Vec2,
    pub glass_svg_h: f32,
    pub tilt_threshold_deg: f32,
    pub epsilon: f32,
    pub gravity: f32,
    pub gravity_exponent: f32,
    pub max_len: f32,
    pub speed_base: f32,
    pub speed_per_deg: f32,
    pub vy_min: f32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            pivot: Vec2::from_array(PIVOT),
            lip: Vec2::from_array(LIP),
            glass_svg_h: GLASS_SVG_H,
            tilt_threshold_deg: POUR_TILT_THRESHOLD_DEG,
            epsilon: POUR_EPSILON,
            gravity: GRAVITY,
            gravity_exponent: GRAVITY_EXPONENT,
            max_len: STREAM_MAX_LEN,
            speed_base: EXIT_SPEED_BASE,
            speed_per_deg: EXIT_SPEED_PER_DEG,
            vy_min: EXIT_VY_MIN,
        }
    }
}

/// Piecewise-linear stroke width: drip below `drip_end`, stream up to
/// `stream_end`, ribbon above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeConfig {
    pub drip_end: f32,
    pub stream_end: f32,
    pub drip_base: f32,
    pub drip_slope: f32,
    pub stream_base: f32,
    pub stream_slope: f32,
    pub ribbon_base: f32,
    pub ribbon_slope: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            drip_end: STROKE_DRIP_END,
            stream_end: STROKE_STREAM_END,
            drip_base: STROKE_DRIP_BASE,
            drip_slope: STROKE_DRIP_SLOPE,
            stream_base: STROKE_STREAM_BASE,
            stream_slope: STROKE_STREAM_SLOPE,
            ribbon_base: STROKE_RIBBON_BASE,
            ribbon_slope: STROKE_RIBBON_SLOPE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashConfig {
    pub rx_per_pour: f32,
    pub rx_max: f32,
    pub ry_ratio: f32,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            rx_per_pour: SPLASH_RX_PER_POUR,
            rx_max: SPLASH_RX_MAX,
            ry_ratio: SPLASH_RY_RATIO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropletConfig {
    pub pour_min: f32,
    pub opacity_span: f32,
    pub opacity_max: f32,
    pub tail_start: f32,
    pub jitter_base: f32,
    pub jitter_step: f32,
    pub y_step: f32,
    pub radius_base: f32,
    pub radius_step: f32,
    /// Radius of a hidden droplet.
    pub radius_idle: f32,
}

impl Default for DropletConfig {
    fn default() -> Self {
        Self {
            pour_min: DROPLET_POUR_MIN,
            opacity_span: DROPLET_OPACITY_SPAN,
            opacity_max: DROPLET_OPACITY_MAX,
            tail_start: DROPLET_TAIL_START,
            jitter_base: DROPLET_JITTER_BASE,
            jitter_step: DROPLET_JITTER_STEP,
            y_step: DROPLET_Y_STEP,
            radius_base: DROPLET_RADIUS_BASE,
            radius_step: DROPLET_RADIUS_STEP,
            radius_idle: DROPLET_RADIUS_IDLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeaLevelConfig {
    pub base_y: f32,
    pub max_drop: f32,
    pub bottom_y: f32,
}

impl Default for TeaLevelConfig {
    fn default() -> Self {
        Self {
            base_y: TEA_BASE_Y,
            max_drop: TEA_MAX_DROP,
            bottom_y: TEA_BOTTOM_Y,
        }
    }
}

/// Every tunable of the pour animation in one place.
///
/// `PourConfig::default()` reproduces the shipped look; tests and embedders
/// may override individual fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PourConfig {
    pub phase: PhaseConfig,
    pub rates: SmoothingRates,
    pub stream: StreamConfig,
    pub stroke: StrokeConfig,
    pub splash: SplashConfig,
    pub droplets: DropletConfig,
    pub tea: TeaLevelConfig,
    pub steam_fade_deg: f32,
}

impl Default for PourConfig {
    fn default() -> Self {
        Self {
            phase: PhaseConfig::default(),
            rates: SmoothingRates::default(),
            stream: StreamConfig::default(),
            stroke: StrokeConfig::default(),
            splash: SplashConfig::default(),
            droplets: DropletConfig::default(),
            tea: TeaLevelConfig::default(),
            steam_fade_deg: STEAM_FADE_DEG,
        }
    }
}
