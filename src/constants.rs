/// Pour animation and page tuning constants.
///
/// These constants express intended behavior (phase boundaries, smoothing
/// rates, clamp limits) and keep magic numbers out of the code. The pour
/// values are stylistic tuning; `PourConfig` exposes them for overriding.
// Scroll phases (fractions of the scrollable range)
pub const PHASE1_END: f32 = 0.15; // tilt ramp finishes here, locked afterwards
pub const POUR_START: f32 = 0.12; // pour begins slightly before the tilt maxes out
pub const TILT_MAX_DEG: f32 = 56.0;

// Smoothing rates per frame (forward = towards a larger value)
pub const TILT_RATE_FORWARD: f32 = 0.11;
pub const TILT_RATE_RETRACT: f32 = 0.07;
pub const POUR_RATE_FORWARD: f32 = 0.09;
pub const POUR_RATE_RETRACT: f32 = 0.05; // viscous drain-back

// Glass SVG coordinates (viewBox 0 0 120 200)
pub const PIVOT: [f32; 2] = [60.0, 88.0]; // handle-side midpoint the cup rotates around
pub const LIP: [f32; 2] = [20.0, 16.0]; // top-left rim corner (the pour lip)
pub const GLASS_SVG_H: f32 = 200.0; // stream SVG top sits at this glass-space y

// Stream activation
pub const POUR_TILT_THRESHOLD_DEG: f32 = 11.0;
pub const POUR_EPSILON: f32 = 0.003;

// Stream physics
pub const GRAVITY: f32 = 0.48;
pub const GRAVITY_EXPONENT: f32 = 1.5; // super-quadratic fall, not a true parabola
pub const SEGMENTS: usize = 32;
pub const SAMPLE_COUNT: usize = SEGMENTS + 1;
pub const STREAM_MAX_LEN: f32 = 1100.0; // SVG units at full pour
pub const EXIT_SPEED_BASE: f32 = 0.78;
pub const EXIT_SPEED_PER_DEG: f32 = 0.009;
pub const EXIT_VY_MIN: f32 = 0.32; // never points upward

// Stroke width: drip -> continuous stream -> thick ribbon
pub const STROKE_DRIP_END: f32 = 0.08;
pub const STROKE_STREAM_END: f32 = 0.45;
pub const STROKE_DRIP_BASE: f32 = 1.0;
pub const STROKE_DRIP_SLOPE: f32 = 22.0;
pub const STROKE_STREAM_BASE: f32 = 2.8;
pub const STROKE_STREAM_SLOPE: f32 = 5.5;
pub const STROKE_RIBBON_BASE: f32 = 4.8;
pub const STROKE_RIBBON_SLOPE: f32 = 4.0;

// Splash ellipse
pub const SPLASH_RX_PER_POUR: f32 = 16.0;
pub const SPLASH_RX_MAX: f32 = 16.0;
pub const SPLASH_RY_RATIO: f32 = 0.27;

// Breakup droplets
pub const DROPLET_COUNT: usize = 6;
pub const DROPLET_POUR_MIN: f32 = 0.44;
pub const DROPLET_OPACITY_SPAN: f32 = 0.50;
pub const DROPLET_OPACITY_MAX: f32 = 0.88;
pub const DROPLET_TAIL_START: f32 = 0.60; // droplets sit on the last 40% of the stream
pub const DROPLET_JITTER_BASE: f32 = 2.0;
pub const DROPLET_JITTER_STEP: f32 = 1.8;
pub const DROPLET_Y_STEP: f32 = 8.0;
pub const DROPLET_RADIUS_BASE: f32 = 1.5;
pub const DROPLET_RADIUS_STEP: f32 = 1.3;
pub const DROPLET_RADIUS_IDLE: f32 = 3.0;
pub const DROPLET_FILL: &str = "#c47a3a";

// Tea level inside the glass
pub const TEA_BASE_Y: f32 = 62.0;
pub const TEA_MAX_DROP: f32 = 38.0;
pub const TEA_BOTTOM_Y: f32 = 192.0;

// Steam fades out completely by this tilt
pub const STEAM_FADE_DEG: f32 = 30.0;

// Reduced-motion fallback
pub const FALLBACK_PATH: &str = "M 20 0 Q 10 60 5 160";
pub const FALLBACK_STROKE_WIDTH: &str = "2.5";
pub const FALLBACK_OPACITY: &str = "0.35";
pub const FALLBACK_SPLASH: [&str; 4] = ["5", "160", "6", "1.8"]; // cx, cy, rx, ry

// Page chrome
pub const HEADER_SCROLLED_PX: f64 = 60.0;
pub const HEADER_HEIGHT_DEFAULT: i32 = 72;
pub const ANCHOR_EXTRA_GAP_PX: f64 = 8.0;
pub const THEME_STORAGE_KEY: &str = "chaikaari-theme";
pub const CONTACT_DIM_OPACITY: &str = "0.6";
pub const LAZY_ROOT_MARGIN: &str = "200px 0px";
pub const ACTIVE_NAV_ROOT_MARGIN: &str = "-80px 0px -60% 0px";
