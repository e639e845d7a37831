use crate::core::config::TeaLevelConfig;

/// Tea body inside the glass. `y` is the liquid surface; the body fills
/// everything below it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeaLevel {
    pub y: f32,
    pub height: f32,
}

impl TeaLevel {
    pub fn for_pour(cfg: &TeaLevelConfig, pour: f32) -> Self {
        let y = (cfg.base_y + pour * cfg.max_drop).clamp(cfg.base_y, cfg.base_y + cfg.max_drop);
        Self {
            y,
            height: (cfg.bottom_y - y).max(0.0),
        }
    }
}

/// Steam is fully visible upright and gone once the cup passes `fade_deg`.
#[inline]
pub fn steam_opacity(tilt_deg: f32, fade_deg: f32) -> f32 {
    (1.0 - tilt_deg / fade_deg).clamp(0.0, 1.0)
}

/// CSS rotation for the cup. The cup tips to the left, hence the sign.
#[inline]
pub fn cup_transform(tilt_deg: f32) -> String {
    format!("rotate({}deg)", -tilt_deg)
}

/// Cup-level values applied alongside the stream each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePose {
    pub tilt_deg: f32,
    pub tea: TeaLevel,
    pub steam_opacity: f32,
}
