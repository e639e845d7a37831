use crate::constants::{DROPLET_COUNT, SAMPLE_COUNT, SEGMENTS};
use crate::core::config::{DropletConfig, PourConfig, SplashConfig, StreamConfig, StrokeConfig};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;
use std::fmt::Write;

/// Pour that actually leaves the glass: nothing flows until the cup has
/// tipped past the lip threshold.
#[inline]
pub fn effective_pour(cfg: &StreamConfig, pour: f32, tilt_deg: f32) -> f32 {
    if tilt_deg > cfg.tilt_threshold_deg {
        pour
    } else {
        0.0
    }
}

#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, rad: f32) -> Vec2 {
    pivot + Vec2::from_angle(rad).rotate(point - pivot)
}

/// Lip position in stream-SVG space. The lip is rotated by the inverse of
/// the cup's visual rotation so it follows the tipped rim.
pub fn emission_point(cfg: &StreamConfig, tilt_deg: f32) -> Vec2 {
    let lip = rotate_about(cfg.lip, cfg.pivot, -tilt_deg.to_radians());
    Vec2::new(lip.x, lip.y - cfg.glass_svg_h)
}

/// Exit velocity, perpendicular to the tilted cup axis. Always leftward and
/// never upward.
pub fn exit_velocity(cfg: &StreamConfig, tilt_deg: f32) -> Vec2 {
    let exit = tilt_deg.to_radians() + FRAC_PI_2;
    let speed = cfg.speed_base + tilt_deg * cfg.speed_per_deg;
    Vec2::new(
        -exit.cos().abs() * speed,
        (exit.sin() * speed).max(cfg.vy_min),
    )
}

/// Stroke width of the stream: thin drip, continuous stream, thick ribbon.
pub fn stroke_width(cfg: &StrokeConfig, pour: f32) -> f32 {
    if pour < cfg.drip_end {
        cfg.drip_base + pour * cfg.drip_slope
    } else if pour < cfg.stream_end {
        cfg.stream_base + (pour - cfg.drip_end) * cfg.stream_slope
    } else {
        cfg.ribbon_base + (pour - cfg.stream_end) * cfg.ribbon_slope
    }
}

/// One frame's liquid path, sampled at fixed parameter steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    pub points: [Vec2; SAMPLE_COUNT],
}

impl Trajectory {
    pub fn sample(cfg: &StreamConfig, origin: Vec2, velocity: Vec2, max_len: f32) -> Self {
        let mut points = [Vec2::ZERO; SAMPLE_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            let len = (i as f32 / SEGMENTS as f32) * max_len;
            let fall = 0.5 * cfg.gravity * len.powf(cfg.gravity_exponent);
            *p = origin + velocity * len + Vec2::new(0.0, fall);
        }
        Self { points }
    }

    #[inline]
    pub fn last(&self) -> Vec2 {
        self.points[SAMPLE_COUNT - 1]
    }
}

/// Writes an SVG path through `points` as a chain of quadratic segments
/// joined at midpoints, ending with a straight line to the last point.
pub fn write_path(points: &[Vec2], out: &mut String) {
    out.clear();
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };
    _ = write!(out, "M {:.1} {:.1}", first.x, first.y);
    for pair in points.windows(2).skip(1) {
        let (ctrl, next) = (pair[0], pair[1]);
        let mid = (ctrl + next) * 0.5;
        _ = write!(
            out,
            " Q {:.1} {:.1} {:.1} {:.1}",
            ctrl.x, ctrl.y, mid.x, mid.y
        );
    }
    _ = write!(out, " L {:.1} {:.1}", last.x, last.y);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Splash {
    pub center: Vec2,
    pub rx: f32,
    pub ry: f32,
}

impl Splash {
    pub const NONE: Splash = Splash {
        center: Vec2::ZERO,
        rx: 0.0,
        ry: 0.0,
    };

    pub fn at(cfg: &SplashConfig, center: Vec2, pour: f32) -> Self {
        let rx = (pour * cfg.rx_per_pour).clamp(0.0, cfg.rx_max);
        Self {
            center,
            rx,
            ry: rx * cfg.ry_ratio,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Droplet {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Droplet {
    #[inline]
    pub const fn hidden(radius: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            radius,
            opacity: 0.0,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Droplet opacity for a given pour; zero below the breakup threshold.
#[inline]
pub fn droplet_opacity(cfg: &DropletConfig, pour: f32) -> f32 {
    if pour < cfg.pour_min {
        0.0
    } else {
        ((pour - cfg.pour_min) / cfg.opacity_span).clamp(0.0, cfg.opacity_max)
    }
}

/// Fixed set of breakup droplets. Entries are overwritten in place each
/// frame; the pool never grows or shrinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropletPool {
    drops: [Droplet; DROPLET_COUNT],
    idle_radius: f32,
}

impl DropletPool {
    pub fn new(cfg: &DropletConfig) -> Self {
        Self {
            drops: [Droplet::hidden(cfg.radius_idle); DROPLET_COUNT],
            idle_radius: cfg.radius_idle,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Droplet> {
        self.drops.iter()
    }

    pub fn hide_all(&mut self) {
        self.drops.fill(Droplet::hidden(self.idle_radius));
    }

    /// Spreads the droplets over the tail of the trajectory with alternating
    /// sideways jitter and a growing vertical offset.
    pub fn scatter(&mut self, cfg: &DropletConfig, trajectory: &Trajectory, pour: f32) {
        let alpha = droplet_opacity(cfg, pour);
        if alpha <= 0.0 {
            self.hide_all();
            return;
        }
        let n = trajectory.points.len();
        let start = ((n as f32 * cfg.tail_start).floor() as usize).min(n - 1);
        let tail = (n - start) as f32;
        for (i, drop) in self.drops.iter_mut().enumerate() {
            let step = ((i as f32 / DROPLET_COUNT as f32) * tail).floor() as usize;
            let pt = trajectory.points[(start + step).min(n - 1)];
            let side = if i % 2 == 0 { 1.0 } else { -1.0 };
            let jitter = side * (cfg.jitter_base + i as f32 * cfg.jitter_step);
            *drop = Droplet {
                center: Vec2::new(pt.x + jitter, pt.y + i as f32 * cfg.y_step),
                radius: cfg.radius_base + (i % 3) as f32 * cfg.radius_step,
                opacity: alpha,
            };
        }
    }
}

/// Everything the stream visuals need for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamGeometry {
    pub path: String,
    pub stroke_width: f32,
    pub splash: Splash,
    pub droplets: DropletPool,
}

impl StreamGeometry {
    /// Empty geometry: no path, no splash, every droplet hidden.
    pub fn new(cfg: &PourConfig) -> Self {
        Self {
            path: String::new(),
            stroke_width: 0.0,
            splash: Splash::NONE,
            droplets: DropletPool::new(&cfg.droplets),
        }
    }

    /// True while liquid is leaving the glass.
    #[inline]
    pub fn is_flowing(&self) -> bool {
        !self.path.is_empty()
    }

    fn clear(&mut self) {
        self.path.clear();
        self.stroke_width = 0.0;
        self.splash = Splash::NONE;
        self.droplets.hide_all();
    }

    /// Recomputes every field from the smoothed pour and tilt. The result
    /// depends only on the inputs; nothing carries over from earlier frames.
    pub fn rebuild(&mut self, cfg: &PourConfig, pour: f32, tilt_deg: f32) {
        let pour = effective_pour(&cfg.stream, pour, tilt_deg);
        if pour <= cfg.stream.epsilon {
            self.clear();
            return;
        }

        let origin = emission_point(&cfg.stream, tilt_deg);
        let velocity = exit_velocity(&cfg.stream, tilt_deg);
        let trajectory =
            Trajectory::sample(&cfg.stream, origin, velocity, pour * cfg.stream.max_len);

        write_path(&trajectory.points, &mut self.path);
        self.stroke_width = stroke_width(&cfg.stroke, pour);
        self.splash = Splash::at(&cfg.splash, trajectory.last(), pour);
        self.droplets.scatter(&cfg.droplets, &trajectory, pour);
    }
}

/// Builds a fresh geometry for (pour, tilt).
pub fn build_stream(cfg: &PourConfig, pour: f32, tilt_deg: f32) -> StreamGeometry {
    let mut geometry = StreamGeometry::new(cfg);
    geometry.rebuild(cfg, pour, tilt_deg);
    geometry
}
