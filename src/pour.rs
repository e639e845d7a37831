use crate::constants::{
    DROPLET_COUNT, DROPLET_FILL, FALLBACK_OPACITY, FALLBACK_PATH, FALLBACK_SPLASH,
    FALLBACK_STROKE_WIDTH,
};
use crate::core::{cup_transform, PourEngine, ScenePose, StreamGeometry};
use crate::dom::{self, set_attr_fixed, SVG_NS};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

struct TeaHandles {
    body: web::Element,
    surface: web::Element,
}

/// Element handles of the glass illustration, resolved once at start-up.
pub struct PourScene {
    container: web::HtmlElement,
    stream_svg: web::Element,
    stream_path: web::Element,
    splash: Option<web::Element>,
    droplets: SmallVec<[web::Element; DROPLET_COUNT]>,
    tea: Option<TeaHandles>,
    steam: Option<web::Element>,
}

impl PourScene {
    /// `None` when the container, stream SVG or stream path is missing; the
    /// splash, tea fill and steam are optional. Nothing is written to the
    /// page here.
    pub fn resolve(document: &web::Document) -> Option<Self> {
        let container = document
            .get_element_by_id("chaiGlassContainer")?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let stream_svg = document.get_element_by_id("pourStreamSvg")?;
        let stream_path = document.get_element_by_id("pourStreamPath")?;

        let splash = document.get_element_by_id("splashEllipse");
        let tea = match (
            document.get_element_by_id("teaBody"),
            document.get_element_by_id("foamSurface"),
        ) {
            (Some(body), Some(surface)) => Some(TeaHandles { body, surface }),
            _ => None,
        };
        let steam = document.get_element_by_id("steamGroup");

        log::info!(
            "[pour] scene resolved (splash={} tea={} steam={})",
            splash.is_some(),
            tea.is_some(),
            steam.is_some()
        );
        Some(Self {
            container,
            stream_svg,
            stream_path,
            splash,
            droplets: SmallVec::new(),
            tea,
            steam,
        })
    }

    /// Prepares the scene for animation: rotation pivot on the container and
    /// one circle per droplet of the engine's pool, appended to the stream SVG.
    pub fn animate_with(mut self, document: &web::Document, engine: &PourEngine) -> Self {
        let cfg = engine.config();
        let pivot = cfg.stream.pivot;
        _ = self
            .container
            .style()
            .set_property("transform-origin", &format!("{}px {}px", pivot.x, pivot.y));

        let count = engine.stream().droplets.len();
        self.droplets =
            create_droplets(document, &self.stream_svg, count, cfg.droplets.radius_idle);
        log::info!("[pour] {} droplets attached", self.droplets.len());
        self
    }

    pub fn apply(&self, engine: &PourEngine) {
        self.apply_cup(&engine.pose());
        self.apply_stream(engine.stream());
    }

    fn apply_cup(&self, pose: &ScenePose) {
        _ = self
            .container
            .style()
            .set_property("transform", &cup_transform(pose.tilt_deg));
        if let Some(tea) = &self.tea {
            set_attr_fixed(&tea.body, "y", pose.tea.y, 1);
            set_attr_fixed(&tea.body, "height", pose.tea.height, 1);
            set_attr_fixed(&tea.surface, "cy", pose.tea.y, 1);
        }
        if let Some(steam) = &self.steam {
            dom::set_style(steam, "opacity", &format!("{:.2}", pose.steam_opacity));
        }
    }

    fn apply_stream(&self, geo: &StreamGeometry) {
        if !geo.is_flowing() {
            _ = self.stream_path.set_attribute("d", "");
            _ = self.stream_path.set_attribute("stroke-width", "0");
            if let Some(splash) = &self.splash {
                _ = splash.set_attribute("rx", "0");
                _ = splash.set_attribute("ry", "0");
            }
            self.hide_droplets();
            return;
        }

        _ = self.stream_path.set_attribute("d", &geo.path);
        set_attr_fixed(&self.stream_path, "stroke-width", geo.stroke_width, 1);
        if let Some(splash) = &self.splash {
            set_attr_fixed(splash, "cx", geo.splash.center.x, 1);
            set_attr_fixed(splash, "cy", geo.splash.center.y, 1);
            set_attr_fixed(splash, "rx", geo.splash.rx, 1);
            set_attr_fixed(splash, "ry", geo.splash.ry, 1);
        }
        for (el, drop) in self.droplets.iter().zip(geo.droplets.iter()) {
            if !drop.is_visible() {
                _ = el.set_attribute("opacity", "0");
                continue;
            }
            set_attr_fixed(el, "cx", drop.center.x, 1);
            set_attr_fixed(el, "cy", drop.center.y, 1);
            set_attr_fixed(el, "r", drop.radius, 1);
            set_attr_fixed(el, "opacity", drop.opacity, 2);
        }
    }

    fn hide_droplets(&self) {
        for el in &self.droplets {
            _ = el.set_attribute("opacity", "0");
        }
    }

    /// Reduced motion: upright cup with a short faint ribbon, applied once.
    pub fn apply_static_fallback(&self) {
        _ = self.container.style().set_property("transform", "none");
        _ = self.stream_path.set_attribute("d", FALLBACK_PATH);
        _ = self
            .stream_path
            .set_attribute("stroke-width", FALLBACK_STROKE_WIDTH);
        _ = self.stream_path.set_attribute("opacity", FALLBACK_OPACITY);
        if let Some(splash) = &self.splash {
            for (name, value) in ["cx", "cy", "rx", "ry"].into_iter().zip(FALLBACK_SPLASH) {
                _ = splash.set_attribute(name, value);
            }
        }
    }
}

fn create_droplets(
    document: &web::Document,
    stream_svg: &web::Element,
    count: usize,
    idle_radius: f32,
) -> SmallVec<[web::Element; DROPLET_COUNT]> {
    let mut out = SmallVec::new();
    for i in 0..count {
        let circle = match document.create_element_ns(Some(SVG_NS), "circle") {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[pour] droplet {} create error: {:?}", i, e);
                continue;
            }
        };
        _ = circle.set_attribute("fill", DROPLET_FILL);
        _ = circle.set_attribute("opacity", "0");
        set_attr_fixed(&circle, "r", idle_radius, 1);
        _ = stream_svg.append_child(&circle);
        out.push(circle);
    }
    out
}
