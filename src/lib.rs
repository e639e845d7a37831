#![cfg(target_arch = "wasm32")]
use crate::core::{PourConfig, PourEngine};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod pour;
mod ui;

fn init_pour(window: &web::Window, document: &web::Document, reduced_motion: bool) {
    let Some(scene) = pour::PourScene::resolve(document) else {
        log::warn!("[pour] glass elements missing; animation disabled");
        return;
    };
    if reduced_motion {
        scene.apply_static_fallback();
        log::info!("[pour] reduced motion: static glass");
        return;
    }

    let engine = PourEngine::new(PourConfig::default());
    let scene = scene.animate_with(document, &engine);
    let ctx = frame::FrameContext::new(window.clone(), document.clone(), engine, scene);
    let driver = frame::FrameDriver::start(ctx);
    events::scroll::wire_pour_scroll(window, &driver);
    events::scroll::wire_visibility(document, &driver);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chai-pour starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Read once; later changes to the OS setting are not followed.
    let reduced_motion = dom::media_matches(&window, "(prefers-reduced-motion: reduce)");

    ui::theme::init(&window, &document);
    init_pour(&window, &document, reduced_motion);
    ui::header::init(&window, &document);
    ui::mobile_nav::init(&document);
    ui::tabs::init(&document);
    ui::anchors::init(&window, &document, reduced_motion);
    ui::observers::init_lazy_images(&document);
    ui::observers::init_active_nav(&document);
    ui::contact::init(&document);
    Ok(())
}
