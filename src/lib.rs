#![cfg(target_arch = "wasm32")]
use crate::core::{HeroScene, HeroStyle};
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use constants::{HERO_CANVAS_ID, HERO_SEED_ATTR, HERO_STYLE_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("signal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::wire_nav_toggle(&document);
    events::wire_header_shadow(&document);
    events::wire_newsletter_forms(&document);
    events::wire_smooth_scroll(&document);

    start_hero(&document)
}

/// Build the hero scene and start its refresh loop; pages without a hero
/// canvas simply skip it.
fn start_hero(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id(HERO_CANVAS_ID) else {
        log::info!("[hero] no #{} on this page", HERO_CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let Some(ctx) = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        log::warn!("[hero] 2d context unavailable");
        return Ok(());
    };

    let surface = dom::sync_canvas_to_container(&canvas, &ctx);
    let style = HeroStyle::from_attr(canvas.get_attribute(HERO_STYLE_ATTR).as_deref());
    let scene = match canvas
        .get_attribute(HERO_SEED_ATTR)
        .and_then(|s| s.trim().parse::<u64>().ok())
    {
        Some(seed) => HeroScene::with_seed(surface, style, seed),
        None => HeroScene::new(surface, style, &mut StdRng::from_entropy()),
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        painter: render::CanvasPainter::new(ctx),
        canvas,
    }));
    frame::wire_resize(frame_ctx.clone());
    frame::start_loop(frame_ctx);
    Ok(())
}
