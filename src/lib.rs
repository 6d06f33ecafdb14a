#![cfg(target_arch = "wasm32")]
use crate::core::{Camera, HeroDriver, HeroVariant, ModelPlacement, Orbit, PageContent};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod page;
mod render;

use constants::{PAGE_ROOT_ID, VARIANT_QUERY_KEY};
use crate::core::constants::{INTRO_DELAY_SEC, INTRO_DURATION_SEC, INTRO_OFFSET_PX};
use crate::core::reveal::{RevealStyle, ViewReveal};

/// Configured variant, overridden by `?hero=canvas|css`.
fn resolve_variant(configured: HeroVariant) -> HeroVariant {
    match dom::query_param(VARIANT_QUERY_KEY) {
        Some(raw) => match raw.parse::<HeroVariant>() {
            Ok(v) => {
                log::info!("[hero] variant {:?} from query string", v);
                v
            }
            Err(e) => {
                log::warn!("[hero] {}; keeping {:?}", e, configured);
                configured
            }
        },
        None => configured,
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pink-ergo-web starting");

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
    let root = document
        .get_element_by_id(PAGE_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", PAGE_ROOT_ID))?;

    let content = PageContent::bundled()?;
    let settings = content.hero.settings.clone();
    let variant = resolve_variant(settings.variant);
    log::info!(
        "[content] {} captions, {} text blocks, {} timeline tweens; hero {:?}",
        content.hero.captions.len(),
        content.hero.blocks.len(),
        settings.timeline.len(),
        variant
    );

    // Driver first so the page renders the caption that matches the initial scroll.
    let mut driver = HeroDriver::new(&content.hero, 0.0);
    let mounted = page::mount(&document, &root, &content, driver.initial_caption())?;
    let mut listeners = mounted.listeners;

    let scroll = Rc::new(RefCell::new(events::ScrollState::default()));
    let hero_el: &web::Element = &mounted.hero.section;
    listeners.extend(events::wire_scroll_tracking(
        hero_el.clone(),
        settings.progress,
        scroll.clone(),
    )?);
    // Re-seed from the measured position so a reload mid-page does not spin up from zero.
    let initial_progress = scroll.borrow().progress;
    if initial_progress > 0.0 {
        driver = HeroDriver::new(&content.hero, initial_progress);
        if let Some(text) = content.hero.captions.get(driver.initial_caption()) {
            mounted.hero.caption.set_text_content(Some(text.as_str()));
        }
    }

    hero::show_variant(&mounted.hero, variant);

    let camera = Camera {
        eye: Vec3::from(settings.camera_position),
        fovy_radians: settings.fov_deg.to_radians(),
        ..Camera::default()
    };
    let placement = ModelPlacement {
        offset: Vec3::from(settings.model_offset),
        scale: settings.model_scale,
    };

    let mut gpu = None;
    let mut orbit = None;
    if variant == HeroVariant::Canvas {
        listeners.push(events::wire_canvas_resize(&mounted.hero.canvas)?);
        gpu = frame::init_gpu(&mounted.hero.canvas, camera.clone(), placement).await;
        if gpu.is_some() && settings.orbit {
            let state = Rc::new(RefCell::new(Orbit::default()));
            listeners.extend(events::wire_orbit(&mounted.hero.canvas, state.clone())?);
            orbit = Some(state);
        }
    }

    let started = Instant::now();
    let mut intro = ViewReveal::new(RevealStyle::rise(
        INTRO_DELAY_SEC,
        INTRO_DURATION_SEC,
        INTRO_OFFSET_PX,
    ));
    intro.trigger(0.0);

    let mut ctx = frame::FrameContext {
        driver,
        variant,
        captions: content.hero.captions.clone(),
        scroll,
        hero: mounted.hero,
        intro,
        reveals: mounted.reveals,
        gpu,
        orbit,
        base_eye: camera.eye,
        started,
        listeners,
    };
    if variant == HeroVariant::Canvas && ctx.gpu.is_none() {
        log::warn!("[hero] WebGPU unavailable, falling back to CSS hero");
        frame::degrade_to_css(&mut ctx);
    }

    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
