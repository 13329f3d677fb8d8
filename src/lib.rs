#![cfg(target_arch = "wasm32")]
use cell_core::{HeroError, ParticleField, SceneParams};
use constants::*;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animation;
mod constants;
mod dom;
mod events;
mod frame;
mod observer;
mod render;
pub mod sections;
mod state;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[init] cell-hero starting");

    // Page sections do not depend on the 3D scene.
    if let Err(e) = sections::wire_page_sections() {
        log::warn!("[init] page sections: {:?}", e);
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[init] hero disabled: {:?}", e);
            dom::mark_fallback();
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or(HeroError::MissingWindow)?;
    let document = window.document().ok_or(HeroError::MissingDocument)?;
    let hero = document
        .query_selector(HERO_SELECTOR)
        .map_err(dom::js_err)?
        .ok_or_else(|| HeroError::MissingContainer(HERO_SELECTOR.to_string()))?;

    let params = SceneParams::default();
    let viewport = dom::read_viewport(&window, params.pixel_ratio_cap);
    let canvas = dom::create_surface_canvas(&document, &hero)?;
    dom::size_canvas(&canvas, &viewport);
    let hero_height = hero
        .dyn_ref::<web::HtmlElement>()
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);
    log::info!(
        "[init] viewport {}x{} @{}x, hero {}px",
        viewport.width,
        viewport.height,
        viewport.pixel_ratio,
        hero_height
    );

    let field = ParticleField::generate(
        params.particle_count,
        cell_core::constants::PARTICLE_RADIUS_MIN,
        cell_core::constants::PARTICLE_RADIUS_MAX,
        &mut rand::thread_rng(),
    );
    let renderer = match frame::init_gpu(&canvas, &field, viewport.backing_size(), MSAA_SAMPLES).await
    {
        Ok(r) => r,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };

    let state = Rc::new(RefCell::new(state::HeroState::new(
        params,
        viewport,
        hero_height,
    )));
    events::apply_scroll(&state);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
    });

    frame::start_loop(frame::FrameContext {
        state,
        renderer,
        clock: Instant::now(),
    });
    Ok(())
}
