use crate::animation;
use crate::render::Renderer;
use crate::state::HeroState;
use cell_core::{ParticleField, SceneTransforms};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<HeroState>>,
    pub renderer: Renderer,
    pub clock: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed().as_secs_f32();

        // Borrow only long enough to step the state; input handlers write
        // between frames.
        let (frame_state, transforms, backing) = {
            let mut s = self.state.borrow_mut();
            let frame_state = s.interaction.advance(elapsed);
            let transforms = SceneTransforms::compute(&s.view.camera, &frame_state);
            (frame_state, transforms, s.view.viewport.backing_size())
        };

        self.renderer.resize_if_needed(backing.0, backing.1);
        match self.renderer.render(&frame_state, &transforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("[gpu] out of memory"),
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    backing: (u32, u32),
    sample_count: u32,
) -> anyhow::Result<Renderer> {
    let renderer = Renderer::new(canvas, field, backing, sample_count).await?;
    let (w, h) = renderer.size();
    log::info!("[gpu] renderer ready {}x{}, {} particles", w, h, field.len());
    Ok(renderer)
}

/// Runs for the lifetime of the page.
pub fn start_loop(mut ctx: FrameContext) {
    animation::run_every_frame(move |_| {
        ctx.frame();
        true
    });
}
