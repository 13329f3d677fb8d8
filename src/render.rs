use cell_core::constants::*;
use cell_core::{icosphere, uv_sphere, FrameState, ParticleField, SceneTransforms, ShaderLibrary, ShaderProgram};
use glam::Vec2;
use web_sys as web;

mod helpers;
mod meshes;
mod particles;
mod targets;
pub mod uniforms;

use meshes::{MeshLayer, MeshLayerDesc};
use particles::ParticleLayer;
use targets::MsaaTarget;
use uniforms::{MeshUniforms, ParticleUniforms};

/// Shader-driven tints are white; only the nucleus carries a fixed colour.
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const NUCLEUS_COLOR: [f32; 4] = [
    NUCLEUS_TINT[0],
    NUCLEUS_TINT[1],
    NUCLEUS_TINT[2],
    NUCLEUS_OPACITY,
];

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    msaa: MsaaTarget,
    membrane: MeshLayer,
    inner_glow: MeshLayer,
    nucleus: MeshLayer,
    particles: ParticleLayer,
    clear_color: wgpu::Color,
}

impl Renderer {
    /// `backing` is the canvas drawing-buffer size in device pixels.
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        field: &ParticleField,
        backing: (u32, u32),
        sample_count: u32,
    ) -> anyhow::Result<Self> {
        let (width, height) = (backing.0.max(1), backing.1.max(1));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| {
                cell_core::HeroError::GraphicsUnavailable("no WebGPU adapter".into())
            })?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| {
                cell_core::HeroError::GraphicsUnavailable(format!("request_device error: {:?}", e))
            })?;
        let caps = surface.get_capabilities(&adapter);
        // Colours are authored for direct output, so skip the sRGB encode.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| {
                cell_core::HeroError::GraphicsUnavailable("surface has no formats".into())
            })?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{} alpha {:?}", format, width, height, alpha_mode);

        let msaa = MsaaTarget::new(&device, width, height, format, sample_count);

        let mut library = ShaderLibrary::new()?;
        let membrane_mesh = icosphere(MEMBRANE_RADIUS, MEMBRANE_DETAIL);
        let glow_mesh = icosphere(INNER_GLOW_RADIUS, INNER_GLOW_DETAIL);
        let nucleus_mesh = uv_sphere(NUCLEUS_RADIUS, NUCLEUS_SEGMENTS, NUCLEUS_SEGMENTS);
        let mut mesh_layer = |program, mesh, cull_mode| {
            MeshLayer::new(
                &device,
                &mut library,
                format,
                sample_count,
                MeshLayerDesc {
                    program,
                    mesh,
                    cull_mode,
                },
            )
        };
        let membrane = mesh_layer(ShaderProgram::Membrane, &membrane_mesh, None)?;
        let inner_glow = mesh_layer(ShaderProgram::InnerGlow, &glow_mesh, None)?;
        let nucleus = mesh_layer(ShaderProgram::Nucleus, &nucleus_mesh, Some(wgpu::Face::Back))?;
        let particles = ParticleLayer::new(&device, &mut library, format, sample_count, field)?;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            msaa,
            membrane,
            inner_glow,
            nucleus,
            particles,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.msaa
            .recreate(&self.device, self.config.width, self.config.height);
    }

    /// Draw one frame. A lost or outdated surface is reconfigured and the
    /// frame skipped.
    pub fn render(
        &mut self,
        frame_state: &FrameState,
        transforms: &SceneTransforms,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let projection = transforms.projection;
        self.membrane.write(
            &self.queue,
            &MeshUniforms::new(&transforms.membrane, projection, frame_state, WHITE),
        );
        self.inner_glow.write(
            &self.queue,
            &MeshUniforms::new(&transforms.inner_glow, projection, frame_state, WHITE),
        );
        self.nucleus.write(
            &self.queue,
            &MeshUniforms::new(&transforms.nucleus, projection, frame_state, NUCLEUS_COLOR),
        );
        let resolution = Vec2::new(self.config.width as f32, self.config.height as f32);
        self.particles.write(
            &self.queue,
            &ParticleUniforms::new(&transforms.particles, projection, frame_state, resolution),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa.view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            // Additive and depth-less: order only matters for float rounding.
            self.inner_glow.draw(&mut rpass);
            self.membrane.draw(&mut rpass);
            self.nucleus.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
