use super::helpers::{self, PipelineSpec};
use super::uniforms::ParticleUniforms;
use cell_core::{ParticleField, ParticleInstance, ShaderLibrary, ShaderProgram};
use wgpu::util::DeviceExt;

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32];

/// Corners per particle quad (two triangles, no index buffer).
const QUAD_VERTICES: u32 = 6;

/// Zero-sized vertex buffers are rejected; an empty field uploads this.
const PLACEHOLDER_INSTANCE: [ParticleInstance; 1] = [ParticleInstance {
    position: [0.0; 3],
    offset: 0.0,
}];

/// Particle shell: one instanced quad per particle, positions fixed at
/// creation.
pub(crate) struct ParticleLayer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl ParticleLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        library: &mut ShaderLibrary,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        field: &ParticleField,
    ) -> anyhow::Result<Self> {
        let program = ShaderProgram::Particles;
        let label = program.name();
        let shader = helpers::shader_module(device, library, program)?;
        let bgl = helpers::uniform_layout(device, label);
        let (uniform_buffer, bind_group) = helpers::uniform_binding(
            device,
            &bgl,
            label,
            std::mem::size_of::<ParticleUniforms>() as u64,
        );
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRIBUTES,
        };
        let pipeline = helpers::make_additive_pipeline(
            device,
            &layout,
            PipelineSpec {
                label,
                shader: &shader,
                buffers: &[instance_layout],
                cull_mode: None,
                color_format,
                sample_count,
            },
        );
        let instances = field.instances();
        let contents: &[ParticleInstance] = if instances.is_empty() {
            &PLACEHOLDER_INSTANCE
        } else {
            &instances
        };
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_instances"),
            contents: bytemuck::cast_slice(contents),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Ok(Self {
            pipeline,
            instance_buffer,
            instance_count: instances.len() as u32,
            uniform_buffer,
            bind_group,
        })
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &ParticleUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..QUAD_VERTICES, 0..self.instance_count);
    }
}
