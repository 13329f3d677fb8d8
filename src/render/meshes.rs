use super::helpers::{self, PipelineSpec};
use super::uniforms::MeshUniforms;
use cell_core::{MeshData, MeshVertex, ShaderLibrary, ShaderProgram};
use wgpu::util::DeviceExt;

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &MESH_ATTRIBUTES,
    }
}

/// One indexed sphere drawn with its own program and uniform block.
pub(crate) struct MeshLayer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) struct MeshLayerDesc<'a> {
    pub(crate) program: ShaderProgram,
    pub(crate) mesh: &'a MeshData,
    pub(crate) cull_mode: Option<wgpu::Face>,
}

impl MeshLayer {
    pub(crate) fn new(
        device: &wgpu::Device,
        library: &mut ShaderLibrary,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
        desc: MeshLayerDesc<'_>,
    ) -> anyhow::Result<Self> {
        let label = desc.program.name();
        let shader = helpers::shader_module(device, library, desc.program)?;
        let bgl = helpers::uniform_layout(device, label);
        let (uniform_buffer, bind_group) = helpers::uniform_binding(
            device,
            &bgl,
            label,
            std::mem::size_of::<MeshUniforms>() as u64,
        );
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(label),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_additive_pipeline(
            device,
            &layout,
            PipelineSpec {
                label,
                shader: &shader,
                buffers: &[vertex_layout()],
                cull_mode: desc.cull_mode,
                color_format,
                sample_count,
            },
        );
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&desc.mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&desc.mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Ok(Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: desc.mesh.index_count(),
            uniform_buffer,
            bind_group,
        })
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &MeshUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
