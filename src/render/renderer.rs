use super::context::GpuContext;
use super::mesh::{Tessellator, Vertex};
use super::pipeline::RenderPipelines;
use crate::scene::Shape;
use glam::Vec2;

const INITIAL_CAPACITY: usize = 4096;

/// Draws a [`Shape`] list with a single per-frame vertex buffer.
pub struct SceneRenderer {
    pipelines: RenderPipelines,
    tessellator: Tessellator,
    vertex_buffer: wgpu::Buffer,
    capacity: usize,
}

impl SceneRenderer {
    pub fn new(context: &GpuContext) -> Self {
        let pipelines = RenderPipelines::new(context);
        let viewport = Vec2::new(context.size.width as f32, context.size.height as f32);
        let vertex_buffer = Self::create_vertex_buffer(&context.device, INITIAL_CAPACITY);

        Self {
            pipelines,
            tessellator: Tessellator::new(viewport),
            vertex_buffer,
            capacity: INITIAL_CAPACITY,
        }
    }

    fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Vertex Buffer"),
            size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    pub fn render(&mut self, context: &GpuContext, view: &wgpu::TextureView, shapes: &[Shape]) {
        self.tessellator.set_viewport(Vec2::new(
            context.size.width as f32,
            context.size.height as f32,
        ));
        let vertices = self.tessellator.tessellate(shapes);
        let vertex_count = vertices.len();

        if vertex_count > self.capacity {
            self.capacity = vertex_count.next_power_of_two();
            log::debug!("growing scene vertex buffer to {} vertices", self.capacity);
            self.vertex_buffer = Self::create_vertex_buffer(&context.device, self.capacity);
        }
        if vertex_count > 0 {
            context
                .queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
        }

        let mut encoder = context.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Scene Encoder"),
        });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if vertex_count > 0 {
                render_pass.set_pipeline(&self.pipelines.pipeline);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..vertex_count as u32, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}
