//! Draws a [`DrawList`] from the viewpoint of a [`Camera`].

use wgpu::util::DeviceExt;

use super::dynamic_buffer::TypedBuffer;
use super::pipeline_helpers::{create_colored_pipeline, uniform_buffer};
use super::render_context::RenderContext;
use super::texture::DepthTarget;
use crate::camera::core::{Camera, CameraUniform};
use crate::draw::{DrawList, Vertex};

/// Initial vertex capacity of each geometry buffer.
const INITIAL_VERTICES: usize = 4096;

/// Line and triangle pipelines sharing one camera uniform and depth buffer.
pub struct SceneRenderer {
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,
    lines: TypedBuffer<Vertex>,
    triangles: TypedBuffer<Vertex>,
    depth: DepthTarget,
}

impl SceneRenderer {
    /// Create pipelines and buffers for the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/colored.wgsl"));

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[uniform_buffer(0)],
            });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let line_pipeline = create_colored_pipeline(
            device,
            "Line",
            &shader,
            context.format(),
            wgpu::PrimitiveTopology::LineList,
            &[&camera_layout],
        );
        let triangle_pipeline = create_colored_pipeline(
            device,
            "Triangle",
            &shader,
            context.format(),
            wgpu::PrimitiveTopology::TriangleList,
            &[&camera_layout],
        );

        let (width, height) = context.size();
        Self {
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            line_pipeline,
            triangle_pipeline,
            lines: TypedBuffer::with_capacity(
                device,
                "Line Vertices",
                INITIAL_VERTICES,
                wgpu::BufferUsages::VERTEX,
            ),
            triangles: TypedBuffer::with_capacity(
                device,
                "Triangle Vertices",
                INITIAL_VERTICES,
                wgpu::BufferUsages::VERTEX,
            ),
            depth: DepthTarget::new(device, width, height),
        }
    }

    /// Recreate the depth buffer if the surface size changed.
    pub fn resize(&mut self, context: &RenderContext) {
        let (width, height) = context.size();
        if !self.depth.matches(width, height) {
            self.depth = DepthTarget::new(&context.device, width, height);
        }
    }

    /// Upload the camera and this frame's geometry.
    pub fn prepare(&mut self, context: &RenderContext, camera: &Camera, list: &DrawList) {
        self.camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
        let _ = self.lines.write(&context.device, &context.queue, list.lines());
        let _ = self
            .triangles
            .write(&context.device, &context.queue, list.triangles());
    }

    /// Clear `view` to `clear_color` and draw the prepared geometry,
    /// triangles first so lines on top of filled faces stay visible.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear_color: [f32; 4],
    ) {
        let [r, g, b, a] = clear_color.map(f64::from);
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            ..Default::default()
        });

        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        for (pipeline, buffer) in [
            (&self.triangle_pipeline, &self.triangles),
            (&self.line_pipeline, &self.lines),
        ] {
            if buffer.is_empty() {
                continue;
            }
            pass.set_pipeline(pipeline);
            pass.set_vertex_buffer(0, buffer.buffer().slice(..));
            pass.draw(0..buffer.count() as u32, 0..1);
        }
    }
}
