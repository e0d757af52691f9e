use crate::math::direction_or_up;
use crate::scene::Shape;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };
}

/// Flattens [`Shape`]s into a triangle list in normalized device
/// coordinates. Input positions are canvas pixels, y down.
pub struct Tessellator {
    viewport: Vec2,
    circle_segments: u32,
    vertices: Vec<Vertex>,
}

impl Tessellator {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            circle_segments: 32,
            vertices: Vec::new(),
        }
    }

    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    pub fn tessellate(&mut self, shapes: &[Shape]) -> &[Vertex] {
        self.vertices.clear();
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return &self.vertices;
        }

        for shape in shapes {
            match *shape {
                Shape::VerticalGradient { top, bottom } => self.gradient(top, bottom),
                Shape::Ellipse { center, radii, color } => self.ellipse(center, radii, color),
                Shape::Line { from, to, width, color } => self.line(from, to, width, color),
            }
        }

        &self.vertices
    }

    fn to_ndc(&self, p: Vec2) -> [f32; 2] {
        [p.x / self.viewport.x * 2.0 - 1.0, 1.0 - p.y / self.viewport.y * 2.0]
    }

    fn push(&mut self, p: Vec2, color: Vec4) {
        let position = self.to_ndc(p);
        self.vertices.push(Vertex {
            position,
            color: color.to_array(),
        });
    }

    fn quad(&mut self, corners: [(Vec2, Vec4); 4]) {
        let [a, b, c, d] = corners;
        for (p, color) in [a, b, c, a, c, d] {
            self.push(p, color);
        }
    }

    fn gradient(&mut self, top: Vec4, bottom: Vec4) {
        let Vec2 { x: w, y: h } = self.viewport;
        self.quad([
            (Vec2::new(0.0, 0.0), top),
            (Vec2::new(w, 0.0), top),
            (Vec2::new(w, h), bottom),
            (Vec2::new(0.0, h), bottom),
        ]);
    }

    fn ellipse(&mut self, center: Vec2, radii: Vec2, color: Vec4) {
        let n = self.circle_segments;
        let point = |i: u32| {
            let angle = TAU * i as f32 / n as f32;
            center + Vec2::new(angle.cos(), angle.sin()) * radii
        };

        for i in 0..n {
            let (a, b) = (point(i), point(i + 1));
            self.push(center, color);
            self.push(a, color);
            self.push(b, color);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        let normal = direction_or_up(to - from).perp() * (width / 2.0);
        self.quad([
            (from + normal, color),
            (to + normal, color),
            (to - normal, color),
            (from - normal, color),
        ]);
    }
}
