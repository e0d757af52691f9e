//! Scene description
//!
//! Turns a [`Frame`](crate::Frame) into a flat, back-to-front list of
//! [`Shape`]s. Nothing here touches the GPU.

pub mod flower;
pub mod sky;
pub mod sun;

use crate::sim::Frame;
use glam::{Vec2, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Fills the whole canvas, blending from `top` to `bottom`.
    VerticalGradient { top: Vec4, bottom: Vec4 },
    Ellipse { center: Vec2, radii: Vec2, color: Vec4 },
    Line { from: Vec2, to: Vec2, width: f32, color: Vec4 },
}

impl Shape {
    pub fn circle(center: Vec2, diameter: f32, color: Vec4) -> Self {
        Shape::Ellipse {
            center,
            radii: Vec2::splat(diameter / 2.0),
            color,
        }
    }

    pub fn ellipse(center: Vec2, width: f32, height: f32, color: Vec4) -> Self {
        Shape::Ellipse {
            center,
            radii: Vec2::new(width / 2.0, height / 2.0),
            color,
        }
    }
}

/// 8-bit RGB to linear-blend RGBA in `0..=1`.
pub fn rgb8(r: u8, g: u8, b: u8) -> Vec4 {
    rgba8(r, g, b, 255)
}

pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
}

pub struct Scene;

impl Scene {
    pub fn build(frame: &Frame) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(64);
        let t = sky::time_of_day(frame.sun.y, frame.canvas.y);

        let (top, bottom) = sky::gradient(t);
        shapes.push(Shape::VerticalGradient { top, bottom });

        shapes.extend(flower::leaves(&frame.joints));
        shapes.extend(flower::stem(&frame.joints));
        if let Some(head) = frame.end_effector() {
            shapes.extend(flower::petals(head));
            shapes.extend(flower::head(head));
        }
        shapes.extend(sun::SunLook::at(t).shapes(frame.sun));

        shapes
    }
}
