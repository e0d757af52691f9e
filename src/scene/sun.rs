//! How the sun looks at a given height. Past three quarters of the canvas
//! it fades to white, loses its rays and gains a glow.

use super::{rgb8, Shape};
use glam::{Vec2, Vec4};
use std::f32::consts::TAU;

const DISC_DIAMETER: f32 = 50.0;
const RAY_COUNT: usize = 12;
const RAY_LENGTH: f32 = 30.0;
const RAY_WIDTH: f32 = 3.0;
const NIGHT_START: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub diameter: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunLook {
    pub color: Vec4,
    pub ray_length: f32,
    pub glow: Option<Glow>,
}

impl SunLook {
    pub fn at(time_of_day: f32) -> Self {
        let day = rgb8(0xFF, 0xEB, 0x3B);

        if time_of_day <= NIGHT_START {
            return Self {
                color: day,
                ray_length: RAY_LENGTH,
                glow: None,
            };
        }

        let k = ((time_of_day - NIGHT_START) * 4.0).min(1.0);
        Self {
            color: day.lerp(Vec4::ONE, k),
            ray_length: RAY_LENGTH * (1.0 - k),
            glow: Some(Glow {
                diameter: 50.0 + 50.0 * k,
                alpha: 100.0 / 255.0 * k,
            }),
        }
    }

    pub fn shapes(&self, center: Vec2) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(RAY_COUNT + 2);

        if let Some(glow) = self.glow {
            shapes.push(Shape::circle(center, glow.diameter, Vec4::new(1.0, 1.0, 1.0, glow.alpha)));
        }
        shapes.push(Shape::circle(center, DISC_DIAMETER, self.color));

        if self.ray_length > 0.0 {
            let inner = DISC_DIAMETER / 2.0;
            for i in 0..RAY_COUNT {
                let angle = TAU / RAY_COUNT as f32 * i as f32;
                let dir = Vec2::new(angle.cos(), angle.sin());
                shapes.push(Shape::Line {
                    from: center + dir * inner,
                    to: center + dir * (inner + self.ray_length),
                    width: RAY_WIDTH,
                    color: self.color,
                });
            }
        }

        shapes
    }
}
