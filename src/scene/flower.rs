use super::{rgb8, Shape};
use glam::Vec2;
use std::f32::consts::TAU;

const STEM_WIDTH: f32 = 10.0;
const LEAF_OFFSET: f32 = 15.0;
const PETAL_COUNT: usize = 8;
const PETAL_RADIUS: f32 = 40.0;

fn pink() -> glam::Vec4 {
    rgb8(0xFF, 0x61, 0xA5)
}

fn blue() -> glam::Vec4 {
    rgb8(0x2F, 0xB2, 0xFF)
}

/// Segment lines, alternating pink and blue. The last one runs to the
/// flower head and follows the gap rather than the stem spacing.
pub fn stem(joints: &[Vec2]) -> Vec<Shape> {
    joints
        .windows(2)
        .enumerate()
        .map(|(i, pair)| Shape::Line {
            from: pair[0],
            to: pair[1],
            width: STEM_WIDTH,
            color: if i % 2 == 0 { pink() } else { blue() },
        })
        .collect()
}

/// One leaf on every other segment, alternating right and left of the stem.
pub fn leaves(joints: &[Vec2]) -> Vec<Shape> {
    let green = rgb8(0x34, 0xA8, 0x53);
    let n = joints.len();

    (1..n.saturating_sub(1))
        .step_by(2)
        .map(|i| {
            let mid = joints[i].lerp(joints[i + 1], 0.5);
            let side = if i % 4 == 1 { LEAF_OFFSET } else { -LEAF_OFFSET };
            Shape::ellipse(mid + Vec2::new(side, 0.0), 20.0, 10.0, green)
        })
        .collect()
}

pub fn petals(center: Vec2) -> Vec<Shape> {
    (0..PETAL_COUNT)
        .map(|i| {
            let angle = TAU / PETAL_COUNT as f32 * i as f32;
            let offset = Vec2::new(angle.cos(), angle.sin()) * PETAL_RADIUS;
            Shape::circle(center + offset, 30.0, pink())
        })
        .collect()
}

pub fn head(center: Vec2) -> [Shape; 2] {
    [
        Shape::circle(center, 60.0, pink()),
        Shape::circle(center, 30.0, rgb8(0xFF, 0xD7, 0x00)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Vec2> {
        (0..n).map(|i| Vec2::new(0.0, -(i as f32) * 10.0)).collect()
    }

    #[test]
    fn stem_covers_every_pair() {
        let joints = line(10);
        let shapes = stem(&joints);
        assert_eq!(shapes.len(), 9);

        match shapes[8] {
            Shape::Line { from, to, .. } => {
                assert_eq!(from, joints[8]);
                assert_eq!(to, joints[9]);
            }
            other => panic!("unexpected shape {other:?}"),
        }

        match (shapes[0], shapes[1]) {
            (Shape::Line { color: a, .. }, Shape::Line { color: b, .. }) => {
                assert_eq!(a, pink());
                assert_eq!(b, blue());
            }
            other => panic!("unexpected shapes {other:?}"),
        }
    }

    #[test]
    fn leaves_alternate_sides() {
        let shapes = leaves(&line(10));
        // i = 1, 3, 5, 7
        assert_eq!(shapes.len(), 4);

        let xs: Vec<f32> = shapes
            .iter()
            .map(|s| match s {
                Shape::Ellipse { center, .. } => center.x,
                other => panic!("unexpected shape {other:?}"),
            })
            .collect();
        assert_eq!(xs, vec![15.0, -15.0, 15.0, -15.0]);
    }

    #[test]
    fn short_chains_draw_nothing() {
        assert!(stem(&line(1)).is_empty());
        assert_eq!(stem(&line(2)).len(), 1);
        assert!(stem(&[]).is_empty());
        assert!(leaves(&line(2)).is_empty());
    }

    #[test]
    fn petals_ring_the_head() {
        let center = Vec2::new(50.0, 50.0);
        for petal in petals(center) {
            match petal {
                Shape::Ellipse { center: c, radii, .. } => {
                    assert!((c.distance(center) - 40.0).abs() < 1e-4);
                    assert_eq!(radii, Vec2::splat(15.0));
                }
                other => panic!("unexpected shape {other:?}"),
            }
        }
    }
}
