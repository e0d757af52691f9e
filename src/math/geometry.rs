use glam::Vec2;

/// Lengths at or below this are treated as zero.
pub const EPSILON: f32 = 0.0001;

/// Straight up on screen. Canvas y grows downward.
pub const UP: Vec2 = Vec2::NEG_Y;

/// Unit direction of `v`, or [`UP`] when `v` is (nearly) zero.
pub fn direction_or_up(v: Vec2) -> Vec2 {
    let len = v.length();
    if len > EPSILON {
        v / len
    } else {
        UP
    }
}

/// Rescales `v` to `length`, falling back to [`UP`] for degenerate input.
pub fn set_length(v: Vec2, length: f32) -> Vec2 {
    direction_or_up(v) * length
}
