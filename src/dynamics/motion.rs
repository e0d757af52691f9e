use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            stiffness: 0.4,
            damping: 0.6,
        }
    }
}

impl MotionParams {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl MotionState {
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

/// Fixed-timestep spring follower, advanced once per frame.
///
/// Each step pulls toward the raw target with `stiffness`, then scales the
/// whole velocity by `damping`. Forces are impulses: acceleration is cleared
/// after every step. Out-of-range parameters are accepted and just make the
/// motion more aggressive or oscillatory.
#[derive(Debug, Clone)]
pub struct MotionController {
    state: MotionState,
    params: MotionParams,
}

impl MotionController {
    pub fn new(params: MotionParams, initial: Vec2) -> Self {
        Self {
            state: MotionState::at_rest(initial),
            params,
        }
    }

    pub fn step(&mut self, raw_target: Vec2) -> Vec2 {
        let force = (raw_target - self.state.position) * self.params.stiffness;
        self.state.acceleration += force;
        self.state.velocity = (self.state.velocity + self.state.acceleration) * self.params.damping;
        self.state.position += self.state.velocity;
        self.state.acceleration = Vec2::ZERO;

        self.state.position
    }

    /// Queues an extra impulse for the next [`step`](Self::step).
    pub fn apply_force(&mut self, force: Vec2) {
        self.state.acceleration += force;
    }

    /// Teleports the follower and drops its momentum.
    pub fn reset(&mut self, position: Vec2) {
        self.state = MotionState::at_rest(position);
    }

    /// Moves the follower without touching its velocity. Callers use this to
    /// clamp the position into their own bounds.
    pub fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn is_settled(&self, target: Vec2, threshold: f32) -> bool {
        self.state.position.distance(target) < threshold && self.state.velocity.length() < threshold
    }
}
