//! Pointer input
//!
//! The simulation only asks for "where is the pointer now". Front ends feed
//! mouse and touch events into a [`PointerState`] and hand it over as a
//! [`PointerSource`].

use glam::Vec2;

pub trait PointerSource {
    fn current_pointer_position(&self) -> Vec2;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

/// Mouse position plus the set of active touches.
///
/// While any touch is down the earliest one wins; otherwise the last mouse
/// position is reported.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    mouse: Vec2,
    touches: Vec<(u64, Vec2)>,
}

impl PointerState {
    pub fn new(initial: Vec2) -> Self {
        Self {
            mouse: initial,
            touches: Vec::new(),
        }
    }

    pub fn on_mouse_move(&mut self, position: Vec2) {
        self.mouse = position;
    }

    pub fn on_touch(&mut self, id: u64, phase: TouchPhase, position: Vec2) {
        match phase {
            TouchPhase::Started | TouchPhase::Moved => {
                match self.touches.iter_mut().find(|(touch_id, _)| *touch_id == id) {
                    Some((_, pos)) => *pos = position,
                    None => self.touches.push((id, position)),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(touch_id, _)| *touch_id != id);
            }
        }
    }

    pub fn is_touching(&self) -> bool {
        !self.touches.is_empty()
    }
}

impl PointerSource for PointerState {
    fn current_pointer_position(&self) -> Vec2 {
        self.touches.first().map(|(_, pos)| *pos).unwrap_or(self.mouse)
    }
}

/// A pointer that never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointer(pub Vec2);

impl PointerSource for FixedPointer {
    fn current_pointer_position(&self) -> Vec2 {
        self.0
    }
}

impl<T: PointerSource + ?Sized> PointerSource for &T {
    fn current_pointer_position(&self) -> Vec2 {
        (**self).current_pointer_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_is_used_without_touches() {
        let mut input = PointerState::new(Vec2::ZERO);
        input.on_mouse_move(Vec2::new(12.0, 34.0));
        assert_eq!(input.current_pointer_position(), Vec2::new(12.0, 34.0));
    }

    #[test]
    fn first_touch_overrides_mouse() {
        let mut input = PointerState::new(Vec2::ZERO);
        input.on_mouse_move(Vec2::new(1.0, 1.0));
        input.on_touch(7, TouchPhase::Started, Vec2::new(100.0, 100.0));
        input.on_touch(9, TouchPhase::Started, Vec2::new(200.0, 200.0));
        input.on_touch(7, TouchPhase::Moved, Vec2::new(110.0, 90.0));

        assert!(input.is_touching());
        assert_eq!(input.current_pointer_position(), Vec2::new(110.0, 90.0));
    }

    #[test]
    fn lifting_touches_falls_back() {
        let mut input = PointerState::new(Vec2::new(5.0, 5.0));
        input.on_touch(1, TouchPhase::Started, Vec2::new(10.0, 10.0));
        input.on_touch(2, TouchPhase::Started, Vec2::new(20.0, 20.0));

        input.on_touch(1, TouchPhase::Ended, Vec2::new(10.0, 10.0));
        assert_eq!(input.current_pointer_position(), Vec2::new(20.0, 20.0));

        input.on_touch(2, TouchPhase::Cancelled, Vec2::new(20.0, 20.0));
        assert!(!input.is_touching());
        assert_eq!(input.current_pointer_position(), Vec2::new(5.0, 5.0));
    }
}
