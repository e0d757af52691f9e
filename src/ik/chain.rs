use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) joints: Vec<Vec2>,
    pub(crate) segment_length: f32,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Wraps existing joint positions. `segment_length` is the rest length
    /// the solver scales by the stretch factor.
    pub fn from_joints(joints: Vec<Vec2>, segment_length: f32) -> Self {
        Self {
            joints,
            segment_length,
        }
    }

    pub fn joints(&self) -> &[Vec2] {
        &self.joints
    }

    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Total reach at a stretch factor of one.
    pub fn rest_length(&self) -> f32 {
        self.joints.len() as f32 * self.segment_length
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn end_effector(&self) -> Option<Vec2> {
        self.joints.last().copied()
    }

    pub fn base(&self) -> Option<Vec2> {
        self.joints.first().copied()
    }

    /// Current distance between each consecutive pair of joints.
    pub fn segment_lengths(&self) -> impl Iterator<Item = f32> + '_ {
        self.joints.windows(2).map(|w| w[0].distance(w[1]))
    }
}

pub struct ChainBuilder {
    segment_count: usize,
    segment_length: f32,
    origin: Vec2,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            segment_count: 10,
            segment_length: 50.0,
            origin: Vec2::ZERO,
        }
    }

    pub fn segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    pub fn segment_length(mut self, segment_length: f32) -> Self {
        self.segment_length = segment_length;
        self
    }

    pub fn origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Lays the joints out collinear along +x starting at the origin.
    pub fn build(self) -> Chain {
        let joints = (0..self.segment_count)
            .map(|i| self.origin + Vec2::new(i as f32 * self.segment_length, 0.0))
            .collect();

        Chain {
            joints,
            segment_length: self.segment_length,
        }
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_lays_joints_on_a_horizontal_line() {
        let chain = Chain::builder()
            .segment_count(4)
            .segment_length(25.0)
            .origin(Vec2::new(0.0, 300.0))
            .build();

        assert_eq!(
            chain.joints(),
            &[
                Vec2::new(0.0, 300.0),
                Vec2::new(25.0, 300.0),
                Vec2::new(50.0, 300.0),
                Vec2::new(75.0, 300.0),
            ]
        );
        assert_eq!(chain.rest_length(), 100.0);
        assert_eq!(chain.end_effector(), Some(Vec2::new(75.0, 300.0)));
    }

    #[test]
    fn segment_lengths_measure_pairs() {
        let chain = Chain::from_joints(
            vec![Vec2::ZERO, Vec2::new(3.0, 4.0), Vec2::new(3.0, 10.0)],
            5.0,
        );
        let lengths: Vec<f32> = chain.segment_lengths().collect();
        assert_eq!(lengths, vec![5.0, 6.0]);
    }

    #[test]
    fn empty_chain_has_no_ends() {
        let chain = Chain::builder().segment_count(0).build();
        assert_eq!(chain.base(), None);
        assert_eq!(chain.end_effector(), None);
        assert_eq!(chain.segment_lengths().count(), 0);
    }
}
