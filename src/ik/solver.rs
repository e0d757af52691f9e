use super::chain::Chain;
use crate::math::{set_length, EPSILON};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// Spacing used for every pair during this solve.
    pub segment_length: f32,
    pub gap_adjusted: bool,
    /// Distance between the last two joints once the solve is done.
    pub end_gap: f32,
}

/// Ratio of the anchor-to-target distance to the chain's rest length.
///
/// Scaling every segment by this makes the chain's reach track the target.
/// Targets beyond the natural reach over-stretch the chain; that is not
/// clamped.
pub fn stretch_factor(anchor: Vec2, target: Vec2, rest_length: f32) -> f32 {
    if rest_length <= 0.0 {
        return 0.0;
    }
    anchor.distance(target) / rest_length
}

/// Single-iteration FABRIK over a planar chain with a hard-pinned base.
///
/// There is no convergence loop: the target is smoothed upstream and moves a
/// little each frame, so one forward and one backward pass per frame keeps
/// the chain continuous.
pub struct FabrikSolver;

impl FabrikSolver {
    pub fn solve(chain: &mut Chain, anchor: Vec2, target: Vec2, stretch: f32) -> SolveResult {
        let joint_count = chain.joints.len();

        if joint_count < 2 {
            if let Some(base) = chain.joints.first_mut() {
                *base = anchor;
            }
            return SolveResult {
                segment_length: 0.0,
                gap_adjusted: false,
                end_gap: 0.0,
            };
        }

        let mut segment_length = chain.segment_length * stretch;
        if !segment_length.is_finite() {
            log::warn!("non-finite segment length (stretch {stretch}), using rest length");
            segment_length = chain.segment_length;
        }

        Self::forward_pass(chain, target, segment_length);
        Self::backward_pass(chain, anchor, segment_length);

        SolveResult {
            segment_length,
            gap_adjusted: false,
            end_gap: Self::end_gap(chain),
        }
    }

    /// [`solve`](Self::solve) followed by [`adjust_end_gap`](Self::adjust_end_gap).
    pub fn solve_with_gap(
        chain: &mut Chain,
        anchor: Vec2,
        target: Vec2,
        stretch: f32,
        desired_gap: f32,
    ) -> SolveResult {
        let mut result = Self::solve(chain, anchor, target, stretch);
        result.gap_adjusted = Self::adjust_end_gap(chain, desired_gap);
        result.end_gap = Self::end_gap(chain);
        result
    }

    /// Moves the second-to-last joint along the last segment so that the
    /// last pair ends up exactly `desired_gap` apart. The last joint stays
    /// put. Returns false, leaving the chain untouched, when the pair
    /// coincides or the chain is too short.
    pub fn adjust_end_gap(chain: &mut Chain, desired_gap: f32) -> bool {
        let n = chain.joints.len();
        if n < 2 {
            return false;
        }

        let last = chain.joints[n - 1];
        let penultimate = chain.joints[n - 2];
        let offset = penultimate - last;
        let current = offset.length();

        if current <= EPSILON || !desired_gap.is_finite() {
            return false;
        }

        chain.joints[n - 2] = last + offset * (desired_gap / current);
        true
    }

    fn forward_pass(chain: &mut Chain, target: Vec2, segment_length: f32) {
        let n = chain.joints.len();

        chain.joints[n - 1] = target;

        for i in (0..n - 1).rev() {
            let next_pos = chain.joints[i + 1];
            let dir = chain.joints[i] - next_pos;
            chain.joints[i] = next_pos + set_length(dir, segment_length);
        }
    }

    fn backward_pass(chain: &mut Chain, anchor: Vec2, segment_length: f32) {
        let n = chain.joints.len();

        chain.joints[0] = anchor;

        for i in 1..n {
            let prev_pos = chain.joints[i - 1];
            let dir = chain.joints[i] - prev_pos;
            chain.joints[i] = prev_pos + set_length(dir, segment_length);
        }
    }

    fn end_gap(chain: &Chain) -> f32 {
        match chain.joints.as_slice() {
            [.., a, b] => a.distance(*b),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-3;

    fn vertical_chain(anchor: Vec2, count: usize, length: f32) -> Chain {
        let joints = (0..count)
            .map(|i| anchor - Vec2::new(0.0, i as f32 * length))
            .collect();
        Chain::from_joints(joints, length)
    }

    #[test]
    fn forward_pass_puts_end_effector_on_target() {
        let mut chain = Chain::builder().segment_count(5).segment_length(20.0).build();
        let target = Vec2::new(37.5, -12.25);

        FabrikSolver::forward_pass(&mut chain, target, 20.0);

        assert_eq!(chain.end_effector(), Some(target));
        for length in chain.segment_lengths() {
            assert!((length - 20.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn base_is_pinned_and_spacing_is_scaled() {
        let mut chain = Chain::builder()
            .segment_count(10)
            .segment_length(50.0)
            .origin(Vec2::new(0.0, 300.0))
            .build();
        let anchor = Vec2::new(400.0, 550.0);
        let target = Vec2::new(250.0, 200.0);
        let stretch = stretch_factor(anchor, target, chain.rest_length());

        let result = FabrikSolver::solve(&mut chain, anchor, target, stretch);

        assert_eq!(chain.base(), Some(anchor));
        assert!((result.segment_length - 50.0 * stretch).abs() < TOLERANCE);
        for length in chain.segment_lengths() {
            assert!((length - result.segment_length).abs() < TOLERANCE);
        }
    }

    #[test]
    fn short_target_collapses_segments() {
        let mut chain = Chain::builder()
            .segment_count(10)
            .segment_length(50.0)
            .origin(Vec2::new(0.0, 300.0))
            .build();
        let anchor = Vec2::new(400.0, 550.0);
        let target = Vec2::new(400.0, 500.0);
        let stretch = stretch_factor(anchor, target, chain.rest_length());
        assert!((stretch - 0.1).abs() < 1e-6);

        FabrikSolver::solve(&mut chain, anchor, target, stretch);

        for length in chain.segment_lengths() {
            assert!((length - 5.0).abs() < TOLERANCE, "segment {length}");
        }
        for joint in chain.joints() {
            assert!(joint.distance(anchor) <= 45.0 + TOLERANCE);
        }
    }

    #[test]
    fn full_reach_target_gives_a_straight_chain() {
        let anchor = Vec2::new(400.0, 550.0);
        let mut chain = vertical_chain(anchor, 10, 50.0);
        let target = Vec2::new(400.0, 50.0);
        let stretch = stretch_factor(anchor, target, chain.rest_length());
        assert!((stretch - 1.0).abs() < 1e-6);

        FabrikSolver::solve(&mut chain, anchor, target, stretch);

        for (i, joint) in chain.joints().iter().enumerate() {
            let expected = anchor - Vec2::new(0.0, i as f32 * 50.0);
            assert!(joint.distance(expected) < TOLERANCE, "joint {i} at {joint:?}");
        }
    }

    #[test]
    fn gap_adjustment_moves_only_the_penultimate_joint() {
        let anchor = Vec2::new(400.0, 550.0);
        let mut chain = vertical_chain(anchor, 10, 50.0);
        let target = Vec2::new(400.0, 450.0);

        // stretch 0.2 leaves the last pair 10 apart
        let result = FabrikSolver::solve(&mut chain, anchor, target, 0.2);
        assert!((result.end_gap - 10.0).abs() < TOLERANCE);
        let last = chain.joints()[9];
        let before = chain.joints()[..8].to_vec();

        assert!(FabrikSolver::adjust_end_gap(&mut chain, 200.0));

        assert_eq!(chain.joints()[9], last);
        assert_eq!(&chain.joints()[..8], before.as_slice());
        assert!((chain.joints()[8].distance(last) - 200.0).abs() < TOLERANCE);
    }

    #[test]
    fn gap_adjustment_keeps_the_pair_direction() {
        let mut chain = Chain::from_joints(vec![Vec2::ZERO, Vec2::new(0.0, -10.0), Vec2::new(0.0, -20.0)], 10.0);

        FabrikSolver::adjust_end_gap(&mut chain, 200.0);

        // the penultimate joint moves away from the last one, on the same side
        assert!((chain.joints()[1] - Vec2::new(0.0, 180.0)).length() < TOLERANCE);
    }

    #[test]
    fn coincident_pair_skips_gap_adjustment() {
        let p = Vec2::new(5.0, 5.0);
        let mut chain = Chain::from_joints(vec![Vec2::ZERO, p, p], 10.0);

        assert!(!FabrikSolver::adjust_end_gap(&mut chain, 100.0));
        assert_eq!(chain.joints(), &[Vec2::ZERO, p, p]);
    }

    #[test]
    fn coincident_joints_stay_finite() {
        let p = Vec2::new(100.0, 100.0);
        let mut chain = Chain::from_joints(vec![p; 6], 20.0);

        let result = FabrikSolver::solve_with_gap(&mut chain, p, p, 0.0, 80.0);

        assert!(chain.joints().iter().all(|j| j.is_finite()));
        assert!(result.end_gap.is_finite());
        assert_eq!(chain.base(), Some(p));
    }

    #[test]
    fn degenerate_directions_fall_back_upward() {
        let p = Vec2::new(10.0, 10.0);
        let mut chain = Chain::from_joints(vec![p; 3], 5.0);

        FabrikSolver::solve(&mut chain, p, p, 1.0);

        assert!(chain.joints().iter().all(|j| j.is_finite()));
        for length in chain.segment_lengths() {
            assert!((length - 5.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn tiny_chains_only_pin_the_base() {
        let mut single = Chain::from_joints(vec![Vec2::new(3.0, 3.0)], 10.0);
        FabrikSolver::solve(&mut single, Vec2::ZERO, Vec2::new(50.0, 0.0), 1.0);
        assert_eq!(single.joints(), &[Vec2::ZERO]);

        let mut empty = Chain::from_joints(Vec::new(), 10.0);
        let result = FabrikSolver::solve_with_gap(&mut empty, Vec2::ZERO, Vec2::ONE, 1.0, 50.0);
        assert!(!result.gap_adjusted);
    }

    #[test]
    fn stretch_factor_handles_zero_rest_length() {
        assert_eq!(stretch_factor(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.0), 0.0);
        assert_eq!(stretch_factor(Vec2::ZERO, Vec2::new(10.0, 0.0), 20.0), 0.5);
    }
}
