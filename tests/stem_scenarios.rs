use glam::Vec2;
use ik_bloom::{
    stretch_factor, Chain, Config, FabrikSolver, FixedPointer, FrameLoop, MotionController,
    MotionParams, PointerState, Scene, Simulation, TouchPhase,
};

const TOLERANCE: f32 = 1e-3;

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < TOLERANCE, "{a} != {b}");
}

#[test]
fn target_one_segment_away_shrinks_every_segment_to_five() {
    let anchor = Vec2::new(400.0, 550.0);
    let target = Vec2::new(400.0, 500.0);
    let mut chain = Chain::builder()
        .segment_count(10)
        .segment_length(50.0)
        .origin(Vec2::new(0.0, 300.0))
        .build();

    let stretch = stretch_factor(anchor, target, chain.rest_length());
    let result = FabrikSolver::solve(&mut chain, anchor, target, stretch);

    assert_close(result.segment_length, 5.0);
    assert_eq!(chain.base(), Some(anchor));
    for length in chain.segment_lengths() {
        assert_close(length, 5.0);
    }
}

#[test]
fn gap_of_two_hundred_is_reached_without_moving_the_tip() {
    let anchor = Vec2::new(400.0, 550.0);
    let joints = (0..10).map(|i| anchor - Vec2::new(0.0, i as f32 * 10.0)).collect();
    let mut chain = Chain::from_joints(joints, 50.0);

    let result = FabrikSolver::solve_with_gap(&mut chain, anchor, Vec2::new(400.0, 460.0), 0.2, 200.0);
    let joints = chain.joints();

    assert!(result.gap_adjusted);
    assert_close(result.end_gap, 200.0);
    assert_close(joints[8].distance(joints[9]), 200.0);
    assert_eq!(joints[0], anchor);
}

#[test]
fn many_ticks_keep_every_invariant() {
    let mut sim = Simulation::new(Config::default(), Vec2::new(800.0, 600.0)).unwrap();
    sim.set_gap(150.0);

    let path = [
        Vec2::new(100.0, 80.0),
        Vec2::new(700.0, 120.0),
        Vec2::new(400.0, 560.0),
        Vec2::new(-200.0, 900.0),
        Vec2::new(400.0, 550.0),
    ];

    for &pointer in path.iter().cycle().take(500) {
        let frame = sim.tick(pointer);

        assert_eq!(frame.joints[0], frame.anchor);
        assert!(frame.joints.iter().all(|j| j.is_finite()));
        assert!(frame.sun.x >= 0.0 && frame.sun.x <= 800.0);
        assert!(frame.sun.y >= 0.0 && frame.sun.y <= 600.0);

        if frame.solve.gap_adjusted {
            assert!((frame.solve.end_gap - 150.0).abs() < 1e-2);
        }
        let n = frame.joints.len();
        for pair in frame.joints[..n - 2].windows(2) {
            assert!((pair[0].distance(pair[1]) - frame.solve.segment_length).abs() < 1e-2);
        }
    }
}

#[test]
fn sun_settles_on_a_still_pointer() {
    let mut controller = MotionController::new(MotionParams::default(), Vec2::new(450.0, 300.0));
    let target = Vec2::new(120.0, 80.0);

    for _ in 0..300 {
        controller.step(target);
    }

    assert!(controller.is_settled(target, 1e-2));
}

#[test]
fn frame_loop_follows_touch_then_mouse() {
    let sim = Simulation::new(Config::default(), Vec2::new(800.0, 600.0)).unwrap();
    let mut frames = FrameLoop::new(sim, PointerState::new(Vec2::ZERO));
    frames.start();

    frames.input_mut().on_mouse_move(Vec2::new(700.0, 500.0));
    frames.input_mut().on_touch(1, TouchPhase::Started, Vec2::new(100.0, 100.0));
    let frame = (0..201).filter_map(|_| frames.advance()).last().unwrap();
    assert!(frame.sun.distance(Vec2::new(100.0, 100.0)) < 0.1);

    frames.input_mut().on_touch(1, TouchPhase::Ended, Vec2::new(100.0, 100.0));
    let frame = (0..200).filter_map(|_| frames.advance()).last().unwrap();
    assert!(frame.sun.distance(Vec2::new(700.0, 500.0)) < 0.1);
    assert_eq!(frames.frame_count(), 401);
}

#[test]
fn every_frame_builds_a_drawable_scene() {
    let sim = Simulation::new(Config::default(), Vec2::new(800.0, 600.0)).unwrap();
    let mut frames = FrameLoop::new(sim, FixedPointer(Vec2::new(400.0, 590.0)));
    frames.start();

    for _ in 0..60 {
        let frame = frames.advance().unwrap();
        let shapes = Scene::build(&frame);
        // sky + 4 leaves + 9 stem lines + 8 petals + head and centre + sun
        assert!(shapes.len() >= 1 + 4 + 9 + 8 + 2 + 2);
    }
}
