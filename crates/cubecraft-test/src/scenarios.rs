//! End-to-end targeting and editing scenarios.

use approx::assert_relative_eq;
use cubecraft_core::control::InputEvent;
use cubecraft_core::coords::BlockPos;
use cubecraft_core::math::inside_block;
use cubecraft_core::types::{Block, BlockKind};
use cubecraft_input::{KeyCode, MouseButton};
use cubecraft_player::{placement_position, CameraPose, Mutation, TargetingEngine};
use cubecraft_world::{World, WorldGenerator};
use glam::Vec3;

use crate::harness::SessionHarness;

#[test]
fn single_block_in_reach_is_targeted() {
    let harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 4.9))
        .looking(0.0, 0.0);

    let hit = harness.expect_target_at(BlockPos::ORIGIN).unwrap();
    assert_relative_eq!(hit.distance, 4.9);
}

#[test]
fn block_exactly_at_reach_is_not_targeted() {
    let harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 5.0))
        .looking(0.0, 0.0);

    assert!(harness.target().is_none());
}

#[test]
fn nearer_block_wins() {
    let harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, -3], [0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 1.5))
        .looking(0.0, 0.0);

    harness.expect_target_at(BlockPos::ORIGIN).unwrap();
}

#[test]
fn removing_last_block_clears_target() {
    let mut harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 4.9))
        .looking(0.0, 0.0);

    let outcome = harness.send(InputEvent::PrimaryAction);
    assert_eq!(
        outcome.mutations,
        vec![Mutation::Removed(Block::new(BlockPos::ORIGIN, BlockKind::Stone))]
    );
    assert!(outcome.target.is_none());
    assert!(harness.session().world().is_empty());
    assert!(harness.target().is_none());
}

#[test]
fn palette_scroll_wraps() {
    let mut harness = SessionHarness::empty().unwrap();

    harness.send(InputEvent::ScrollPalette(1));
    assert_eq!(harness.session().selection().index(), 1);

    harness.send(InputEvent::ScrollPalette(2));
    assert_eq!(harness.session().selection().index(), 3);

    harness.send(InputEvent::ScrollPalette(1));
    assert_eq!(harness.session().selection().index(), 0);
}

#[test]
fn removing_absent_block_leaves_world_unchanged() {
    let mut world = WorldGenerator::default().generate();
    let before = world.clone();

    assert!(!world.remove(&Block::new(BlockPos::new(40, 40, 40), BlockKind::Wood)));
    assert_eq!(world, before);
}

#[test]
fn placement_uses_dominant_look_axis() {
    assert_eq!(
        placement_position(BlockPos::ORIGIN, Vec3::new(0.9, 0.1, 0.2)),
        BlockPos::new(-1, 0, 0)
    );
}

#[test]
fn empty_world_tolerates_every_event() {
    let mut harness = SessionHarness::empty().unwrap();
    for event in [
        InputEvent::PrimaryAction,
        InputEvent::SecondaryAction,
        InputEvent::ScrollPalette(-3),
    ] {
        let outcome = harness.send(event);
        assert!(outcome.mutations.is_empty());
        assert!(outcome.target.is_none());
    }
}

/// Camera poses spread around the generated world.
fn sample_poses() -> Vec<CameraPose> {
    let mut poses = Vec::new();
    for &position in &[
        Vec3::new(0.0, 2.0, 5.0),
        Vec3::new(3.3, 0.4, 2.1),
        Vec3::new(-2.0, 1.0, -2.5),
        Vec3::new(0.2, -0.3, 1.7),
    ] {
        for pitch in [-60.0, -15.0, 0.0, 20.0, 45.0, 80.0] {
            for yaw in [0.0, 37.0, 90.0, 145.0, 180.0, 250.0, 315.0] {
                poses.push(CameraPose::new(position, pitch, yaw));
            }
        }
    }
    poses
}

#[test]
fn targets_are_in_front_within_reach_and_nearest() {
    let world = WorldGenerator::default().generate();
    let engine = TargetingEngine::default();
    let mut hits = 0;

    for pose in sample_poses() {
        let Some(hit) = engine.query(&world, &pose) else {
            continue;
        };
        hits += 1;

        assert!(hit.distance > 0.0, "target behind camera for {pose:?}");
        assert!(
            hit.distance < engine.max_distance(),
            "target out of reach for {pose:?}"
        );
        assert_eq!(world.blocks()[hit.index], hit.block);

        // No other qualifying block is strictly nearer
        let ray = pose.view_ray();
        for block in &world {
            let center = block.position.center();
            let distance = ray.project(center);
            let qualifies = distance > 0.0
                && distance < engine.max_distance()
                && inside_block(ray.at(distance), center);
            assert!(
                !qualifies || distance >= hit.distance,
                "{} at {distance} is nearer than the target for {pose:?}",
                block.position
            );
        }
    }

    assert!(hits > 0, "sample poses never hit anything");
}

#[test]
fn place_then_remove_through_raw_input() {
    let mut harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 3.0))
        .looking(0.0, 0.0);

    // Select wood, then place against the block's near face
    harness
        .input_mut()
        .mouse_mut()
        .process_scroll(cubecraft_input::MouseScrollDelta::LineDelta(0.0, -1.0));
    harness.step_raw();
    assert_eq!(harness.session().selection().kind(), BlockKind::Wood);

    let outcome = harness.click(MouseButton::Right);
    assert_eq!(
        outcome.mutations,
        vec![Mutation::Placed(Block::new(
            BlockPos::new(0, 0, 1),
            BlockKind::Wood
        ))]
    );

    let outcome = harness.click(MouseButton::Left);
    assert_eq!(
        outcome.mutations,
        vec![Mutation::Removed(Block::new(
            BlockPos::new(0, 0, 1),
            BlockKind::Wood
        ))]
    );
    harness.expect_target_at(BlockPos::ORIGIN).unwrap();
}

#[test]
fn scroll_then_click_in_one_frame_places_new_selection() {
    let mut harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 3.0))
        .looking(0.0, 0.0);

    let mouse = harness.input_mut().mouse_mut();
    mouse.process_scroll(cubecraft_input::MouseScrollDelta::LineDelta(0.0, -1.0));
    mouse.press(MouseButton::Right);
    mouse.release(MouseButton::Right);

    let outcome = harness.step_raw();
    assert_eq!(
        outcome.mutations,
        vec![Mutation::Placed(Block::new(
            BlockPos::new(0, 0, 1),
            BlockKind::Wood
        ))]
    );
}

#[test]
fn click_then_scroll_in_one_frame_places_old_selection() {
    let mut harness = SessionHarness::empty()
        .unwrap()
        .with_blocks([[0, 0, 0]])
        .camera_at(Vec3::new(0.0, 0.0, 3.0))
        .looking(0.0, 0.0);

    let mouse = harness.input_mut().mouse_mut();
    mouse.press(MouseButton::Right);
    mouse.release(MouseButton::Right);
    mouse.process_scroll(cubecraft_input::MouseScrollDelta::LineDelta(0.0, -1.0));

    let outcome = harness.step_raw();
    assert_eq!(
        outcome.mutations,
        vec![Mutation::Placed(Block::new(
            BlockPos::new(0, 0, 1),
            BlockKind::Grass
        ))]
    );
    assert_eq!(harness.session().selection().kind(), BlockKind::Wood);
}

#[test]
fn escape_then_quit_through_raw_input() {
    let mut harness = SessionHarness::generated().unwrap();

    assert!(!harness.tap(KeyCode::KeyQ).quit_requested);
    assert!(!harness.tap(KeyCode::Escape).quit_requested);
    assert!(!harness.session().cursor_captured());

    // Clicks are ignored once the cursor is released
    let blocks = harness.session().world().len();
    harness.click(MouseButton::Left);
    assert_eq!(harness.session().world().len(), blocks);

    assert!(harness.tap(KeyCode::KeyQ).quit_requested);
}

#[test]
fn walking_forward_with_held_key() {
    let mut harness = SessionHarness::with_world(Default::default(), World::new())
        .unwrap()
        .camera_at(Vec3::ZERO)
        .looking(0.0, 0.0);

    harness.input_mut().keyboard_mut().press(KeyCode::KeyW);
    for _ in 0..10 {
        harness.step_raw();
    }
    harness.input_mut().keyboard_mut().release(KeyCode::KeyW);
    harness.step_raw();

    // 10 units/s for 10 frames of 0.01 s
    assert_relative_eq!(harness.session().camera().position.z, -1.0, epsilon = 1e-5);
    assert_relative_eq!(harness.session().camera().position.x, 0.0);
}
