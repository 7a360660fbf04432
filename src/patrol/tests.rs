//! Patrol domain: unit tests for waypoint cycling.

use bevy::math::Vec2;

use super::{CycleMode, PathFollower};

fn path(cycle_mode: CycleMode) -> PathFollower {
    let waypoints =
        vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)];
    PathFollower::new(waypoints, 5.0, cycle_mode)
}

#[test]
fn test_none_path_finishes_at_last_waypoint() {
    let mut follower = path(CycleMode::None);

    follower.advance();
    follower.advance();
    assert_eq!(follower.current, 2);
    assert!(!follower.done);

    follower.advance();
    assert!(follower.done);
}

#[test]
fn test_loop_path_wraps_around() {
    let mut follower = path(CycleMode::Loop);

    follower.advance();
    follower.advance();
    follower.advance();
    assert_eq!(follower.current, 0);
    assert!(!follower.done);
}

#[test]
fn test_ping_pong_reverses_at_both_ends() {
    let mut follower = path(CycleMode::PingPong);

    follower.advance();
    follower.advance();
    assert_eq!(follower.current, 2);

    // Turn around at the far end...
    follower.advance();
    assert!(follower.reverse);
    assert_eq!(follower.current, 1);

    follower.advance();
    assert_eq!(follower.current, 0);

    // ...and again at the start.
    follower.advance();
    assert!(!follower.reverse);
    assert_eq!(follower.current, 1);
}

#[test]
fn test_reversed_start_walks_backwards() {
    let mut follower = path(CycleMode::Loop).with_reverse();
    assert_eq!(follower.current, 2);

    follower.advance();
    assert_eq!(follower.current, 1);
    follower.advance();
    follower.advance();
    assert_eq!(follower.current, 2, "reverse loop wraps from start to end");
}

#[test]
fn test_stop_points_and_dwell_reset() {
    let mut follower =
        path(CycleMode::None).with_dwell(1.0, vec![false, true, false]);

    assert!(!follower.is_stop_point());
    follower.advance();
    assert!(follower.is_stop_point());

    follower.dwell_elapsed = 0.7;
    follower.advance();
    assert_eq!(follower.dwell_elapsed, 0.0, "advancing resets the dwell clock");
    assert!(!follower.is_stop_point());
}

#[test]
fn test_empty_path_is_immediately_done() {
    let follower = PathFollower::new(Vec::new(), 5.0, CycleMode::Loop);
    assert!(follower.done);
    assert_eq!(follower.current_waypoint(), None);
}
