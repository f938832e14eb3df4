//! Assertion utilities for robot testing
//!
//! Helpers that validate drawer state with messages that say which step of
//! a scripted interaction went wrong.

use crate::robot::DrawerRobot;
use swipe_drawer_foundation::{SurfaceOffset, Transition};
use swipe_drawer_ui::{DrawerClass, DrawerVisualState};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the drawer is in the given visual state.
pub fn assert_drawer_state(robot: &DrawerRobot, expected: DrawerVisualState, msg: &str) {
    assert_eq!(
        robot.state(),
        expected,
        "{}: drawer in {:?}, expected {:?}",
        msg,
        robot.state(),
        expected
    );
}

/// Assert the panel sits at rest with its normal eased transition.
pub fn assert_panel_at_rest(robot: &DrawerRobot, msg: &str) {
    let offset = robot.offset();
    assert!(
        offset == SurfaceOffset::REST,
        "{}: panel not at rest, showing {:?}",
        msg,
        offset
    );
}

/// Assert the panel is mid-drag at roughly `expected` px with easing off.
pub fn assert_panel_dragged(robot: &DrawerRobot, expected: f32, msg: &str) {
    let offset = robot.offset();
    assert_eq!(
        offset.transition,
        Transition::Suppressed,
        "{}: panel transition should be suppressed while dragging",
        msg
    );
    assert_approx_eq(offset.translate_y, expected, 0.01, msg);
}

/// Assert the panel never moved during the interaction.
pub fn assert_panel_never_moved(robot: &DrawerRobot, msg: &str) {
    let max = robot.document().max_translation();
    assert!(max == 0.0, "{}: panel moved by up to {}px", msg, max);
}

/// Assert the drawer root's `active` class matches `expected`.
pub fn assert_drawer_active_class(robot: &DrawerRobot, expected: bool, msg: &str) {
    let root = robot.host().elements().root;
    assert_eq!(
        robot.document().has_class(root, DrawerClass::Active),
        expected,
        "{}: `active` class presence",
        msg
    );
}
