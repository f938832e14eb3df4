//! Drawer open/close lifecycle through the host: triggers, overlay, keys,
//! listener registration, and cart re-rendering.

use swipe_drawer_testing::prelude::*;
use swipe_drawer_ui::{
    CartContents, ClassList, DrawerClass, DrawerItemsSections, DrawerVisualState, EventKind,
    HostEvent, KeyCode, KeyEventType, ListenerOptions,
};

#[test]
fn attach_registers_passive_touch_listeners_once() {
    let mut robot = DrawerRobot::new();
    let installed = robot.document().listener_count();

    for kind in [
        EventKind::TouchStart,
        EventKind::TouchMove,
        EventKind::TouchEnd,
        EventKind::TouchCancel,
    ] {
        assert_eq!(
            robot.document().listener(ids::PANEL, kind),
            Some(ListenerOptions::PASSIVE),
            "{} on panel",
            kind.as_str()
        );
    }
    assert!(robot
        .document()
        .listener(ids::CART_ICON, EventKind::Click)
        .is_some());
    assert!(robot
        .document()
        .listener(ids::OVERLAY, EventKind::Click)
        .is_some());

    // The fake document asserts if a listener is installed twice.
    robot.host_mut().attach();
    assert_eq!(robot.document().listener_count(), installed);
}

#[test]
fn detach_drops_listeners_and_events() {
    let mut robot = DrawerRobot::new();
    robot.host_mut().detach();

    assert_eq!(robot.document().listener_count(), 0);
    assert!(!robot.click_cart_icon());
    assert_drawer_state(&robot, DrawerVisualState::Closed, "after detach");
}

#[test]
fn detach_mid_drag_returns_panel_to_rest() {
    let mut robot = DrawerRobot::new();
    robot.open_drawer();
    robot.touch_start(100.0);
    robot.advance_time(10);
    robot.touch_move(150.0);

    robot.host_mut().detach();

    assert_panel_at_rest(&robot, "detached mid-drag");
    assert!(!robot.host().recognizer().is_active());
}

#[test]
fn cart_icon_click_walks_through_opening_states() {
    let mut robot = DrawerRobot::new();
    assert!(robot.click_cart_icon());

    assert_drawer_state(&robot, DrawerVisualState::Opening, "just clicked");
    assert!(robot.document().has_class(ids::BODY, DrawerClass::OverflowHidden));
    assert_drawer_active_class(&robot, false, "before open delay");

    robot.advance_time(49);
    assert_drawer_active_class(&robot, false, "1ms before open delay");
    robot.advance_time(1);
    assert_drawer_active_class(&robot, true, "after open delay");
    assert!(robot.document().has_class(ids::ROOT, DrawerClass::Animate));
    assert_eq!(robot.document().trap_acquires(), 0);

    robot.finish_transition();
    assert_drawer_state(&robot, DrawerVisualState::Open, "after transition");
    assert_eq!(robot.document().trapped_container(), Some(ids::ROOT));
    assert_eq!(robot.document().focused(), Some(ids::PANEL));
}

#[test]
fn space_on_cart_icon_opens() {
    let mut robot = DrawerRobot::new();
    robot.press_space_on_cart_icon();
    assert_drawer_state(&robot, DrawerVisualState::Opening, "space pressed");

    let mut other = DrawerRobot::new();
    other.key(ids::CART_ICON, KeyEventType::KeyDown, KeyCode::Enter);
    assert_drawer_state(&other, DrawerVisualState::Closed, "enter ignored");
}

#[test]
fn overlay_click_and_escape_close() {
    let mut robot = DrawerRobot::new();
    robot.open_drawer();
    assert!(robot.click_overlay());
    assert_drawer_state(&robot, DrawerVisualState::Closed, "overlay click");
    assert!(!robot.document().has_class(ids::BODY, DrawerClass::OverflowHidden));

    robot.open_drawer();
    robot.press_escape();
    assert_drawer_state(&robot, DrawerVisualState::Closed, "escape");
}

#[test]
fn escape_key_down_does_not_close() {
    let mut robot = DrawerRobot::new();
    robot.open_drawer();
    robot.key(ids::ROOT, KeyEventType::KeyDown, KeyCode::Escape);
    assert_drawer_state(&robot, DrawerVisualState::Open, "escape key down");
}

#[test]
fn unregistered_element_events_are_dropped() {
    let mut robot = DrawerRobot::new();
    assert!(!robot.click(ids::PAGE_LINK));
    assert!(!robot.dispatch(HostEvent::TransitionEnd {
        listener: ids::PANEL
    }));
}

#[test]
fn close_twice_matches_close_once() {
    let mut robot = DrawerRobot::new();
    robot.open_drawer();

    assert!(robot.host_mut().close());
    let focused = robot.document().focused();
    let releases = robot.document().trap_releases();

    assert!(!robot.host_mut().close());
    assert_drawer_state(&robot, DrawerVisualState::Closed, "second close");
    assert_eq!(robot.document().focused(), focused);
    assert_eq!(robot.document().trap_releases(), releases);
}

#[test]
fn close_during_open_delay_skips_focus_trap() {
    let mut robot = DrawerRobot::new();
    robot.click_cart_icon();
    robot.advance_time(20);
    robot.click_overlay();
    robot.advance_time(100);
    robot.finish_transition();

    assert_drawer_state(&robot, DrawerVisualState::Closed, "closed while opening");
    assert_drawer_active_class(&robot, false, "closed while opening");
    assert_eq!(robot.document().trap_acquires(), 0);
    assert_eq!(robot.document().trap_releases(), 1);
}

#[test]
fn each_cycle_acquires_and_releases_once() {
    let mut robot = DrawerRobot::new();
    for cycle in 1..=3 {
        robot.open_drawer();
        robot.click_overlay();
        assert_eq!(robot.document().trap_acquires(), cycle);
        assert_eq!(robot.document().trap_releases(), cycle);
    }
}

#[test]
fn empty_drawer_traps_focus_in_empty_state() {
    let mut robot = DrawerRobot::new();
    robot.document().add(ids::ROOT, DrawerClass::IsEmpty);
    robot.open_drawer();
    assert_eq!(robot.document().trapped_container(), Some(ids::EMPTY_STATE));
}

#[test]
fn render_contents_replaces_sections_and_reopens() {
    let mut robot = DrawerRobot::new();
    robot.document().add_section_target("cart-drawer");
    robot.document().add(ids::ROOT, DrawerClass::IsEmpty);

    let contents = CartContents {
        product_id: Some(4021),
        ..CartContents::default()
    }
    .with_section("cart-drawer", "<div>1 item</div>")
    .with_section("cart-icon-bubble", "<span>1</span>");

    let replaced = robot.render_contents(&contents);

    assert_eq!(replaced, 1);
    assert_eq!(
        robot.document().section_markup("cart-drawer").as_deref(),
        Some("<div>1 item</div>")
    );
    assert_eq!(robot.host().product_id(), Some(4021));
    assert!(!robot.document().has_class(ids::ROOT, DrawerClass::IsEmpty));
    assert_drawer_state(&robot, DrawerVisualState::Closed, "before reopen delay");

    robot.advance_time(100);
    assert_drawer_state(&robot, DrawerVisualState::Opening, "after reopen delay");
    robot.advance_time(50);
    robot.finish_transition();
    assert_drawer_state(&robot, DrawerVisualState::Open, "reopened");
    assert_eq!(robot.document().trapped_container(), Some(ids::ROOT));
}

#[test]
fn drawer_items_strategy_targets_inner_panel() {
    let mut robot = DrawerRobot::new().with_sections(DrawerItemsSections);
    robot.document().add_section_target("CartDrawer");
    let contents = CartContents::default().with_section("cart-drawer", "<div>inner</div>");

    assert_eq!(robot.render_contents(&contents), 1);
    assert_eq!(
        robot.document().section_markup("CartDrawer").as_deref(),
        Some("<div>inner</div>")
    );
}

#[test]
fn reopen_while_open_keeps_drawer_open() {
    let mut robot = DrawerRobot::new();
    robot.open_drawer();
    robot.render_contents(&CartContents::default());
    robot.advance_time(200);
    assert_drawer_state(&robot, DrawerVisualState::Open, "reopen while open");
    assert_eq!(robot.document().trap_acquires(), 1);
}
