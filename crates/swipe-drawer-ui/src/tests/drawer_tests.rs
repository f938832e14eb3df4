use super::*;
use std::cell::RefCell;
use std::collections::HashSet;
use swipe_drawer_foundation::FocusTrapManager;

const ROOT: ElementId = ElementId::new(1);
const BODY: ElementId = ElementId::new(2);
const INNER: ElementId = ElementId::new(3);
const EMPTY: ElementId = ElementId::new(4);
const CLOSE: ElementId = ElementId::new(5);
const ICON: ElementId = ElementId::new(6);

// Mock class list backed by a set
#[derive(Default)]
struct MockClasses {
    set: RefCell<HashSet<(ElementId, DrawerClass)>>,
}

impl ClassList for MockClasses {
    fn add(&self, element: ElementId, class: DrawerClass) {
        self.set.borrow_mut().insert((element, class));
    }

    fn remove(&self, element: ElementId, class: DrawerClass) {
        self.set.borrow_mut().remove(&(element, class));
    }

    fn contains(&self, element: ElementId, class: DrawerClass) -> bool {
        self.set.borrow().contains(&(element, class))
    }
}

struct Fixture {
    classes: Rc<MockClasses>,
    focus: Rc<RefCell<FocusTrapManager>>,
    drawer: DrawerVisibilityController,
    now: Instant,
}

fn fixture_with(elements: DrawerElements) -> Fixture {
    let classes = Rc::new(MockClasses::default());
    let focus = Rc::new(RefCell::new(FocusTrapManager::new()));
    let drawer = DrawerVisibilityController::new(
        elements,
        classes.clone(),
        focus.clone(),
        Duration::from_millis(50),
    );
    Fixture {
        classes,
        focus,
        drawer,
        now: Instant::now(),
    }
}

fn fixture() -> Fixture {
    fixture_with(
        DrawerElements::new(ROOT, BODY)
            .with_surface(INNER)
            .with_empty_state(EMPTY)
            .with_close_control(CLOSE)
            .with_trigger(ICON),
    )
}

impl Fixture {
    fn advance(&mut self, millis: u64) -> bool {
        self.now += Duration::from_millis(millis);
        self.drawer.tick(self.now)
    }

    fn has(&self, element: ElementId, class: DrawerClass) -> bool {
        self.classes.contains(element, class)
    }

    fn open_fully(&mut self) {
        self.drawer.open(Some(ICON), self.now);
        self.advance(50);
        assert!(self.drawer.on_transition_end());
    }
}

#[test]
fn starts_closed() {
    let f = fixture();
    assert_eq!(f.drawer.state(), DrawerVisualState::Closed);
    assert_eq!(f.drawer.next_deadline(), None);
}

#[test]
fn open_locks_scroll_then_applies_classes_after_delay() {
    let mut f = fixture();
    f.drawer.open(Some(ICON), f.now);

    assert_eq!(f.drawer.state(), DrawerVisualState::Opening);
    assert!(f.has(BODY, DrawerClass::OverflowHidden));
    assert!(!f.has(ROOT, DrawerClass::Active));
    assert_eq!(f.drawer.next_deadline(), Some(f.now + Duration::from_millis(50)));

    assert!(!f.advance(49));
    assert!(!f.has(ROOT, DrawerClass::Active));

    assert!(f.advance(1));
    assert!(f.has(ROOT, DrawerClass::Animate));
    assert!(f.has(ROOT, DrawerClass::Active));
    assert_eq!(f.drawer.state(), DrawerVisualState::Opening);
}

#[test]
fn transition_end_opens_and_traps_focus_on_panel() {
    let mut f = fixture();
    f.open_fully();

    assert_eq!(f.drawer.state(), DrawerVisualState::Open);
    let focus = f.focus.borrow();
    assert_eq!(focus.trapped_container(), Some(ROOT));
    assert!(focus.is_focused(INNER));
}

#[test]
fn empty_drawer_traps_focus_in_empty_state() {
    let mut f = fixture();
    f.classes.add(ROOT, DrawerClass::IsEmpty);
    f.open_fully();
    assert_eq!(f.focus.borrow().trapped_container(), Some(EMPTY));
}

#[test]
fn focus_falls_back_to_close_control_without_panel() {
    let mut f = fixture_with(DrawerElements::new(ROOT, BODY).with_close_control(CLOSE));
    f.open_fully();
    assert!(f.focus.borrow().is_focused(CLOSE));
}

#[test]
fn transition_end_before_activation_is_ignored() {
    let mut f = fixture();
    f.drawer.open(None, f.now);
    assert!(!f.drawer.on_transition_end());
    assert_eq!(f.drawer.state(), DrawerVisualState::Opening);
    assert!(!f.focus.borrow().is_trapped());
}

#[test]
fn transition_end_is_one_shot() {
    let mut f = fixture();
    f.open_fully();
    assert!(!f.drawer.on_transition_end());
}

#[test]
fn close_releases_everything_and_restores_trigger_focus() {
    let mut f = fixture();
    f.open_fully();

    assert!(f.drawer.close());
    assert_eq!(f.drawer.state(), DrawerVisualState::Closed);
    assert!(!f.has(ROOT, DrawerClass::Active));
    assert!(!f.has(BODY, DrawerClass::OverflowHidden));
    let focus = f.focus.borrow();
    assert!(!focus.is_trapped());
    assert!(focus.is_focused(ICON));
}

#[test]
fn close_is_idempotent() {
    let mut f = fixture();
    f.open_fully();
    f.drawer.close();
    let after_once: HashSet<_> = f.classes.set.borrow().clone();
    let focus_once = f.focus.borrow().active_focus();

    assert!(!f.drawer.close());
    assert_eq!(*f.classes.set.borrow(), after_once);
    assert_eq!(f.focus.borrow().active_focus(), focus_once);
    assert_eq!(f.drawer.state(), DrawerVisualState::Closed);
}

#[test]
fn close_while_opening_interrupts_focus_transfer() {
    let mut f = fixture();
    f.drawer.open(Some(ICON), f.now);
    f.advance(50);
    f.drawer.close();

    assert!(!f.drawer.on_transition_end());
    assert!(!f.focus.borrow().is_trapped());
    assert_eq!(f.drawer.state(), DrawerVisualState::Closed);
}

#[test]
fn close_before_activation_cancels_pending_classes() {
    let mut f = fixture();
    f.drawer.open(None, f.now);
    f.drawer.close();

    assert!(!f.advance(100));
    assert!(!f.has(ROOT, DrawerClass::Active));
    assert_eq!(f.drawer.next_deadline(), None);
}

#[test]
fn reentrant_open_does_not_rearm() {
    let mut f = fixture();
    f.drawer.open(None, f.now);
    let first = f.drawer.next_deadline();

    f.now += Duration::from_millis(30);
    f.drawer.open(Some(ICON), f.now);
    assert_eq!(f.drawer.next_deadline(), first);
    assert_eq!(f.drawer.trigger(), Some(ICON));

    f.advance(20);
    assert!(f.drawer.on_transition_end());
    f.drawer.open(None, f.now);
    assert_eq!(f.drawer.state(), DrawerVisualState::Open);
    assert_eq!(f.drawer.trigger(), Some(ICON));
}

#[test]
fn drawer_cycles_open_and_closed() {
    let mut f = fixture();
    for _ in 0..3 {
        f.open_fully();
        assert!(f.drawer.close());
    }
    assert_eq!(f.drawer.state(), DrawerVisualState::Closed);
}
