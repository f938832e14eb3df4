//! Robot-style test rule for driving a drawer end to end.
//!
//! `DrawerRobot` owns a fully attached [`DrawerHost`] wired to a
//! [`FakeDocument`], a manual clock, and helpers that perform what a user
//! would do: tap the cart icon, swipe the panel, press Escape.
//!
//! # Example
//!
//! ```
//! use swipe_drawer_testing::robot::DrawerRobot;
//! use swipe_drawer_ui::DrawerVisualState;
//!
//! let mut robot = DrawerRobot::new();
//! robot.open_drawer();
//!
//! // A fast short flick closes the drawer.
//! robot.swipe(200.0, 230.0, 50);
//! assert_eq!(robot.state(), DrawerVisualState::Closed);
//! ```

use crate::document::FakeDocument;
use std::rc::Rc;
use swipe_drawer_foundation::{ElementId, SurfaceOffset, TouchEvent};
use swipe_drawer_ui::{
    CartContents, DrawerCollaborators, DrawerConfig, DrawerElements, DrawerHost,
    DrawerVisualState, HostEvent, KeyCode, KeyEventType, SectionsToRender,
};
use web_time::{Duration, Instant};

/// Element ids of the standard drawer page.
pub mod ids {
    use swipe_drawer_foundation::ElementId;

    pub const ROOT: ElementId = ElementId::new(1);
    pub const BODY: ElementId = ElementId::new(2);
    pub const PANEL: ElementId = ElementId::new(3);
    pub const HEADER: ElementId = ElementId::new(4);
    pub const EMPTY_STATE: ElementId = ElementId::new(5);
    pub const CLOSE_BUTTON: ElementId = ElementId::new(6);
    pub const OVERLAY: ElementId = ElementId::new(7);
    pub const CART_ICON: ElementId = ElementId::new(8);
    /// A line item inside the scrollable list.
    pub const ITEM_ROW: ElementId = ElementId::new(9);
    /// Something on the page outside the drawer.
    pub const PAGE_LINK: ElementId = ElementId::new(10);
}

/// The element layout every robot starts with.
pub fn standard_elements() -> DrawerElements {
    DrawerElements::new(ids::ROOT, ids::BODY)
        .with_surface(ids::PANEL)
        .with_drag_handle(ids::HEADER)
        .with_empty_state(ids::EMPTY_STATE)
        .with_close_control(ids::CLOSE_BUTTON)
        .with_overlay(ids::OVERLAY)
        .with_trigger(ids::CART_ICON)
}

pub struct DrawerRobot {
    host: DrawerHost,
    document: Rc<FakeDocument>,
    open_delay: Duration,
    now: Instant,
    /// Touch clock in milliseconds, advanced together with `now`.
    clock_ms: u64,
}

impl Default for DrawerRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerRobot {
    /// A robot with the default config and the standard element layout.
    pub fn new() -> Self {
        Self::with_config(DrawerConfig::default())
    }

    pub fn with_config(config: DrawerConfig) -> Self {
        Self::with_elements(config, standard_elements())
    }

    pub fn with_elements(config: DrawerConfig, elements: DrawerElements) -> Self {
        let document = Rc::new(FakeDocument::new());
        document.add_to_handle_zone(ids::HEADER);
        let collaborators = DrawerCollaborators {
            classes: document.clone(),
            focus_trap: document.clone(),
            surface: document.clone(),
            scroll_region: document.clone(),
            drag_handle: Some(document.clone()),
            listeners: document.clone(),
            sections: document.clone(),
        };
        let open_delay = config.open_delay;
        let mut host =
            DrawerHost::new(config, elements, collaborators).expect("robot config is valid");
        host.attach();

        Self {
            host,
            document,
            open_delay,
            now: Instant::now(),
            clock_ms: 0,
        }
    }

    /// Swaps the section strategy used by `render_contents`.
    pub fn with_sections(mut self, strategy: impl SectionsToRender + 'static) -> Self {
        self.host = self.host.with_sections(strategy);
        self
    }

    pub fn host(&self) -> &DrawerHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut DrawerHost {
        &mut self.host
    }

    pub fn document(&self) -> &FakeDocument {
        &self.document
    }

    pub fn state(&self) -> DrawerVisualState {
        self.host.state()
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Offset currently shown by the drawer panel.
    pub fn offset(&self) -> SurfaceOffset {
        self.document.current_offset()
    }

    /// Advances both clocks and services every deadline that came due.
    pub fn advance_time(&mut self, millis: u64) {
        self.now += Duration::from_millis(millis);
        self.clock_ms += millis;
        while self.host.next_deadline().is_some_and(|at| at <= self.now) {
            if !self.host.tick(self.now) {
                break;
            }
        }
    }

    /// Delivers an event and reports whether a listener received it.
    pub fn dispatch(&mut self, event: HostEvent) -> bool {
        self.host.dispatch(event, self.now)
    }

    pub fn click(&mut self, element: ElementId) -> bool {
        self.dispatch(HostEvent::Click { listener: element })
    }

    pub fn click_cart_icon(&mut self) -> bool {
        self.click(ids::CART_ICON)
    }

    pub fn click_overlay(&mut self) -> bool {
        self.click(ids::OVERLAY)
    }

    pub fn key(&mut self, element: ElementId, kind: KeyEventType, code: KeyCode) -> bool {
        self.dispatch(HostEvent::Key {
            listener: element,
            kind,
            code,
        })
    }

    pub fn press_space_on_cart_icon(&mut self) -> bool {
        self.key(ids::CART_ICON, KeyEventType::KeyDown, KeyCode::Space)
    }

    pub fn press_escape(&mut self) -> bool {
        self.key(ids::ROOT, KeyEventType::KeyUp, KeyCode::Escape)
    }

    /// Reports the end of the drawer's CSS transition.
    pub fn finish_transition(&mut self) -> bool {
        self.dispatch(HostEvent::TransitionEnd {
            listener: ids::ROOT,
        })
    }

    /// Taps the cart icon and lets the opening transition complete.
    pub fn open_drawer(&mut self) -> DrawerVisualState {
        self.click_cart_icon();
        self.advance_time(self.open_delay.as_millis() as u64);
        self.finish_transition();
        self.state()
    }

    fn touch(&mut self, touch: TouchEvent) -> bool {
        self.dispatch(HostEvent::Touch {
            listener: ids::PANEL,
            touch,
        })
    }

    pub fn touch_start(&mut self, y: f32) -> bool {
        self.touch_start_on(y, ids::ITEM_ROW)
    }

    pub fn touch_start_on(&mut self, y: f32, target: ElementId) -> bool {
        self.touch(TouchEvent::start(y, self.clock_ms).with_target(target))
    }

    pub fn touch_move(&mut self, y: f32) -> bool {
        self.touch(TouchEvent::moved(y, self.clock_ms))
    }

    pub fn touch_end(&mut self, y: f32) -> bool {
        self.touch(TouchEvent::end(y, self.clock_ms))
    }

    pub fn touch_cancel(&mut self) -> bool {
        self.touch(TouchEvent::cancel(self.clock_ms))
    }

    /// Performs a straight swipe from `from_y` to `to_y` over `duration_ms`,
    /// moving in ten steps and releasing at the final position.
    pub fn swipe(&mut self, from_y: f32, to_y: f32, duration_ms: u64) {
        self.swipe_on(from_y, to_y, duration_ms, ids::ITEM_ROW);
    }

    pub fn swipe_on(&mut self, from_y: f32, to_y: f32, duration_ms: u64, target: ElementId) {
        const STEPS: u64 = 10;
        self.touch_start_on(from_y, target);

        let mut elapsed = 0;
        for i in 1..=STEPS {
            let step_end = duration_ms * i / STEPS;
            self.advance_time(step_end - elapsed);
            elapsed = step_end;
            let t = i as f32 / STEPS as f32;
            self.touch_move(from_y + (to_y - from_y) * t);
        }
        self.touch_end(to_y);
    }

    /// Applies a cart update as the section renderer would receive it.
    pub fn render_contents(&mut self, contents: &CartContents) -> usize {
        let now = self.now;
        self.host.render_contents(contents, now)
    }
}
