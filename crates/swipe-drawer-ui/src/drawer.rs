//! Drawer visibility state machine.
//!
//! ```text
//! closed  --open()--> opening --(transition end)--> open
//! open    --close()--> closed
//! opening --close()--> closed   (interrupts pending focus transfer)
//! ```
//!
//! Opening is split across two deferred steps. The open classes are applied
//! one short delay after `open()` so the closed layout is committed first and
//! the slide animates instead of snapping. Focus moves into the drawer only
//! once the opening transition reports completion.

use crate::classes::{ClassList, DrawerClass};
use crate::deadline::Deadline;
use crate::transition::TransitionSignal;
use smallvec::SmallVec;
use std::rc::Rc;
use swipe_drawer_foundation::{ElementId, FocusTrap};
use web_time::{Duration, Instant};

/// Visual state of the drawer. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerVisualState {
    #[default]
    Closed,
    Opening,
    Open,
}

/// Elements the drawer touches, injected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerElements {
    /// The drawer element itself; carries the `animate`/`active` classes.
    pub root: ElementId,
    /// Page body; carries the scroll lock.
    pub body: ElementId,
    /// Inner panel that slides and receives touches. Swipe-to-close is
    /// disabled without it.
    pub surface: Option<ElementId>,
    /// Header zone that can always start a drag.
    pub drag_handle: Option<ElementId>,
    /// Focus container used when the drawer is empty.
    pub empty_state: Option<ElementId>,
    pub close_control: Option<ElementId>,
    /// Backdrop; a click on it closes the drawer.
    pub overlay: Option<ElementId>,
    /// Buttons that open the drawer (the header cart icon).
    pub triggers: SmallVec<[ElementId; 2]>,
}

impl DrawerElements {
    pub fn new(root: ElementId, body: ElementId) -> Self {
        Self {
            root,
            body,
            surface: None,
            drag_handle: None,
            empty_state: None,
            close_control: None,
            overlay: None,
            triggers: SmallVec::new(),
        }
    }

    pub fn with_surface(mut self, surface: ElementId) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_drag_handle(mut self, handle: ElementId) -> Self {
        self.drag_handle = Some(handle);
        self
    }

    pub fn with_empty_state(mut self, container: ElementId) -> Self {
        self.empty_state = Some(container);
        self
    }

    pub fn with_close_control(mut self, control: ElementId) -> Self {
        self.close_control = Some(control);
        self
    }

    pub fn with_overlay(mut self, overlay: ElementId) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn with_trigger(mut self, trigger: ElementId) -> Self {
        if !self.triggers.contains(&trigger) {
            self.triggers.push(trigger);
        }
        self
    }

    pub fn is_trigger(&self, element: ElementId) -> bool {
        self.triggers.contains(&element)
    }
}

/// Single source of truth for drawer visibility and its side effects.
pub struct DrawerVisibilityController {
    elements: DrawerElements,
    classes: Rc<dyn ClassList>,
    focus_trap: Rc<dyn FocusTrap>,
    open_delay: Duration,
    state: DrawerVisualState,
    /// Element that last opened the drawer; focus returns here on close.
    trigger: Option<ElementId>,
    activation: Deadline,
    transition: TransitionSignal,
}

impl DrawerVisibilityController {
    pub fn new(
        elements: DrawerElements,
        classes: Rc<dyn ClassList>,
        focus_trap: Rc<dyn FocusTrap>,
        open_delay: Duration,
    ) -> Self {
        Self {
            elements,
            classes,
            focus_trap,
            open_delay,
            state: DrawerVisualState::Closed,
            trigger: None,
            activation: Deadline::new(),
            transition: TransitionSignal::new(),
        }
    }

    pub fn state(&self) -> DrawerVisualState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == DrawerVisualState::Closed
    }

    pub fn elements(&self) -> &DrawerElements {
        &self.elements
    }

    pub fn trigger(&self) -> Option<ElementId> {
        self.trigger
    }

    /// Starts opening the drawer.
    ///
    /// `trigger` is remembered for focus restoration; passing `None` keeps
    /// the previously recorded trigger. Calling this while the drawer is
    /// already opening or open only updates the trigger.
    pub fn open(&mut self, trigger: Option<ElementId>, now: Instant) {
        if let Some(trigger) = trigger {
            self.trigger = Some(trigger);
        }

        if self.state != DrawerVisualState::Closed {
            log::debug!("drawer: open() while {:?}, ignoring", self.state);
            return;
        }

        self.state = DrawerVisualState::Opening;
        self.activation.arm_after(now, self.open_delay);
        self.classes
            .add(self.elements.body, DrawerClass::OverflowHidden);
        log::debug!("drawer: opening (trigger {:?})", self.trigger);
    }

    /// Hides the drawer. Idempotent.
    pub fn close(&mut self) -> bool {
        if self.state == DrawerVisualState::Closed {
            log::trace!("drawer: close() while closed");
            return false;
        }

        let was = self.state;
        self.state = DrawerVisualState::Closed;
        self.activation.disarm();
        self.transition.disarm();
        self.classes.remove(self.elements.root, DrawerClass::Active);
        self.focus_trap.release(self.trigger);
        self.classes
            .remove(self.elements.body, DrawerClass::OverflowHidden);
        log::debug!("drawer: closed from {was:?}");
        true
    }

    /// Services the deferred activation. Returns `true` if the open classes
    /// were applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.activation.fire_if_due(now) {
            return false;
        }
        if self.state != DrawerVisualState::Opening {
            return false;
        }

        self.classes.add(self.elements.root, DrawerClass::Animate);
        self.classes.add(self.elements.root, DrawerClass::Active);
        self.transition.arm();
        log::trace!("drawer: open classes applied, awaiting transition end");
        true
    }

    /// Next time `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.activation.deadline()
    }

    /// Handles completion of the drawer's opening transition. Returns `true`
    /// if this completed the open.
    pub fn on_transition_end(&mut self) -> bool {
        if self.state != DrawerVisualState::Opening || !self.transition.fire() {
            log::trace!("drawer: transition end ignored in {:?}", self.state);
            return false;
        }

        self.state = DrawerVisualState::Open;
        let container = if self.classes.contains(self.elements.root, DrawerClass::IsEmpty) {
            self.elements.empty_state.unwrap_or(self.elements.root)
        } else {
            self.elements.root
        };
        let initial_focus = self.elements.surface.or(self.elements.close_control);
        self.focus_trap.acquire(container, initial_focus);
        log::debug!("drawer: open, focus trapped in {container}");
        true
    }
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
