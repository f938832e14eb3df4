//! Drawer host: wires platform events to the swipe recogniser and the
//! visibility controller.
//!
//! The host owns both halves and is the only place that connects them: a
//! committed swipe becomes a `close()` here, so the recogniser never needs to
//! know anything about the drawer beyond the surface it translates.

use crate::classes::{ClassList, DrawerClass};
use crate::config::{ConfigError, DrawerConfig};
use crate::deadline::{earliest, Deadline};
use crate::drawer::{DrawerElements, DrawerVisibilityController, DrawerVisualState};
use crate::events::{EventKind, HostEvent, KeyCode, KeyEventType};
use crate::listeners::{ListenerKey, ListenerOptions, ListenerRegistry, ListenerSink};
use crate::sections::{
    render_sections, CartContents, DrawerSections, SectionRenderer, SectionsToRender,
};
use std::rc::Rc;
use swipe_drawer_foundation::{
    DragHandleZone, DragSurface, ElementId, FocusTrap, GestureResolution, ScrollableRegionLookup,
    SwipeToDismissRecognizer,
};
use web_time::{Duration, Instant};

/// Platform collaborators the drawer drives.
#[derive(Clone)]
pub struct DrawerCollaborators {
    pub classes: Rc<dyn ClassList>,
    pub focus_trap: Rc<dyn FocusTrap>,
    pub surface: Rc<dyn DragSurface>,
    pub scroll_region: Rc<dyn ScrollableRegionLookup>,
    /// Hit test for the drag handle. Without one, only touches whose target
    /// is exactly `DrawerElements::drag_handle` count as on the handle.
    pub drag_handle: Option<Rc<dyn DragHandleZone>>,
    pub listeners: Rc<dyn ListenerSink>,
    pub sections: Rc<dyn SectionRenderer>,
}

/// Drag handle zone matching a single element.
struct ElementZone(ElementId);

impl DragHandleZone for ElementZone {
    fn contains(&self, target: ElementId) -> bool {
        target == self.0
    }
}

pub struct DrawerHost {
    controller: DrawerVisibilityController,
    recognizer: SwipeToDismissRecognizer,
    listeners: ListenerRegistry,
    classes: Rc<dyn ClassList>,
    section_strategy: Box<dyn SectionsToRender>,
    section_renderer: Rc<dyn SectionRenderer>,
    reopen: Deadline,
    reopen_delay: Duration,
    /// Fires when an active gesture has gone quiet for the stale timeout.
    stale_gesture: Deadline,
    stale_gesture_timeout: Option<Duration>,
    product_id: Option<u64>,
}

impl DrawerHost {
    pub fn new(
        config: DrawerConfig,
        elements: DrawerElements,
        collaborators: DrawerCollaborators,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let drag_handle = collaborators.drag_handle.clone().or_else(|| {
            elements
                .drag_handle
                .map(|handle| Rc::new(ElementZone(handle)) as Rc<dyn DragHandleZone>)
        });
        let mut recognizer = SwipeToDismissRecognizer::new(
            config.swipe.clone(),
            collaborators.surface.clone(),
            collaborators.scroll_region.clone(),
        );
        if let Some(zone) = drag_handle {
            recognizer = recognizer.with_drag_handle(zone);
        }

        let controller = DrawerVisibilityController::new(
            elements,
            collaborators.classes.clone(),
            collaborators.focus_trap.clone(),
            config.open_delay,
        );

        Ok(Self {
            controller,
            recognizer,
            listeners: ListenerRegistry::new(collaborators.listeners),
            classes: collaborators.classes,
            section_strategy: Box::new(DrawerSections),
            section_renderer: collaborators.sections,
            reopen: Deadline::new(),
            reopen_delay: config.reopen_delay,
            stale_gesture: Deadline::new(),
            stale_gesture_timeout: config.swipe.stale_gesture_timeout,
            product_id: None,
        })
    }

    /// Replaces the section strategy used by `render_contents`.
    pub fn with_sections(mut self, strategy: impl SectionsToRender + 'static) -> Self {
        self.section_strategy = Box::new(strategy);
        self
    }

    pub fn controller(&self) -> &DrawerVisibilityController {
        &self.controller
    }

    pub fn recognizer(&self) -> &SwipeToDismissRecognizer {
        &self.recognizer
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn state(&self) -> DrawerVisualState {
        self.controller.state()
    }

    pub fn elements(&self) -> &DrawerElements {
        self.controller.elements()
    }

    /// Product id of the most recent cart update.
    pub fn product_id(&self) -> Option<u64> {
        self.product_id
    }

    /// Registers every listener the drawer needs. Safe to call repeatedly.
    pub fn attach(&mut self) {
        let elements = self.controller.elements().clone();

        if let Some(surface) = elements.surface {
            for kind in [
                EventKind::TouchStart,
                EventKind::TouchMove,
                EventKind::TouchEnd,
                EventKind::TouchCancel,
            ] {
                self.listeners
                    .register(ListenerKey::new(surface, kind), ListenerOptions::PASSIVE);
            }
        } else {
            log::debug!("drawer: no panel element, swipe-to-close disabled");
        }

        if let Some(overlay) = elements.overlay {
            self.listeners.register(
                ListenerKey::new(overlay, EventKind::Click),
                ListenerOptions::default(),
            );
        }
        for &trigger in &elements.triggers {
            self.listeners.register(
                ListenerKey::new(trigger, EventKind::Click),
                ListenerOptions::default(),
            );
            self.listeners.register(
                ListenerKey::new(trigger, EventKind::KeyDown),
                ListenerOptions::default(),
            );
        }
        for kind in [EventKind::KeyUp, EventKind::TransitionEnd] {
            self.listeners
                .register(ListenerKey::new(elements.root, kind), ListenerOptions::default());
        }
        log::debug!("drawer: attached {} listeners", self.listeners.len());
    }

    /// Removes every listener and drops any gesture in progress.
    pub fn detach(&mut self) {
        self.listeners.clear();
        self.recognizer.reset();
        self.reopen.disarm();
        self.stale_gesture.disarm();
        log::debug!("drawer: detached");
    }

    pub fn open(&mut self, trigger: Option<ElementId>, now: Instant) {
        self.controller.open(trigger, now);
    }

    pub fn close(&mut self) -> bool {
        self.controller.close()
    }

    /// Routes one platform event. Returns `true` if it was delivered to a
    /// registered listener.
    pub fn dispatch(&mut self, event: HostEvent, now: Instant) -> bool {
        let listener = event.listener();
        if !self.listeners.is_registered(listener, event.kind()) {
            log::trace!("drawer: no listener for {} on {listener}", event.kind().as_str());
            return false;
        }

        let elements = self.controller.elements();
        match event {
            HostEvent::Touch { touch, .. } => {
                let resolution = self.recognizer.handle(&touch);
                match self.stale_gesture_timeout {
                    Some(timeout) if self.recognizer.is_active() => {
                        self.stale_gesture.arm_after(now, timeout)
                    }
                    _ => self.stale_gesture.disarm(),
                }
                if resolution == Some(GestureResolution::Commit) {
                    self.controller.close();
                }
            }
            HostEvent::Click { listener } => {
                if elements.is_trigger(listener) {
                    self.controller.open(Some(listener), now);
                } else if elements.overlay == Some(listener) {
                    self.controller.close();
                }
            }
            HostEvent::Key {
                listener,
                kind: KeyEventType::KeyDown,
                code: KeyCode::Space,
            } if elements.is_trigger(listener) => {
                self.controller.open(Some(listener), now);
            }
            HostEvent::Key {
                listener,
                kind: KeyEventType::KeyUp,
                code: KeyCode::Escape,
            } if listener == elements.root => {
                self.controller.close();
            }
            HostEvent::Key { .. } => {}
            HostEvent::TransitionEnd { .. } => {
                self.controller.on_transition_end();
            }
        }
        true
    }

    /// Services every pending deadline. Returns `true` if anything ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut ran = self.controller.tick(now);
        if self.reopen.fire_if_due(now) {
            self.controller.open(None, now);
            // A zero reopen delay can make the activation due immediately.
            self.controller.tick(now);
            ran = true;
        }
        if self.stale_gesture.fire_if_due(now) && self.recognizer.cancel() {
            log::debug!("drawer: stale gesture expired");
            ran = true;
        }
        ran
    }

    /// Earliest time `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let timers = earliest(self.controller.next_deadline(), self.reopen.deadline());
        earliest(timers, self.stale_gesture.deadline())
    }

    /// Cancels a gesture lifecycle that stopped receiving events, when the
    /// swipe config sets a stale timeout. `now_ms` is on the touch clock.
    ///
    /// `tick` already expires stale gestures on the host clock; this is for
    /// hosts that only have touch timestamps to go by.
    pub fn expire_stale_gesture(&mut self, now_ms: u64) -> bool {
        let expired = self.recognizer.expire_stale(now_ms);
        if expired {
            self.stale_gesture.disarm();
        }
        expired
    }

    /// Applies fresh section markup after a cart change and reopens the
    /// drawer once the replaced markup has settled.
    pub fn render_contents(&mut self, contents: &CartContents, now: Instant) -> usize {
        let root = self.controller.elements().root;
        self.classes.remove(root, DrawerClass::IsEmpty);
        self.product_id = contents.product_id;

        let replaced = render_sections(
            self.section_strategy.as_ref(),
            contents,
            self.section_renderer.as_ref(),
        );
        self.reopen.arm_after(now, self.reopen_delay);
        log::debug!("drawer: re-rendered {replaced} sections, reopening");
        replaced
    }
}
