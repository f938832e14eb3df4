//! Platform events the drawer host listens for.

use swipe_drawer_foundation::{ElementId, TouchEvent, TouchPhase};

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    /// Key was pressed down.
    KeyDown,
    /// Key was released.
    KeyUp,
}

/// Physical keys the drawer reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Space,
    Enter,
    Other,
}

/// Event kinds a listener can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    Click,
    KeyDown,
    KeyUp,
    TransitionEnd,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
            EventKind::TouchCancel => "touchcancel",
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::TransitionEnd => "transitionend",
        }
    }
}

impl From<TouchPhase> for EventKind {
    fn from(phase: TouchPhase) -> Self {
        match phase {
            TouchPhase::Start => EventKind::TouchStart,
            TouchPhase::Move => EventKind::TouchMove,
            TouchPhase::End => EventKind::TouchEnd,
            TouchPhase::Cancel => EventKind::TouchCancel,
        }
    }
}

/// An event delivered to the drawer host by the platform.
///
/// `listener` is the element the listener was registered on, which for
/// touches is the drawer panel even when the touch landed on a descendant
/// (carried in the touch's own `target`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Touch {
        listener: ElementId,
        touch: TouchEvent,
    },
    Click {
        listener: ElementId,
    },
    Key {
        listener: ElementId,
        kind: KeyEventType,
        code: KeyCode,
    },
    TransitionEnd {
        listener: ElementId,
    },
}

impl HostEvent {
    pub fn listener(&self) -> ElementId {
        match *self {
            HostEvent::Touch { listener, .. }
            | HostEvent::Click { listener }
            | HostEvent::Key { listener, .. }
            | HostEvent::TransitionEnd { listener } => listener,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Touch { touch, .. } => touch.phase.into(),
            HostEvent::Click { .. } => EventKind::Click,
            HostEvent::Key {
                kind: KeyEventType::KeyDown,
                ..
            } => EventKind::KeyDown,
            HostEvent::Key {
                kind: KeyEventType::KeyUp,
                ..
            } => EventKind::KeyUp,
            HostEvent::TransitionEnd { .. } => EventKind::TransitionEnd,
        }
    }
}
