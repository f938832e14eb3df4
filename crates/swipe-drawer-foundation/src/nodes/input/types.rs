use crate::element::ElementId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A point-in-time reading of the tracked finger.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureSample {
    pub y: f32,
    pub timestamp_ms: u64,
}

impl GestureSample {
    pub fn new(y: f32, timestamp_ms: u64) -> Self {
        Self { y, timestamp_ms }
    }
}

/// Single-finger touch event.
///
/// Touch listeners are registered passive, so unlike pointer events in a
/// full hit-testing pipeline these carry no consumption flag: the drawer
/// observes the stream but never alters native scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub sample: GestureSample,
    /// Element the touch started on, if the platform reported one.
    pub target: Option<ElementId>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase,
            sample: GestureSample::new(y, timestamp_ms),
            target: None,
        }
    }

    pub fn start(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Start, y, timestamp_ms)
    }

    pub fn moved(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Move, y, timestamp_ms)
    }

    pub fn end(y: f32, timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::End, y, timestamp_ms)
    }

    pub fn cancel(timestamp_ms: u64) -> Self {
        Self::new(TouchPhase::Cancel, 0.0, timestamp_ms)
    }

    /// Set the element the touch landed on.
    pub fn with_target(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn y(&self) -> f32 {
        self.sample.y
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.sample.timestamp_ms
    }
}
