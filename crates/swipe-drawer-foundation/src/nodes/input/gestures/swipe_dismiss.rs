//! Swipe-down-to-dismiss gesture recogniser.
//!
//! Interprets one single-finger touch lifecycle (start, moves, end or cancel)
//! over a drawer panel. While the finger moves down the panel follows it
//! directly; on release the gesture either commits (the caller should close
//! the drawer) or the panel eases back to rest.
//!
//! The recogniser must not hijack ordinary scrolling of the drawer's content,
//! so a lifecycle is only eligible to drag when the content is scrolled to
//! the top or the touch began on the drag handle. Any upward motion ends
//! eligibility for the rest of the lifecycle.

use crate::element::{
    DragHandleZone, DragSurface, ElementId, ScrollableRegionLookup, SurfaceOffset,
};
use crate::gesture_constants::{CLOSE_DISTANCE_THRESHOLD, CLOSE_VELOCITY_THRESHOLD};
use crate::nodes::input::types::{GestureSample, TouchEvent, TouchPhase};
use std::rc::Rc;
use web_time::Duration;

/// Thresholds for the swipe-to-dismiss decision.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Downward travel in px past which a release commits.
    pub close_distance: f32,
    /// Average downward velocity in px/ms past which a release commits.
    pub close_velocity: f32,
    /// Lifecycles with no new sample for this long are force-cancelled by
    /// [`SwipeToDismissRecognizer::expire_stale`], or by the drawer host's
    /// `tick` once its deadline passes. `None` never expires.
    pub stale_gesture_timeout: Option<Duration>,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            close_distance: CLOSE_DISTANCE_THRESHOLD,
            close_velocity: CLOSE_VELOCITY_THRESHOLD,
            stale_gesture_timeout: None,
        }
    }
}

/// How a lifecycle that was eligible to drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureResolution {
    /// Released past a threshold: the drawer should close.
    Commit,
    /// Released short of both thresholds: the panel eased back to rest.
    SnappedBack,
    /// Aborted by upward motion, a platform cancel, or expiry.
    Cancelled,
}

/// Per-lifecycle tracking state, replaced at every touch start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Whether this lifecycle may still drag the panel. Only ever goes from
    /// `true` to `false` after the start sample.
    pub active: bool,
    pub origin: GestureSample,
    pub last: GestureSample,
    pub scroll_anchor_at_start: f32,
}

impl GestureState {
    fn begin(sample: GestureSample, scroll_anchor_at_start: f32, active: bool) -> Self {
        Self {
            active,
            origin: sample,
            last: sample,
            scroll_anchor_at_start,
        }
    }

    /// Signed travel since the start sample; positive is downward.
    pub fn delta_y(&self) -> f32 {
        self.last.y - self.origin.y
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.last.timestamp_ms.saturating_sub(self.origin.timestamp_ms)
    }

    /// Average velocity over the whole lifecycle in px/ms.
    pub fn velocity(&self) -> f32 {
        release_velocity(self.delta_y(), self.elapsed_ms())
    }
}

/// Average velocity of a release in px/ms.
///
/// A downward release with no elapsed time counts as infinitely fast.
pub fn release_velocity(delta_y: f32, elapsed_ms: u64) -> f32 {
    if elapsed_ms == 0 {
        if delta_y > 0.0 {
            f32::INFINITY
        } else {
            0.0
        }
    } else {
        delta_y / elapsed_ms as f32
    }
}

pub struct SwipeToDismissRecognizer {
    config: SwipeConfig,
    surface: Rc<dyn DragSurface>,
    scroll_region: Rc<dyn ScrollableRegionLookup>,
    drag_handle: Option<Rc<dyn DragHandleZone>>,
    state: Option<GestureState>,
    offset: SurfaceOffset,
}

impl SwipeToDismissRecognizer {
    pub fn new(
        config: SwipeConfig,
        surface: Rc<dyn DragSurface>,
        scroll_region: Rc<dyn ScrollableRegionLookup>,
    ) -> Self {
        Self {
            config,
            surface,
            scroll_region,
            drag_handle: None,
            state: None,
            offset: SurfaceOffset::REST,
        }
    }

    /// Sets the zone that may start a drag even while content is scrolled.
    pub fn with_drag_handle(mut self, zone: Rc<dyn DragHandleZone>) -> Self {
        self.drag_handle = Some(zone);
        self
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Whether the current lifecycle is still dragging the panel.
    pub fn is_active(&self) -> bool {
        self.state.is_some_and(|state| state.active)
    }

    /// The offset most recently written to the surface.
    pub fn current_offset(&self) -> SurfaceOffset {
        self.offset
    }

    /// Tracking state of the current lifecycle, if one has started.
    pub fn gesture_state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }

    /// Feeds one touch event. Returns a resolution when the event ended an
    /// eligible lifecycle.
    pub fn handle(&mut self, event: &TouchEvent) -> Option<GestureResolution> {
        log::trace!("swipe: {:?} at y={} t={}", event.phase, event.y(), event.timestamp_ms());
        match event.phase {
            TouchPhase::Start => {
                self.on_start(event.sample, event.target);
                None
            }
            TouchPhase::Move => self.on_move(event.sample),
            TouchPhase::End => self.on_end(event.sample),
            TouchPhase::Cancel => self.on_cancel(),
        }
    }

    /// Cancels an active lifecycle whose newest sample is older than the
    /// configured timeout. Returns `true` if a lifecycle was expired.
    pub fn expire_stale(&mut self, now_ms: u64) -> bool {
        let Some(timeout) = self.config.stale_gesture_timeout else {
            return false;
        };
        let Some(state) = self.state.filter(|state| state.active) else {
            return false;
        };
        let idle_ms = now_ms.saturating_sub(state.last.timestamp_ms);
        if u128::from(idle_ms) < timeout.as_millis() {
            return false;
        }
        log::debug!("swipe: expiring lifecycle idle for {idle_ms}ms");
        self.on_cancel();
        true
    }

    /// Cancels the current lifecycle as a platform cancel would. Returns
    /// `true` if it was still eligible to drag.
    pub fn cancel(&mut self) -> bool {
        self.on_cancel().is_some()
    }

    /// Drops any lifecycle and returns the surface to rest.
    pub fn reset(&mut self) {
        self.state = None;
        self.write_offset(SurfaceOffset::REST);
    }

    fn on_start(&mut self, sample: GestureSample, target: Option<ElementId>) {
        if self.is_active() {
            log::warn!("swipe: new touch start while a lifecycle was unterminated");
        }
        if !self.offset.is_rest() {
            self.write_offset(SurfaceOffset::REST);
        }
        if !sample.y.is_finite() {
            log::trace!("swipe: ignoring start with non-finite y");
            self.state = None;
            return;
        }

        let scroll_anchor = self
            .scroll_region
            .scroll_offset(target)
            .filter(|offset| offset.is_finite())
            .unwrap_or(0.0);
        let on_handle = match (target, &self.drag_handle) {
            (Some(target), Some(zone)) => zone.contains(target),
            _ => false,
        };
        let active = scroll_anchor == 0.0 || on_handle;

        if !active {
            log::trace!("swipe: content scrolled to {scroll_anchor}, leaving gesture to scrolling");
        }
        self.state = Some(GestureState::begin(sample, scroll_anchor, active));
    }

    fn on_move(&mut self, sample: GestureSample) -> Option<GestureResolution> {
        if !sample.y.is_finite() {
            return None;
        }
        let state = self.state.as_mut().filter(|state| state.active)?;
        state.last = sample;
        let delta_y = state.delta_y();

        if delta_y > 0.0 {
            self.write_offset(SurfaceOffset::dragging(delta_y));
            None
        } else {
            state.active = false;
            log::debug!("swipe: upward motion ({delta_y}px), drag aborted");
            self.write_offset(SurfaceOffset::REST);
            Some(GestureResolution::Cancelled)
        }
    }

    fn on_end(&mut self, sample: GestureSample) -> Option<GestureResolution> {
        let state = self.state.as_mut().filter(|state| state.active)?;
        // Position comes from the last move, the offset the user saw.
        state.last.timestamp_ms = sample.timestamp_ms;
        state.active = false;

        let delta_y = state.delta_y();
        let velocity = state.velocity();
        let commit = delta_y > self.config.close_distance || velocity > self.config.close_velocity;

        self.write_offset(SurfaceOffset::REST);
        if commit {
            log::debug!("swipe: commit (delta={delta_y}px, velocity={velocity}px/ms)");
            Some(GestureResolution::Commit)
        } else {
            log::debug!("swipe: snap back (delta={delta_y}px, velocity={velocity}px/ms)");
            Some(GestureResolution::SnappedBack)
        }
    }

    fn on_cancel(&mut self) -> Option<GestureResolution> {
        let was_active = self.is_active();
        if let Some(state) = self.state.as_mut() {
            state.active = false;
        }
        self.write_offset(SurfaceOffset::REST);
        was_active.then_some(GestureResolution::Cancelled)
    }

    fn write_offset(&mut self, offset: SurfaceOffset) {
        self.offset = offset;
        self.surface.set_offset(offset);
    }
}

#[cfg(test)]
#[path = "../../../tests/swipe_dismiss_tests.rs"]
mod tests;
