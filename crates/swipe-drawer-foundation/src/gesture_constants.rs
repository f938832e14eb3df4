//! Shared gesture constants for the swipe-to-dismiss interaction.
//!
//! Both values are in logical pixels and milliseconds as reported by the
//! platform touch events. They are empirical and must stay in sync with the
//! drawer stylesheet's expectations of how far a panel can travel before it
//! is considered dismissed.

/// Downward travel in logical pixels past which a released drag closes the
/// drawer, regardless of how fast it moved.
pub const CLOSE_DISTANCE_THRESHOLD: f32 = 80.0;

/// Average downward velocity in logical pixels per millisecond past which a
/// released drag closes the drawer, regardless of how far it moved.
///
/// 0.3 px/ms is 300 px/s: a short flick clears it, a deliberate slow drag
/// does not.
pub const CLOSE_VELOCITY_THRESHOLD: f32 = 0.3;
