//! Foundation for Swipe Drawer: touch input, focus trapping, and the
//! swipe-to-dismiss gesture.

pub mod element;
pub mod gesture_constants;
pub mod nodes;

pub use element::{
    DragHandleZone, DragSurface, ElementId, ScrollableRegionLookup, SurfaceOffset, Transition,
};
pub use nodes::input::{
    FocusState, FocusTrap, FocusTrapManager, GestureResolution, GestureSample, GestureState,
    SwipeConfig, SwipeToDismissRecognizer, TouchDispatcher, TouchEvent, TouchPhase,
};

pub mod prelude {
    pub use crate::element::*;
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::prelude::*;
}
