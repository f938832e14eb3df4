pub mod dispatcher;
pub mod focus;
pub mod gestures;
pub mod types;

pub use dispatcher::TouchDispatcher;
pub use focus::{FocusState, FocusTrap, FocusTrapManager};
pub use gestures::{GestureResolution, GestureState, SwipeConfig, SwipeToDismissRecognizer};
pub use types::{GestureSample, TouchEvent, TouchPhase};

pub mod prelude {
    pub use super::focus::{FocusTrap, FocusTrapManager};
    pub use super::gestures::{GestureResolution, SwipeConfig, SwipeToDismissRecognizer};
    pub use super::types::{GestureSample, TouchEvent, TouchPhase};
}
