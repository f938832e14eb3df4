pub mod swipe_dismiss;

pub use swipe_dismiss::{
    release_velocity, GestureResolution, GestureState, SwipeConfig, SwipeToDismissRecognizer,
};
