//! Testing utilities and harness for Swipe Drawer

pub mod document;
pub mod robot;
pub mod robot_assertions;

// Re-export testing utilities
pub use document::FakeDocument;
pub use robot::{ids, standard_elements, DrawerRobot};

pub mod prelude {
    pub use crate::document::FakeDocument;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::*;
}
