//! Drawer visibility controller and event host for Swipe Drawer.
//!
//! [`DrawerHost`] is the entry point for platform integrations: construct it
//! with the drawer's elements and collaborators, `attach()` it, then feed it
//! platform events through `dispatch` and call `tick` whenever
//! `next_deadline` passes.

pub mod classes;
pub mod config;
pub mod deadline;
pub mod drawer;
pub mod events;
pub mod host;
pub mod listeners;
pub mod sections;
pub mod transition;

pub use classes::{ClassList, DrawerClass};
pub use config::{ConfigError, DrawerConfig, OPEN_DELAY, REOPEN_DELAY};
pub use deadline::Deadline;
pub use drawer::{DrawerElements, DrawerVisibilityController, DrawerVisualState};
pub use events::{EventKind, HostEvent, KeyCode, KeyEventType};
pub use host::{DrawerCollaborators, DrawerHost};
pub use listeners::{ListenerKey, ListenerOptions, ListenerRegistry, ListenerSink};
pub use sections::{
    render_sections, CartContents, DrawerItemsSections, DrawerSections, SectionDescriptor,
    SectionList, SectionRenderer, SectionsToRender,
};
pub use transition::TransitionSignal;

pub use swipe_drawer_foundation::{
    DragHandleZone, DragSurface, ElementId, FocusTrap, FocusTrapManager, GestureResolution,
    ScrollableRegionLookup, SurfaceOffset, SwipeConfig, TouchDispatcher, TouchEvent, TouchPhase,
    Transition,
};

pub mod prelude {
    pub use crate::{
        ClassList, DrawerClass, DrawerCollaborators, DrawerConfig, DrawerElements, DrawerHost,
        DrawerVisualState, HostEvent, KeyCode, KeyEventType,
    };
    pub use swipe_drawer_foundation::prelude::*;
}
