//! State classes the drawer toggles on its elements.

use swipe_drawer_foundation::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerClass {
    /// Enables the panel's slide transition.
    Animate,
    /// Panel is visible.
    Active,
    /// Drawer has no content; focus goes to the empty-state container.
    IsEmpty,
    /// Page scrolling is locked while the drawer is open.
    OverflowHidden,
}

impl DrawerClass {
    pub fn as_str(self) -> &'static str {
        match self {
            DrawerClass::Animate => "animate",
            DrawerClass::Active => "active",
            DrawerClass::IsEmpty => "is-empty",
            DrawerClass::OverflowHidden => "overflow-hidden",
        }
    }
}

impl std::fmt::Display for DrawerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class membership on platform elements.
///
/// Adding a present class or removing an absent one is a no-op.
pub trait ClassList {
    fn add(&self, element: ElementId, class: DrawerClass);
    fn remove(&self, element: ElementId, class: DrawerClass);
    fn contains(&self, element: ElementId, class: DrawerClass) -> bool;
}
