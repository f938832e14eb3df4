//! Platform element handles and the surface collaborators the gesture
//! recognizer talks to.
//!
//! The core never looks elements up by selector. Every element it touches is
//! handed in as an [`ElementId`] when the drawer is constructed, and every
//! side effect goes through one of the traits below.

/// Opaque handle to a platform element (a DOM node, a widget id, ...).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether offset changes animate or follow the finger directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Transition {
    /// Transition is overridden off; the surface tracks the finger 1:1.
    Suppressed,
    /// The stylesheet's own transition applies.
    #[default]
    Eased,
}

/// Vertical translation applied to the drawer's visual element.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SurfaceOffset {
    pub translate_y: f32,
    pub transition: Transition,
}

impl SurfaceOffset {
    /// No translation, normal animated state.
    pub const REST: Self = Self {
        translate_y: 0.0,
        transition: Transition::Eased,
    };

    /// A drag in progress: the surface follows `translate_y` with no easing.
    pub fn dragging(translate_y: f32) -> Self {
        Self {
            translate_y,
            transition: Transition::Suppressed,
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }
}

/// The visual element a swipe translates.
pub trait DragSurface {
    fn set_offset(&self, offset: SurfaceOffset);
}

/// Reads the scroll position of the nested scrollable content region.
///
/// Returns `None` when the drawer has no scrollable region (an empty cart).
pub trait ScrollableRegionLookup {
    fn scroll_offset(&self, target: Option<ElementId>) -> Option<f32>;
}

/// Answers whether a touch target sits inside the zone that can always
/// start a drag (the drawer header), even when content is scrolled.
pub trait DragHandleZone {
    fn contains(&self, target: ElementId) -> bool;
}
