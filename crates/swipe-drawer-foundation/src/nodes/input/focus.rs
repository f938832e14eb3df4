//! Focus trapping for modal surfaces.
//!
//! While the drawer is open keyboard focus is confined to it. The drawer core
//! only needs the [`FocusTrap`] contract; [`FocusTrapManager`] is the
//! in-process implementation that tracks the focused element and the trapped
//! container.

use crate::element::ElementId;
use std::cell::RefCell;
use std::collections::HashMap;

/// Focus state of a single element.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    #[default]
    Inactive,
    Active,
    /// Focused and held: focus cannot leave until released.
    Captured,
}

/// Scoped focus confinement.
///
/// `acquire` and `release` are called exactly once each per open/close
/// cycle of the surface that owns the trap.
pub trait FocusTrap {
    /// Confine focus to `container`, moving it to `initial_focus` (or the
    /// container itself when absent).
    fn acquire(&self, container: ElementId, initial_focus: Option<ElementId>);

    /// Lift any confinement and move focus back to `restore_to`, if given.
    fn release(&self, restore_to: Option<ElementId>);
}

/// Tracks the focused element and, while a trap is held, the container that
/// focus is confined to.
pub struct FocusTrapManager {
    /// The currently focused element, if any.
    active_focus: Option<ElementId>,
    /// Per-element focus state.
    focus_states: HashMap<ElementId, FocusState>,
    /// Container focus is currently confined to.
    trapped_container: Option<ElementId>,
}

impl Default for FocusTrapManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTrapManager {
    pub fn new() -> Self {
        Self {
            active_focus: None,
            focus_states: HashMap::new(),
            trapped_container: None,
        }
    }

    /// Returns the currently focused element.
    pub fn active_focus(&self) -> Option<ElementId> {
        self.active_focus
    }

    /// Returns the container focus is confined to, if a trap is held.
    pub fn trapped_container(&self) -> Option<ElementId> {
        self.trapped_container
    }

    pub fn is_trapped(&self) -> bool {
        self.trapped_container.is_some()
    }

    /// Moves focus to `id`.
    ///
    /// Refused while focus is captured by another element.
    pub fn request_focus(&mut self, id: ElementId) -> bool {
        if let Some(prev) = self.active_focus {
            if prev == id {
                return true;
            }
            if self.focus_state(prev) == FocusState::Captured {
                return false;
            }
            self.focus_states.insert(prev, FocusState::Inactive);
        }

        self.active_focus = Some(id);
        self.focus_states.insert(id, FocusState::Active);
        true
    }

    /// Clears focus from the currently focused element.
    pub fn clear_focus(&mut self) {
        if let Some(id) = self.active_focus.take() {
            self.focus_states.insert(id, FocusState::Inactive);
        }
    }

    /// Captures focus, preventing other elements from taking it.
    pub fn capture_focus(&mut self) -> bool {
        if let Some(id) = self.active_focus {
            self.focus_states.insert(id, FocusState::Captured);
            true
        } else {
            false
        }
    }

    /// Releases captured focus.
    pub fn free_focus(&mut self) -> bool {
        if let Some(id) = self.active_focus {
            if self.focus_state(id) == FocusState::Captured {
                self.focus_states.insert(id, FocusState::Active);
                return true;
            }
        }
        false
    }

    pub fn focus_state(&self, id: ElementId) -> FocusState {
        self.focus_states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_focused(&self, id: ElementId) -> bool {
        self.active_focus == Some(id)
    }

    pub fn trap(&mut self, container: ElementId, initial_focus: Option<ElementId>) {
        if self.trapped_container.is_some() {
            // Re-trapping moves the trap; release the old capture first.
            self.free_focus();
        }
        self.trapped_container = Some(container);
        self.request_focus(initial_focus.unwrap_or(container));
        self.capture_focus();
        log::debug!(
            "focus trapped in {container}, focused {:?}",
            self.active_focus
        );
    }

    pub fn untrap(&mut self, restore_to: Option<ElementId>) {
        if self.trapped_container.take().is_some() {
            self.free_focus();
            log::debug!("focus trap released");
        }
        if let Some(element) = restore_to {
            self.request_focus(element);
        }
    }
}

impl FocusTrap for RefCell<FocusTrapManager> {
    fn acquire(&self, container: ElementId, initial_focus: Option<ElementId>) {
        self.borrow_mut().trap(container, initial_focus);
    }

    fn release(&self, restore_to: Option<ElementId>) {
        self.borrow_mut().untrap(restore_to);
    }
}
