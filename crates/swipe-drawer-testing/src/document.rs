//! In-memory stand-in for the page the drawer lives in.
//!
//! `FakeDocument` implements every collaborator trait the drawer uses and
//! records what was done to it, so tests can assert on classes, focus,
//! surface offsets, listeners, and replaced sections.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};
use swipe_drawer_foundation::{
    DragHandleZone, DragSurface, ElementId, FocusTrap, FocusTrapManager, ScrollableRegionLookup,
    SurfaceOffset,
};
use swipe_drawer_ui::{
    ClassList, DrawerClass, EventKind, ListenerKey, ListenerOptions, ListenerSink,
    SectionDescriptor, SectionRenderer,
};

#[derive(Default)]
pub struct FakeDocument {
    classes: RefCell<HashSet<(ElementId, DrawerClass)>>,
    offsets: RefCell<Vec<SurfaceOffset>>,
    scroll_offset: Cell<Option<f32>>,
    handle_zone: RefCell<HashSet<ElementId>>,
    focus: RefCell<FocusTrapManager>,
    acquires: Cell<usize>,
    releases: Cell<usize>,
    listeners: RefCell<BTreeMap<ListenerKey, ListenerOptions>>,
    section_targets: RefCell<HashSet<&'static str>>,
    sections: RefCell<HashMap<&'static str, String>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            scroll_offset: Cell::new(Some(0.0)),
            ..Self::default()
        }
    }

    pub fn has_class(&self, element: ElementId, class: DrawerClass) -> bool {
        self.classes.borrow().contains(&(element, class))
    }

    /// Every offset written to the drag surface, oldest first.
    pub fn offsets(&self) -> Vec<SurfaceOffset> {
        self.offsets.borrow().clone()
    }

    pub fn current_offset(&self) -> SurfaceOffset {
        self.offsets
            .borrow()
            .last()
            .copied()
            .unwrap_or(SurfaceOffset::REST)
    }

    /// Largest downward translation the surface has shown.
    pub fn max_translation(&self) -> f32 {
        self.offsets
            .borrow()
            .iter()
            .map(|offset| offset.translate_y)
            .fold(0.0, f32::max)
    }

    /// Sets the scroll offset of the drawer's item list. `None` removes it.
    pub fn set_scroll_offset(&self, offset: Option<f32>) {
        self.scroll_offset.set(offset);
    }

    /// Marks `element` as inside the drawer header.
    pub fn add_to_handle_zone(&self, element: ElementId) {
        self.handle_zone.borrow_mut().insert(element);
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focus.borrow().active_focus()
    }

    pub fn trapped_container(&self) -> Option<ElementId> {
        self.focus.borrow().trapped_container()
    }

    /// Moves focus without a trap, as a user tabbing on the page would.
    pub fn focus_element(&self, element: ElementId) {
        self.focus.borrow_mut().request_focus(element);
    }

    pub fn trap_acquires(&self) -> usize {
        self.acquires.get()
    }

    pub fn trap_releases(&self) -> usize {
        self.releases.get()
    }

    pub fn listener(&self, element: ElementId, kind: EventKind) -> Option<ListenerOptions> {
        self.listeners
            .borrow()
            .get(&ListenerKey::new(element, kind))
            .copied()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Makes a section target exist on the page.
    pub fn add_section_target(&self, id: &'static str) {
        self.section_targets.borrow_mut().insert(id);
    }

    pub fn section_markup(&self, id: &str) -> Option<String> {
        self.sections.borrow().get(id).cloned()
    }
}

impl ClassList for FakeDocument {
    fn add(&self, element: ElementId, class: DrawerClass) {
        self.classes.borrow_mut().insert((element, class));
    }

    fn remove(&self, element: ElementId, class: DrawerClass) {
        self.classes.borrow_mut().remove(&(element, class));
    }

    fn contains(&self, element: ElementId, class: DrawerClass) -> bool {
        self.has_class(element, class)
    }
}

impl DragSurface for FakeDocument {
    fn set_offset(&self, offset: SurfaceOffset) {
        self.offsets.borrow_mut().push(offset);
    }
}

impl ScrollableRegionLookup for FakeDocument {
    fn scroll_offset(&self, _target: Option<ElementId>) -> Option<f32> {
        self.scroll_offset.get()
    }
}

impl DragHandleZone for FakeDocument {
    fn contains(&self, target: ElementId) -> bool {
        self.handle_zone.borrow().contains(&target)
    }
}

impl FocusTrap for FakeDocument {
    fn acquire(&self, container: ElementId, initial_focus: Option<ElementId>) {
        self.acquires.set(self.acquires.get() + 1);
        self.focus.borrow_mut().trap(container, initial_focus);
    }

    fn release(&self, restore_to: Option<ElementId>) {
        self.releases.set(self.releases.get() + 1);
        self.focus.borrow_mut().untrap(restore_to);
    }
}

impl ListenerSink for FakeDocument {
    fn add_listener(&self, key: ListenerKey, options: ListenerOptions) {
        let previous = self.listeners.borrow_mut().insert(key, options);
        assert!(previous.is_none(), "listener {key:?} installed twice");
    }

    fn remove_listener(&self, key: ListenerKey) {
        let previous = self.listeners.borrow_mut().remove(&key);
        assert!(previous.is_some(), "listener {key:?} removed but never installed");
    }
}

impl SectionRenderer for FakeDocument {
    fn replace_section(&self, section: &SectionDescriptor, markup: &str) -> bool {
        if !self.section_targets.borrow().contains(section.id) {
            return false;
        }
        self.sections
            .borrow_mut()
            .insert(section.id, markup.to_string());
        true
    }
}
