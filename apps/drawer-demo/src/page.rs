//! A console-backed page: every collaborator call is logged instead of
//! touching a real document.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use swipe_drawer_ui::{
    ClassList, DragHandleZone, DragSurface, DrawerClass, ElementId, FocusTrap, FocusTrapManager,
    ListenerKey, ListenerOptions, ListenerSink, ScrollableRegionLookup, SectionDescriptor,
    SectionRenderer, SurfaceOffset,
};

pub struct ConsolePage {
    classes: RefCell<HashSet<(ElementId, DrawerClass)>>,
    focus: RefCell<FocusTrapManager>,
    scroll_offset: Cell<Option<f32>>,
    header: ElementId,
}

impl ConsolePage {
    pub fn new(header: ElementId) -> Self {
        Self {
            classes: RefCell::new(HashSet::new()),
            focus: RefCell::new(FocusTrapManager::new()),
            scroll_offset: Cell::new(Some(0.0)),
            header,
        }
    }

    pub fn scroll_list_to(&self, offset: f32) {
        log::info!("page: item list scrolled to {offset}px");
        self.scroll_offset.set(Some(offset));
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focus.borrow().active_focus()
    }
}

impl ClassList for ConsolePage {
    fn add(&self, element: ElementId, class: DrawerClass) {
        if self.classes.borrow_mut().insert((element, class)) {
            log::info!("page: {element} +{class}");
        }
    }

    fn remove(&self, element: ElementId, class: DrawerClass) {
        if self.classes.borrow_mut().remove(&(element, class)) {
            log::info!("page: {element} -{class}");
        }
    }

    fn contains(&self, element: ElementId, class: DrawerClass) -> bool {
        self.classes.borrow().contains(&(element, class))
    }
}

impl DragSurface for ConsolePage {
    fn set_offset(&self, offset: SurfaceOffset) {
        log::info!(
            "page: panel translateY({}px) transition {:?}",
            offset.translate_y,
            offset.transition
        );
    }
}

impl ScrollableRegionLookup for ConsolePage {
    fn scroll_offset(&self, _target: Option<ElementId>) -> Option<f32> {
        self.scroll_offset.get()
    }
}

impl DragHandleZone for ConsolePage {
    fn contains(&self, target: ElementId) -> bool {
        target == self.header
    }
}

impl FocusTrap for ConsolePage {
    fn acquire(&self, container: ElementId, initial_focus: Option<ElementId>) {
        log::info!("page: focus trapped in {container}, focusing {initial_focus:?}");
        self.focus.borrow_mut().trap(container, initial_focus);
    }

    fn release(&self, restore_to: Option<ElementId>) {
        log::info!("page: focus trap released, restoring {restore_to:?}");
        self.focus.borrow_mut().untrap(restore_to);
    }
}

impl ListenerSink for ConsolePage {
    fn add_listener(&self, key: ListenerKey, options: ListenerOptions) {
        log::debug!(
            "page: listen {} on {} (passive: {})",
            key.kind.as_str(),
            key.element,
            options.passive
        );
    }

    fn remove_listener(&self, key: ListenerKey) {
        log::debug!("page: unlisten {} on {}", key.kind.as_str(), key.element);
    }
}

impl SectionRenderer for ConsolePage {
    fn replace_section(&self, section: &SectionDescriptor, markup: &str) -> bool {
        log::info!(
            "page: section {} <- {} bytes (selector {:?})",
            section.id,
            markup.len(),
            section.selector
        );
        true
    }
}
