//! Event listener lifecycle.
//!
//! Listeners are registered once per `(element, event kind)` pair, tracked
//! here, and removed explicitly. The registry mirrors every change onto a
//! [`ListenerSink`] so the platform layer can install or drop its native
//! callbacks, and the host uses it to drop events nobody subscribed to.

use crate::events::EventKind;
use std::collections::BTreeMap;
use std::rc::Rc;
use swipe_drawer_foundation::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerKey {
    pub element: ElementId,
    pub kind: EventKind,
}

impl ListenerKey {
    pub fn new(element: ElementId, kind: EventKind) -> Self {
        Self { element, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// The listener never blocks native default behavior (scrolling).
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: Self = Self { passive: true };
}

/// Platform side of listener registration.
pub trait ListenerSink {
    fn add_listener(&self, key: ListenerKey, options: ListenerOptions);
    fn remove_listener(&self, key: ListenerKey);
}

pub struct ListenerRegistry {
    sink: Rc<dyn ListenerSink>,
    registered: BTreeMap<ListenerKey, ListenerOptions>,
}

impl ListenerRegistry {
    pub fn new(sink: Rc<dyn ListenerSink>) -> Self {
        Self {
            sink,
            registered: BTreeMap::new(),
        }
    }

    /// Registers a listener. Returns `false` if the pair was already
    /// registered, in which case the sink is not called again.
    pub fn register(&mut self, key: ListenerKey, options: ListenerOptions) -> bool {
        if self.registered.contains_key(&key) {
            return false;
        }
        self.registered.insert(key, options);
        self.sink.add_listener(key, options);
        log::trace!("listener added: {} on {}", key.kind.as_str(), key.element);
        true
    }

    pub fn unregister(&mut self, key: ListenerKey) -> bool {
        if self.registered.remove(&key).is_none() {
            return false;
        }
        self.sink.remove_listener(key);
        log::trace!("listener removed: {} on {}", key.kind.as_str(), key.element);
        true
    }

    pub fn is_registered(&self, element: ElementId, kind: EventKind) -> bool {
        self.registered.contains_key(&ListenerKey::new(element, kind))
    }

    pub fn options(&self, key: ListenerKey) -> Option<ListenerOptions> {
        self.registered.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Unregisters every listener.
    pub fn clear(&mut self) {
        let keys: Vec<ListenerKey> = self.registered.keys().copied().collect();
        for key in keys {
            self.unregister(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockSink {
        added: RefCell<Vec<(ListenerKey, ListenerOptions)>>,
        removed: RefCell<Vec<ListenerKey>>,
    }

    impl ListenerSink for MockSink {
        fn add_listener(&self, key: ListenerKey, options: ListenerOptions) {
            self.added.borrow_mut().push((key, options));
        }

        fn remove_listener(&self, key: ListenerKey) {
            self.removed.borrow_mut().push(key);
        }
    }

    const PANEL: ElementId = ElementId::new(1);
    const ICON: ElementId = ElementId::new(2);

    #[test]
    fn duplicate_registrations_deduplicated() {
        let sink = Rc::new(MockSink::default());
        let mut registry = ListenerRegistry::new(sink.clone());
        let key = ListenerKey::new(PANEL, EventKind::TouchMove);

        assert!(registry.register(key, ListenerOptions::PASSIVE));
        assert!(!registry.register(key, ListenerOptions::PASSIVE));
        assert!(!registry.register(key, ListenerOptions::default()));

        assert_eq!(sink.added.borrow().len(), 1);
        assert_eq!(registry.options(key), Some(ListenerOptions::PASSIVE));
    }

    #[test]
    fn unregister_removes_once() {
        let sink = Rc::new(MockSink::default());
        let mut registry = ListenerRegistry::new(sink.clone());
        let key = ListenerKey::new(ICON, EventKind::Click);
        registry.register(key, ListenerOptions::default());

        assert!(registry.unregister(key));
        assert!(!registry.unregister(key));
        assert!(!registry.is_registered(ICON, EventKind::Click));
        assert_eq!(sink.removed.borrow().as_slice(), &[key]);
    }

    #[test]
    fn clear_removes_all() {
        let sink = Rc::new(MockSink::default());
        let mut registry = ListenerRegistry::new(sink.clone());
        registry.register(
            ListenerKey::new(PANEL, EventKind::TouchStart),
            ListenerOptions::PASSIVE,
        );
        registry.register(ListenerKey::new(ICON, EventKind::Click), ListenerOptions::default());

        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(sink.removed.borrow().len(), 2);
    }
}
