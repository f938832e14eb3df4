//! Touch event queue.
//!
//! Platform integrations receive touch callbacks at arbitrary points of their
//! own event loop. They push them here and drain the queue into the drawer in
//! arrival order, which is the chronological order the recognizer relies on.

use super::types::TouchEvent;

#[derive(Default)]
pub struct TouchDispatcher {
    queue: Vec<TouchEvent>,
}

impl TouchDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: TouchEvent) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(TouchEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::input::types::TouchPhase;

    #[test]
    fn drain_preserves_arrival_order() {
        let mut dispatcher = TouchDispatcher::new();
        dispatcher.push(TouchEvent::start(200.0, 0));
        dispatcher.push(TouchEvent::moved(240.0, 16));
        dispatcher.push(TouchEvent::end(240.0, 32));
        assert_eq!(dispatcher.len(), 3);

        let mut phases = Vec::new();
        dispatcher.drain(|event| phases.push(event.phase));

        assert_eq!(
            phases,
            vec![TouchPhase::Start, TouchPhase::Move, TouchPhase::End]
        );
        assert!(dispatcher.is_empty());
    }
}
