//! Active pointer contacts.

use std::collections::HashSet;

/// Opaque pointer identifier (the DOM `pointerId`).
pub type ContactId = i32;

/// Occupancy change emitted when the contact set crosses empty/non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First contact arrived.
    BecameActive,
    /// Last contact left.
    BecameIdle,
}

#[derive(Debug, Default, Clone)]
pub struct InteractionTracker {
    active: HashSet<ContactId>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_contact_start(&mut self, id: ContactId) -> Option<Transition> {
        let was_idle = self.active.is_empty();
        self.active.insert(id);
        was_idle.then_some(Transition::BecameActive)
    }

    /// Also used for cancelled contacts. Unknown ids are ignored.
    pub fn on_contact_end(&mut self, id: ContactId) -> Option<Transition> {
        if !self.active.remove(&id) {
            return None;
        }
        self.active.is_empty().then_some(Transition::BecameIdle)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.active.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_contact_becomes_active() {
        let mut tracker = InteractionTracker::new();
        assert_eq!(tracker.on_contact_start(7), Some(Transition::BecameActive));
        assert_eq!(tracker.on_contact_start(8), None);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn last_contact_becomes_idle() {
        let mut tracker = InteractionTracker::new();
        tracker.on_contact_start(1);
        tracker.on_contact_start(2);
        assert_eq!(tracker.on_contact_end(1), None);
        assert!(tracker.contains(2));
        assert_eq!(tracker.on_contact_end(2), Some(Transition::BecameIdle));
        assert!(tracker.is_idle());
    }

    #[test]
    fn unknown_end_is_ignored() {
        let mut tracker = InteractionTracker::new();
        assert_eq!(tracker.on_contact_end(42), None);

        tracker.on_contact_start(1);
        assert_eq!(tracker.on_contact_end(42), None);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn duplicate_start_is_deduplicated() {
        let mut tracker = InteractionTracker::new();
        tracker.on_contact_start(3);
        assert_eq!(tracker.on_contact_start(3), None);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.on_contact_end(3), Some(Transition::BecameIdle));
    }
}
