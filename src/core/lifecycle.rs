//! Create/animate/destroy bookkeeping for ephemeral decorative nodes
//!
//! Leaves, ripples, particle layers, tooltips and toasts are all appended to the
//! page, live for a fixed time and are then removed. Removal can be requested
//! by a timer, by a refresh cycle or by teardown, in any order. Each node is
//! registered here and released through [`EphemeralSet::release`], which only
//! reports success once per id.

use std::collections::HashSet;

/// Opaque handle for a registered node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EphemeralId(u64);

impl EphemeralId {
    /// Value written to the node's `data-ephemeral` attribute
    pub fn attribute(self) -> String {
        self.0.to_string()
    }

    /// Read back an id written by [`EphemeralId::attribute`]
    pub fn parse(attribute: &str) -> Option<Self> {
        attribute.trim().parse().ok().map(EphemeralId)
    }
}

#[derive(Debug, Default)]
pub struct EphemeralSet {
    next: u64,
    live: HashSet<u64>,
    released: u64,
}

impl EphemeralSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> EphemeralId {
        let id = self.next;
        self.next += 1;
        self.live.insert(id);
        EphemeralId(id)
    }

    /// Returns `true` if the node was live, i.e. the caller must detach it now.
    /// Unknown or already released ids are a no-op.
    pub fn release(&mut self, id: EphemeralId) -> bool {
        let removed = self.live.remove(&id.0);
        if removed {
            self.released += 1;
        }
        removed
    }

    pub fn is_live(&self, id: EphemeralId) -> bool {
        self.live.contains(&id.0)
    }

    /// Release everything at once (teardown). Returns the ids that were live.
    pub fn drain(&mut self) -> Vec<EphemeralId> {
        let mut ids: Vec<_> = self.live.drain().map(EphemeralId).collect();
        ids.sort();
        self.released += ids.len() as u64;
        ids
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn created_count(&self) -> u64 {
        self.next
    }

    pub fn released_count(&self) -> u64 {
        self.released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_exactly_once() {
        let mut set = EphemeralSet::new();
        let ripple = set.register();
        assert!(set.is_live(ripple));

        assert!(set.release(ripple));
        assert!(!set.release(ripple));
        assert!(!set.is_live(ripple));
        assert_eq!(set.released_count(), 1);
    }

    #[test]
    fn test_timer_after_teardown_is_noop() {
        let mut set = EphemeralSet::new();
        let a = set.register();
        let b = set.register();

        let drained = set.drain();
        assert_eq!(drained, vec![a, b]);

        // a removal timer that was still in flight fires afterwards
        assert!(!set.release(a));
        assert_eq!(set.live_count(), 0);
        assert_eq!(set.created_count(), set.released_count());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut set = EphemeralSet::new();
        let ids: HashSet<_> = (0..50).map(|_| set.register()).collect();
        assert_eq!(ids.len(), 50);
        assert_eq!(set.live_count(), 50);
    }

    #[test]
    fn test_attribute_parses_back() {
        let mut set = EphemeralSet::new();
        set.register();
        let id = set.register();
        assert_eq!(EphemeralId::parse(&id.attribute()), Some(id));
        assert_eq!(EphemeralId::parse("leaf"), None);
    }
}
