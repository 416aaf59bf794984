//! Coalescing render queue.
//!
//! Components ask for a re-render through [`Document::queue_render`]; the
//! queue keeps each host at most once, in first-request order, until the
//! next [`Document::flush_renders`].
//!
//! [`Document::queue_render`]: crate::Document::queue_render
//! [`Document::flush_renders`]: crate::Document::flush_renders

use std::collections::HashSet;

use crate::dom::NodeId;

/// Pending renders, deduplicated by host.
#[derive(Debug, Default)]
pub struct RenderQueue {
    order: Vec<NodeId>,
    pending: HashSet<NodeId>,
    coalesced: u64,
}

impl RenderQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a host. Returns `false` if it was already pending.
    pub fn schedule(&mut self, host: NodeId) -> bool {
        if self.pending.insert(host) {
            self.order.push(host);
            true
        } else {
            self.coalesced += 1;
            false
        }
    }

    /// Drop a pending render. Returns `true` if one was queued.
    pub fn cancel(&mut self, host: NodeId) -> bool {
        if self.pending.remove(&host) {
            self.order.retain(|h| *h != host);
            true
        } else {
            false
        }
    }

    /// Take every pending host, leaving the queue empty.
    pub fn take_all(&mut self) -> Vec<NodeId> {
        self.pending.clear();
        std::mem::take(&mut self.order)
    }

    /// Check if the host has a pending render.
    pub fn contains(&self, host: NodeId) -> bool {
        self.pending.contains(&host)
    }

    /// Check if anything is queued.
    pub fn has_pending(&self) -> bool {
        !self.order.is_empty()
    }

    /// Number of hosts waiting to render.
    pub fn pending_count(&self) -> usize {
        self.order.len()
    }

    /// Requests absorbed by an already-pending render since creation.
    pub fn coalesced_count(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn hosts(n: usize) -> Vec<NodeId> {
        let mut map: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn repeated_requests_coalesce() {
        let ids = hosts(2);
        let mut queue = RenderQueue::new();

        assert!(queue.schedule(ids[0]));
        assert!(!queue.schedule(ids[0]));
        assert!(!queue.schedule(ids[0]));
        assert!(queue.schedule(ids[1]));

        assert_eq!(queue.pending_count(), 2);
        assert_eq!(queue.coalesced_count(), 2);
        assert_eq!(queue.take_all(), ids);
        assert!(!queue.has_pending());
    }

    #[test]
    fn cancel_removes_host() {
        let ids = hosts(2);
        let mut queue = RenderQueue::new();
        queue.schedule(ids[0]);
        queue.schedule(ids[1]);

        assert!(queue.cancel(ids[0]));
        assert!(!queue.cancel(ids[0]));
        assert!(!queue.contains(ids[0]));
        assert_eq!(queue.take_all(), vec![ids[1]]);
    }
}
