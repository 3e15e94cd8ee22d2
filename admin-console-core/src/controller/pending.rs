//! In-flight gateway requests.
//!
//! Every request is tagged when issued. A completion is applied only while
//! its tag is still current:
//! - its visit (screen mount counter) equals the controller's,
//! - its sequence number is the latest issued for its slot,
//! - its region, if any, is still live.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::task::AbortHandle;

use crate::types::Region;

/// Kind of request; at most one non-mutation request per slot is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestSlot {
    Help,
    List,
    Detail,
    Suggestions,
    /// Saves, deletes and link changes. Never superseded or aborted.
    Mutation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTag {
    pub seq: u64,
    pub slot: RequestSlot,
    pub visit: u64,
    pub region: Option<Region>,
}

#[derive(Debug, Default)]
pub struct PendingRequests {
    next_seq: u64,
    latest: HashMap<RequestSlot, u64>,
    in_flight: HashMap<u64, (RequestSlot, AbortHandle)>,
}

impl PendingRequests {
    /// Tag a new request, aborting the one it supersedes.
    pub fn issue(&mut self, slot: RequestSlot, visit: u64, region: Option<Region>) -> RequestTag {
        if slot != RequestSlot::Mutation {
            self.cancel(slot);
        }
        self.next_seq += 1;
        self.latest.insert(slot, self.next_seq);
        RequestTag {
            seq: self.next_seq,
            slot,
            visit,
            region,
        }
    }

    pub fn track(&mut self, tag: &RequestTag, handle: AbortHandle) {
        self.in_flight.insert(tag.seq, (tag.slot, handle));
    }

    /// Abort the request of `slot`. A completion already queued is stale from now on.
    pub fn cancel(&mut self, slot: RequestSlot) {
        self.in_flight.retain(|seq, (s, handle)| {
            if *s == slot {
                log::debug!("Aborting {slot:?} request #{seq}");
                handle.abort();
                false
            } else {
                true
            }
        });
        self.latest.remove(&slot);
    }

    /// Abort everything except mutations, on screen change.
    pub fn abort_screen_scoped(&mut self) {
        for slot in [
            RequestSlot::Help,
            RequestSlot::List,
            RequestSlot::Detail,
            RequestSlot::Suggestions,
        ] {
            self.cancel(slot);
        }
    }

    /// Mark the request finished. Returns whether it is still the latest of its slot.
    pub fn complete(&mut self, tag: &RequestTag) -> bool {
        self.in_flight.remove(&tag.seq);
        tag.slot == RequestSlot::Mutation || self.latest.get(&tag.slot) == Some(&tag.seq)
    }

    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_handle() -> AbortHandle {
        tokio::spawn(std::future::pending::<()>()).abort_handle()
    }

    #[tokio::test]
    async fn newer_request_supersedes_older() {
        let mut pending = PendingRequests::default();
        let first = pending.issue(RequestSlot::List, 1, None);
        pending.track(&first, idle_handle());
        let second = pending.issue(RequestSlot::List, 1, None);
        pending.track(&second, idle_handle());

        assert_eq!(pending.in_flight(), 1);
        assert!(!pending.complete(&first));
        assert!(pending.complete(&second));
        assert!(pending.is_idle());
    }

    #[tokio::test]
    async fn mutations_run_side_by_side() {
        let mut pending = PendingRequests::default();
        let a = pending.issue(RequestSlot::Mutation, 1, None);
        pending.track(&a, idle_handle());
        let b = pending.issue(RequestSlot::Mutation, 1, None);
        pending.track(&b, idle_handle());

        pending.abort_screen_scoped();
        assert_eq!(pending.in_flight(), 2);
        assert!(pending.complete(&a));
        assert!(pending.complete(&b));
    }

    #[tokio::test]
    async fn cancelled_slot_rejects_queued_completion() {
        let mut pending = PendingRequests::default();
        let tag = pending.issue(RequestSlot::Suggestions, 3, None);
        pending.track(&tag, idle_handle());
        pending.cancel(RequestSlot::Suggestions);
        assert!(!pending.complete(&tag));
    }
}
