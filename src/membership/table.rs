use rand::Rng;
use tracing::debug;

use super::types::{MemberEntry, UpsertOutcome};
use crate::wire::NodeId;

/// The membership table: an ordered collection of member entries, unique by
/// identity, owned exclusively by one node for its whole lifetime.
///
/// The owning node's own entry ("self entry") is seeded once at heartbeat 0 and
/// is exempt from eviction forever.
#[derive(Debug, Clone)]
pub struct MembershipTable {
    local: NodeId,
    entries: Vec<MemberEntry>,
}

impl MembershipTable {
    /// Creates an empty table owned by `local`. Call [`seed_local`] once the
    /// owning node initializes.
    ///
    /// [`seed_local`]: MembershipTable::seed_local
    pub fn new(local: NodeId) -> Self {
        Self {
            local,
            entries: Vec::new(),
        }
    }

    pub fn local(&self) -> NodeId {
        self.local
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identity: NodeId) -> bool {
        self.get(identity).is_some()
    }

    pub fn get(&self, identity: NodeId) -> Option<&MemberEntry> {
        self.entries.iter().find(|e| e.identity == identity)
    }

    /// Installs the self entry at heartbeat 0. Part of node initialization,
    /// so it is not reported as a discovery.
    pub fn seed_local(&mut self, now: i64) {
        debug_assert!(!self.contains(self.local));
        self.entries.push(MemberEntry {
            identity: self.local,
            heartbeat: 0,
            last_update: now,
        });
    }

    /// Merges a reported heartbeat under the last-writer-wins rule.
    ///
    /// Unknown identities are inserted. Known identities are updated only when
    /// the incoming heartbeat is strictly greater than the stored one; a
    /// rejected merge leaves the entry untouched, including `last_update`, so a
    /// sender whose logical clock stalls does not keep resetting its own
    /// failure-detection window.
    pub fn upsert(&mut self, identity: NodeId, heartbeat: i64, now: i64) -> UpsertOutcome {
        match self.entries.iter_mut().find(|e| e.identity == identity) {
            None => {
                self.entries.push(MemberEntry {
                    identity,
                    heartbeat,
                    last_update: now,
                });
                UpsertOutcome::Inserted
            }
            Some(entry) if heartbeat > entry.heartbeat => {
                debug!(
                    "Updating {}: heartbeat {} -> {}",
                    identity, entry.heartbeat, heartbeat
                );
                entry.heartbeat = heartbeat;
                entry.last_update = now;
                UpsertOutcome::Updated
            }
            Some(_) => UpsertOutcome::Rejected,
        }
    }

    /// Removes every non-self entry with `now - last_update > timeout` and
    /// returns the evicted identities. The self entry is always retained.
    pub fn evict_stale(&mut self, now: i64, timeout: i64) -> Vec<NodeId> {
        let local = self.local;
        let mut evicted = Vec::new();

        self.entries.retain(|entry| {
            if entry.identity == local || now - entry.last_update <= timeout {
                true
            } else {
                evicted.push(entry.identity);
                false
            }
        });

        evicted
    }

    /// Draws one identity uniformly at random from the whole table.
    ///
    /// The local node is part of the sample space; callers that draw it end up
    /// gossiping to themselves, which the protocol tolerates as a wasted round.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<NodeId> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.entries.len());
        Some(self.entries[idx].identity)
    }

    /// Defensive copy of the current entries, used to build gossip payloads.
    pub fn snapshot(&self) -> Vec<MemberEntry> {
        self.entries.clone()
    }
}
