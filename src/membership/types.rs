use serde::{Deserialize, Serialize};

use crate::wire::NodeId;

/// One known member of the cluster.
///
/// `heartbeat` is the member's self-reported logical clock and only ever
/// increases once stored. `last_update` is the *local* virtual time at which
/// that heartbeat was accepted; it drives failure detection and is never
/// derived from remote data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry {
    pub identity: NodeId,
    pub heartbeat: i64,
    pub last_update: i64,
}

/// Result of merging a reported heartbeat into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The identity was unknown; a fresh entry was created.
    Inserted,
    /// The reported heartbeat was strictly newer; entry and timestamp updated.
    Updated,
    /// Stale or duplicate heartbeat; nothing was mutated.
    Rejected,
}
