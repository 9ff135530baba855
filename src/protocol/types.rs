use serde::{Deserialize, Serialize};
use tracing::info;

use crate::wire::NodeId;

/// Lifecycle of a node with respect to the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    /// No identity assigned yet.
    Uninitialized,
    /// Identity assigned and table seeded, join handshake not yet completed.
    Initialized,
    /// Full group member; gossip and failure detection are active.
    InGroup,
}

/// Protocol configuration shared by every node of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Well-known bootstrap identity new nodes contact to join the group.
    pub introducer: NodeId,
    /// Failure-detection timeout, in virtual-time units.
    pub failure_timeout: i64,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            introducer: NodeId::new(1, 0),
            failure_timeout: 2,
        }
    }
}

/// Outbound packet hand-off. Fire-and-forget: the implementation may lose,
/// reorder, or delay anything it is given.
pub trait Transport {
    fn send(&mut self, from: NodeId, to: NodeId, payload: Vec<u8>);
}

/// Observational sink for membership changes. Nothing the engine does depends
/// on it.
pub trait EventLog {
    fn member_added(&mut self, local: NodeId, added: NodeId);
    fn member_removed(&mut self, local: NodeId, removed: NodeId);
}

/// Default event sink: structured log lines, one per membership change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn member_added(&mut self, local: NodeId, added: NodeId) {
        info!("{}: member {} added", local, added);
    }

    fn member_removed(&mut self, local: NodeId, removed: NodeId) {
        info!("{}: member {} removed", local, removed);
    }
}
