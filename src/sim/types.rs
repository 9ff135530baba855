use serde::Serialize;

use crate::membership::MemberEntry;
use crate::protocol::NodeState;
use crate::wire::NodeId;

/// Point-in-time view of one simulated node, for reports and assertions.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary {
    pub identity: NodeId,
    pub state: NodeState,
    pub heartbeat: i64,
    pub failed: bool,
    pub members: Vec<MemberEntry>,
}

/// Point-in-time view of the whole simulated cluster.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterSummary {
    pub time: i64,
    pub nodes: Vec<NodeSummary>,
}
