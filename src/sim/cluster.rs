use anyhow::Result;
use tracing::info;

use super::network::InMemoryNetwork;
use super::types::{ClusterSummary, NodeSummary};
use crate::protocol::{Node, ProtocolConfig, TracingEventLog};
use crate::wire::NodeId;

/// A simulated cluster of `N` nodes sharing one emulated network and one
/// virtual clock.
///
/// Node `i` gets identity `id = i + 1, port = 0`, so the first node matches the
/// default introducer identity and bootstraps the group. Each tick advances the
/// clock by one unit and drives every node round-robin: mailbox delivery first,
/// then that node's protocol cycle.
pub struct SimCluster {
    pub nodes: Vec<Node>,
    pub network: InMemoryNetwork,
    time: i64,
}

impl SimCluster {
    pub fn new(count: usize, config: ProtocolConfig, seed: u64, loss: f64) -> Result<Self> {
        let mut nodes = Vec::with_capacity(count);

        for i in 0..count {
            let address = NodeId::new(i as u32 + 1, 0).to_address_bytes();
            let node = Node::new(
                &address,
                config,
                seed.wrapping_add(i as u64 + 1),
                Box::new(TracingEventLog),
            )?;
            nodes.push(node);
        }

        Ok(Self {
            nodes,
            network: InMemoryNetwork::with_loss(seed, loss),
            time: 0,
        })
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    /// Bootstraps every node at virtual time 0. Join requests end up queued on
    /// the introducer's mailbox for its first cycle.
    pub fn start_all(&mut self) {
        for node in &mut self.nodes {
            node.start(self.time, &mut self.network);
        }
        info!("started {} nodes", self.nodes.len());
    }

    /// Advances the virtual clock one unit and runs one cycle on every node,
    /// round-robin. Each node first receives everything currently queued for
    /// it, then dispatches, sweeps, and gossips.
    pub fn tick(&mut self) {
        self.time += 1;

        for node in &mut self.nodes {
            for payload in self.network.take_inbox(node.identity) {
                node.deliver(payload);
            }
            node.run_cycle(self.time, &mut self.network);
        }
    }

    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }

    /// Marks one node failed (by index). Its state freezes; peers notice only
    /// through the failure detector.
    pub fn fail_node(&mut self, index: usize) {
        self.nodes[index].mark_failed();
    }

    pub fn summary(&self) -> ClusterSummary {
        ClusterSummary {
            time: self.time,
            nodes: self
                .nodes
                .iter()
                .map(|node| NodeSummary {
                    identity: node.identity,
                    state: node.state,
                    heartbeat: node.heartbeat,
                    failed: node.is_failed(),
                    members: node.table.snapshot(),
                })
                .collect(),
        }
    }
}
