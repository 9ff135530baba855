use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

use super::types::{EventLog, NodeState, ProtocolConfig, Transport};
use crate::membership::{FailureDetector, MembershipTable, TimeoutFailureDetector, UpsertOutcome};
use crate::wire::{self, Message, MessageKind, NodeId};

/// One cluster node: its identity, join state, membership table, and inbound
/// queue, plus the injected collaborators that keep it deterministic.
///
/// All mutation happens inside [`start`] and [`run_cycle`]; there is no
/// internal parallelism and nothing here ever blocks.
///
/// [`start`]: Node::start
/// [`run_cycle`]: Node::run_cycle
pub struct Node {
    pub identity: NodeId,
    pub state: NodeState,
    pub heartbeat: i64,
    pub table: MembershipTable,
    pub config: ProtocolConfig,
    failed: bool,
    inbox: VecDeque<Vec<u8>>,
    rng: StdRng,
    detector: Box<dyn FailureDetector>,
    events: Box<dyn EventLog>,
}

impl Node {
    /// Creates a node from its raw address bytes.
    ///
    /// Identity assignment is the only fatal initialization step: an address
    /// that does not parse leaves the node unable to participate at all, so the
    /// error propagates to the caller to terminate with.
    pub fn new(
        address: &[u8],
        config: ProtocolConfig,
        seed: u64,
        events: Box<dyn EventLog>,
    ) -> Result<Self> {
        let identity =
            NodeId::from_address_bytes(address).context("failed to assign node identity")?;

        Ok(Self {
            identity,
            state: NodeState::Uninitialized,
            heartbeat: 0,
            table: MembershipTable::new(identity),
            config,
            failed: false,
            inbox: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
            detector: Box::new(TimeoutFailureDetector::new(config.failure_timeout)),
            events,
        })
    }

    /// Bootstraps the node: seeds the self entry and either starts the group
    /// (when this node is the introducer) or sends a JoinRequest to it.
    ///
    /// No retry or timeout guards the outstanding request; if it is lost the
    /// node stays `Initialized` forever. Loss tolerance in this protocol comes
    /// from repeated gossip, which an un-joined node is not yet part of.
    pub fn start(&mut self, now: i64, net: &mut dyn Transport) {
        debug_assert_eq!(self.state, NodeState::Uninitialized);

        self.table.seed_local(now);
        self.state = NodeState::Initialized;

        if self.identity == self.config.introducer {
            info!("{}: starting up group", self.identity);
            self.state = NodeState::InGroup;
        } else {
            info!(
                "{}: trying to join via introducer {}",
                self.identity, self.config.introducer
            );
            let request = Message {
                kind: MessageKind::JoinRequest,
                sender: self.identity,
                heartbeat: self.heartbeat,
            };
            net.send(self.identity, self.config.introducer, wire::encode(&request));
        }
    }

    /// Hands the node one inbound payload. A failed node drops it on the
    /// floor; messages are not queued for a node that will never cycle again.
    pub fn deliver(&mut self, payload: Vec<u8>) {
        if self.failed {
            debug!("{}: failed node dropping inbound message", self.identity);
            return;
        }
        self.inbox.push_back(payload);
    }

    /// Marks the node failed: every later `deliver` and `run_cycle` is a no-op
    /// and its in-memory state stays frozen as-is.
    pub fn mark_failed(&mut self) {
        info!("{}: marked failed, all protocol activity stops", self.identity);
        self.failed = true;
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Runs one protocol cycle at virtual time `now`.
    pub fn run_cycle(&mut self, now: i64, net: &mut dyn Transport) {
        if self.failed {
            return;
        }

        self.drain_inbox(now, net);

        if self.state != NodeState::InGroup {
            return;
        }

        for removed in self.detector.sweep(&mut self.table, now) {
            info!("{}: member {} timed out", self.identity, removed);
            self.events.member_removed(self.identity, removed);
        }

        self.heartbeat += 1;
        self.table.upsert(self.identity, self.heartbeat, now);

        self.gossip(net);
    }

    /// Dispatches every currently buffered inbound message, in arrival order.
    fn drain_inbox(&mut self, now: i64, net: &mut dyn Transport) {
        while let Some(payload) = self.inbox.pop_front() {
            match wire::decode(&payload) {
                Ok(msg) => self.dispatch(msg, now, net),
                Err(e) => warn!("{}: discarding malformed message: {}", self.identity, e),
            }
        }
    }

    fn dispatch(&mut self, msg: Message, now: i64, net: &mut dyn Transport) {
        match msg.kind {
            MessageKind::JoinRequest => {
                debug!("{}: received JoinRequest from {}", self.identity, msg.sender);
                let reply = Message {
                    kind: MessageKind::JoinReply,
                    sender: self.identity,
                    heartbeat: self.heartbeat,
                };
                net.send(self.identity, msg.sender, wire::encode(&reply));
                self.merge(msg.sender, msg.heartbeat, now);
            }
            MessageKind::JoinReply => {
                debug!("{}: received JoinReply from {}", self.identity, msg.sender);
                if self.state != NodeState::InGroup {
                    info!("{}: joined the group", self.identity);
                    self.state = NodeState::InGroup;
                }
                self.merge(msg.sender, msg.heartbeat, now);
            }
            MessageKind::Ping => {
                self.merge(msg.sender, msg.heartbeat, now);
            }
            MessageKind::Unknown(raw) => {
                debug!(
                    "{}: ignoring message with unrecognized kind {}",
                    self.identity, raw
                );
            }
        }
    }

    fn merge(&mut self, identity: NodeId, heartbeat: i64, now: i64) {
        match self.table.upsert(identity, heartbeat, now) {
            UpsertOutcome::Inserted => {
                info!("{}: discovered new member {}", self.identity, identity);
                self.events.member_added(self.identity, identity);
            }
            UpsertOutcome::Updated | UpsertOutcome::Rejected => {}
        }
    }

    /// Pushes the full table to one randomly sampled peer, one Ping per entry.
    /// Each Ping carries the gossiped entry's identity and heartbeat, so the
    /// receiver merges third-party state, not just this node's.
    fn gossip(&mut self, net: &mut dyn Transport) {
        let Some(target) = self.table.sample(&mut self.rng) else {
            return;
        };

        for entry in self.table.snapshot() {
            let ping = Message {
                kind: MessageKind::Ping,
                sender: entry.identity,
                heartbeat: entry.heartbeat,
            };
            net.send(self.identity, target, wire::encode(&ping));
        }

        debug!(
            "{}: gossiped {} entries to {}",
            self.identity,
            self.table.len(),
            target
        );
    }
}
