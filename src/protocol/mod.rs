//! Protocol Engine Module
//!
//! The per-node protocol engine: the join handshake state machine, the inbound
//! message dispatcher, and the per-cycle gossip / failure-detection scheduler.
//!
//! ## Cycle Anatomy
//! Each external tick drives one full cycle on a node:
//! 1. Drain and dispatch every buffered inbound message.
//! 2. Stop unless the node has reached `InGroup`.
//! 3. Sweep the membership table for members that went silent.
//! 4. Advance the local heartbeat and re-merge the self entry.
//! 5. Push the full table, one Ping per entry, to a single random peer.
//!
//! ## Collaborators
//! The engine never touches the system clock, the real network, or a global
//! randomness source. Time arrives as a virtual timestamp per cycle, packets
//! leave through the `Transport` trait, membership changes are reported through
//! the `EventLog` trait, and peer sampling uses a per-node seeded generator, so
//! identical schedules replay identically.

pub mod node;
pub mod types;

pub use node::Node;
pub use types::{EventLog, NodeState, ProtocolConfig, TracingEventLog, Transport};
