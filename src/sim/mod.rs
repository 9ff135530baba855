//! Simulation Module
//!
//! Runs whole clusters in-process, deterministically. The protocol engine only
//! ever sees the `Transport` trait; this module supplies the emulated network
//! behind it and the driver that owns the virtual clock.
//!
//! ## Components
//! - **`InMemoryNetwork`**: Per-destination mailboxes with optional seeded
//!   message loss. Counts sent / delivered / dropped packets.
//! - **`SimCluster`**: Builds N nodes (node 1 is the introducer), then advances
//!   them round-robin: each tick bumps the virtual clock, hands every node its
//!   mailbox, and runs its protocol cycle.
//!
//! Identical seeds and schedules replay identically, which is what makes the
//! convergence and failure-detection tests reproducible.

pub mod cluster;
pub mod network;
pub mod types;

pub use cluster::SimCluster;
pub use network::InMemoryNetwork;
pub use types::{ClusterSummary, NodeSummary};
