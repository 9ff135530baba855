//! Membership Module
//!
//! Maintains each node's local view of the cluster: who is known, how fresh
//! their last report is, and who has gone silent for too long.
//!
//! ## Core Mechanisms
//! - **Last-Writer-Wins Merge**: An incoming heartbeat is accepted only if it is
//!   strictly greater than the stored one; stale or duplicate heartbeats mutate
//!   nothing, not even the freshness timestamp.
//! - **Failure Detection**: A timeout sweep removes every non-self entry whose
//!   last accepted update is older than the configured timeout. The policy sits
//!   behind the `FailureDetector` trait so a richer suspect/confirm scheme could
//!   be swapped in without touching the scheduler.
//! - **Peer Sampling**: Gossip targets are drawn uniformly from the whole table
//!   (the local node included; a self-draw simply wastes the round).

pub mod detector;
pub mod table;
pub mod types;

pub use detector::{FailureDetector, TimeoutFailureDetector};
pub use table::MembershipTable;
pub use types::{MemberEntry, UpsertOutcome};

#[cfg(test)]
mod tests;
