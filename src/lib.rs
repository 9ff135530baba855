//! Gossip Cluster Membership Library
//!
//! This library crate implements a gossip-based cluster membership protocol:
//! each node maintains a local view of which other nodes are alive, pushes that
//! view to randomly chosen peers, and evicts peers that stop reporting.
//! It serves as the foundation for the simulation binary (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`wire`**: The binary wire protocol. Encodes the three message kinds
//!   (JoinRequest, JoinReply, Ping) into a fixed 16-byte layout and parses node
//!   identities from raw address bytes.
//! - **`membership`**: The membership table. Last-writer-wins heartbeat merging,
//!   timeout-based eviction of stale members, and uniform random peer sampling.
//! - **`protocol`**: The per-node engine. Drives the join handshake state
//!   machine, dispatches inbound messages, and runs the periodic
//!   gossip / failure-detection cycle against injected collaborators.
//! - **`sim`**: The in-process cluster harness. A lossy in-memory network plus a
//!   round-robin driver with a virtual clock, used by the binary and the
//!   integration tests to run whole clusters deterministically.

pub mod membership;
pub mod protocol;
pub mod sim;
pub mod wire;
