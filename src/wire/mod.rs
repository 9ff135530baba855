//! Wire Protocol Module
//!
//! Defines the binary interoperability contract between cluster nodes.
//!
//! ## Core Concepts
//! - **Fixed Layout**: Every message occupies exactly 16 bytes:
//!   kind discriminant (1), sender id (4, LE), sender port (2, LE),
//!   one padding byte, sender heartbeat (8, LE, signed).
//! - **Identity**: A `NodeId` is derived deterministically from a node's raw
//!   6-byte network address and is immutable once assigned.
//! - **Tolerant Decoding**: Truncated buffers are rejected with a `WireError`;
//!   unknown kind discriminants decode successfully and are left to the
//!   dispatcher to ignore.

pub mod codec;
pub mod types;

pub use codec::{decode, encode, WireError, MESSAGE_LEN};
pub use types::{Message, MessageKind, NodeId, ADDRESS_LEN};
