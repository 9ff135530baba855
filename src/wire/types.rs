use serde::{Deserialize, Serialize};
use std::fmt;

use super::codec::WireError;

/// Length of a raw node address: 4-byte id followed by 2-byte port.
pub const ADDRESS_LEN: usize = 6;

/// Identity of a cluster node, derived from its network address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub id: u32,
    pub port: u16,
}

impl NodeId {
    pub fn new(id: u32, port: u16) -> Self {
        Self { id, port }
    }

    /// Parses an identity from raw address bytes (little-endian id, then port).
    ///
    /// Fails if the buffer is not exactly [`ADDRESS_LEN`] bytes long.
    pub fn from_address_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != ADDRESS_LEN {
            return Err(WireError::BadAddress { actual: bytes.len() });
        }
        let id = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let port = u16::from_le_bytes([bytes[4], bytes[5]]);
        Ok(Self { id, port })
    }

    pub fn to_address_bytes(&self) -> [u8; ADDRESS_LEN] {
        let mut out = [0u8; ADDRESS_LEN];
        out[..4].copy_from_slice(&self.id.to_le_bytes());
        out[4..].copy_from_slice(&self.port.to_le_bytes());
        out
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.port)
    }
}

/// Discriminant of a wire message.
///
/// Unknown discriminants are carried through decoding so the dispatcher can
/// log and ignore them instead of failing the whole receive path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    JoinRequest,
    JoinReply,
    Ping,
    Unknown(u8),
}

impl MessageKind {
    pub fn discriminant(&self) -> u8 {
        match self {
            MessageKind::JoinRequest => 0,
            MessageKind::JoinReply => 1,
            MessageKind::Ping => 2,
            MessageKind::Unknown(raw) => *raw,
        }
    }

    pub fn from_discriminant(raw: u8) -> Self {
        match raw {
            0 => MessageKind::JoinRequest,
            1 => MessageKind::JoinReply,
            2 => MessageKind::Ping,
            other => MessageKind::Unknown(other),
        }
    }
}

/// A protocol message as it exists between encode and decode.
///
/// `sender` and `heartbeat` describe the member entry the message carries:
/// for a gossip Ping that is the gossiped entry, not necessarily the node
/// that physically sent the packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub sender: NodeId,
    pub heartbeat: i64,
}
