use bytes::{Buf, BufMut};
use thiserror::Error;

use super::types::{Message, MessageKind, NodeId};

/// Total length of an encoded message:
/// kind (1) + id (4) + port (2) + padding (1) + heartbeat (8).
pub const MESSAGE_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("truncated message: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("bad address: expected {} bytes, got {actual}", super::types::ADDRESS_LEN)]
    BadAddress { actual: usize },
}

/// Encodes a message into its fixed 16-byte wire form. Never fails.
pub fn encode(msg: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MESSAGE_LEN);
    buf.put_u8(msg.kind.discriminant());
    buf.put_u32_le(msg.sender.id);
    buf.put_u16_le(msg.sender.port);
    buf.put_u8(0); // padding
    buf.put_i64_le(msg.heartbeat);
    buf
}

/// Decodes a message from the first [`MESSAGE_LEN`] bytes of `buf`.
///
/// Rejects short buffers instead of reading past them; trailing bytes beyond
/// the fixed layout are ignored.
pub fn decode(buf: &[u8]) -> Result<Message, WireError> {
    if buf.len() < MESSAGE_LEN {
        return Err(WireError::Truncated {
            expected: MESSAGE_LEN,
            actual: buf.len(),
        });
    }

    let mut cursor = buf;
    let kind = MessageKind::from_discriminant(cursor.get_u8());
    let id = cursor.get_u32_le();
    let port = cursor.get_u16_le();
    cursor.advance(1); // padding
    let heartbeat = cursor.get_i64_le();

    Ok(Message {
        kind,
        sender: NodeId::new(id, port),
        heartbeat,
    })
}
