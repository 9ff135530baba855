use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

use crate::protocol::Transport;
use crate::wire::NodeId;

/// Emulated packet network: every send lands in the destination's mailbox,
/// unless the seeded loss roll drops it first.
///
/// Delivery within one mailbox preserves send order; across nodes there is no
/// ordering, since each node drains only its own mailbox.
pub struct InMemoryNetwork {
    mailboxes: HashMap<NodeId, VecDeque<Vec<u8>>>,
    loss: f64,
    rng: StdRng,
    pub sent: u64,
    pub delivered: u64,
    pub dropped: u64,
}

impl InMemoryNetwork {
    /// Loss-free network.
    pub fn new(seed: u64) -> Self {
        Self::with_loss(seed, 0.0)
    }

    /// Network dropping each packet independently with probability `loss`.
    pub fn with_loss(seed: u64, loss: f64) -> Self {
        Self {
            mailboxes: HashMap::new(),
            loss,
            rng: StdRng::seed_from_u64(seed),
            sent: 0,
            delivered: 0,
            dropped: 0,
        }
    }

    /// Removes and returns everything queued for `to`, in send order.
    pub fn take_inbox(&mut self, to: NodeId) -> VecDeque<Vec<u8>> {
        self.mailboxes.remove(&to).unwrap_or_default()
    }
}

impl Transport for InMemoryNetwork {
    fn send(&mut self, from: NodeId, to: NodeId, payload: Vec<u8>) {
        self.sent += 1;

        if self.loss > 0.0 && self.rng.gen::<f64>() < self.loss {
            self.dropped += 1;
            debug!("dropping packet {} -> {}", from, to);
            return;
        }

        self.delivered += 1;
        self.mailboxes.entry(to).or_default().push_back(payload);
    }
}
