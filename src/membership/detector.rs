use super::table::MembershipTable;
use crate::wire::NodeId;

/// Eviction policy seam between the scheduler and the table.
///
/// The shipped policy is a single-phase timeout; a suspect/confirm variant can
/// replace it without any scheduler changes.
pub trait FailureDetector {
    /// Runs one detection pass, removing members considered failed, and
    /// returns the evicted identities.
    fn sweep(&self, table: &mut MembershipTable, now: i64) -> Vec<NodeId>;
}

/// Direct single-phase detection: a member that has not produced an accepted
/// heartbeat within `timeout` virtual-time units is evicted outright.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutFailureDetector {
    timeout: i64,
}

impl TimeoutFailureDetector {
    pub fn new(timeout: i64) -> Self {
        Self { timeout }
    }
}

impl FailureDetector for TimeoutFailureDetector {
    fn sweep(&self, table: &mut MembershipTable, now: i64) -> Vec<NodeId> {
        table.evict_stale(now, self.timeout)
    }
}
