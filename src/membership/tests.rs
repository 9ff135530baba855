//! Membership Module Tests
//!
//! Validates the merge, eviction, and sampling rules of the membership table.
//!
//! ## Test Scopes
//! - **Merge Logic**: Last-writer-wins acceptance, monotonicity, and the
//!   no-mutation guarantee for rejected heartbeats.
//! - **Failure Detection**: The exclusive eviction boundary and the self-entry
//!   exemption, directly and through the `FailureDetector` seam.
//! - **Sampling & Snapshots**: Reproducible peer draws and defensive copies.

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::membership::{
        FailureDetector, MembershipTable, TimeoutFailureDetector, UpsertOutcome,
    };
    use crate::wire::NodeId;

    fn node(id: u32) -> NodeId {
        NodeId::new(id, 0)
    }

    fn seeded_table() -> MembershipTable {
        let mut table = MembershipTable::new(node(1));
        table.seed_local(0);
        table
    }

    // ============================================================
    // MERGE TESTS
    // ============================================================

    #[test]
    fn test_upsert_inserts_unknown_identity() {
        let mut table = seeded_table();

        let outcome = table.upsert(node(2), 5, 10);

        assert_eq!(outcome, UpsertOutcome::Inserted);
        let entry = table.get(node(2)).unwrap();
        assert_eq!(entry.heartbeat, 5);
        assert_eq!(entry.last_update, 10);
    }

    #[test]
    fn test_upsert_accepts_strictly_greater_heartbeat() {
        let mut table = seeded_table();
        table.upsert(node(2), 5, 10);

        let outcome = table.upsert(node(2), 6, 11);

        assert_eq!(outcome, UpsertOutcome::Updated);
        let entry = table.get(node(2)).unwrap();
        assert_eq!(entry.heartbeat, 6);
        assert_eq!(entry.last_update, 11);
    }

    #[test]
    fn test_upsert_rejects_equal_and_lower_heartbeats() {
        let mut table = seeded_table();
        table.upsert(node(2), 5, 10);

        assert_eq!(table.upsert(node(2), 5, 20), UpsertOutcome::Rejected);
        assert_eq!(table.upsert(node(2), 4, 30), UpsertOutcome::Rejected);

        // A rejected merge mutates nothing, including the freshness timestamp.
        let entry = table.get(node(2)).unwrap();
        assert_eq!(entry.heartbeat, 5);
        assert_eq!(entry.last_update, 10);
    }

    #[test]
    fn test_stored_heartbeat_is_maximum_ever_presented() {
        let mut table = seeded_table();

        for (heartbeat, now) in [(3, 1), (7, 2), (2, 3), (7, 4), (9, 5), (1, 6)] {
            table.upsert(node(2), heartbeat, now);
        }

        let entry = table.get(node(2)).unwrap();
        assert_eq!(entry.heartbeat, 9);
        assert_eq!(entry.last_update, 5, "timestamp of the accepting call only");
    }

    #[test]
    fn test_no_duplicate_identities() {
        let mut table = seeded_table();
        table.upsert(node(2), 1, 0);
        table.upsert(node(2), 2, 1);
        table.upsert(node(2), 3, 2);

        assert_eq!(table.len(), 2); // self plus node 2
    }

    // ============================================================
    // EVICTION TESTS
    // ============================================================

    #[test]
    fn test_eviction_boundary_is_exclusive() {
        let mut table = seeded_table();
        table.upsert(node(2), 1, 10);

        // now - last_update == timeout: retained.
        assert!(table.evict_stale(12, 2).is_empty());
        assert!(table.contains(node(2)));

        // now - last_update > timeout: evicted.
        assert_eq!(table.evict_stale(13, 2), vec![node(2)]);
        assert!(!table.contains(node(2)));
    }

    #[test]
    fn test_eviction_never_removes_self_entry() {
        let mut table = seeded_table();

        for now in [1, 100, 1_000_000] {
            assert!(table.evict_stale(now, 0).is_empty());
        }
        assert!(table.contains(node(1)));
    }

    #[test]
    fn test_eviction_reports_all_stale_members() {
        let mut table = seeded_table();
        table.upsert(node(2), 1, 0);
        table.upsert(node(3), 1, 0);
        table.upsert(node(4), 1, 8);

        let evicted = table.evict_stale(10, 2);

        assert_eq!(evicted, vec![node(2), node(3)]);
        assert_eq!(table.len(), 2); // self and node 4
    }

    #[test]
    fn test_timeout_detector_delegates_to_table() {
        let mut table = seeded_table();
        table.upsert(node(2), 1, 0);

        let detector = TimeoutFailureDetector::new(2);

        assert!(detector.sweep(&mut table, 2).is_empty());
        assert_eq!(detector.sweep(&mut table, 3), vec![node(2)]);
    }

    // ============================================================
    // SAMPLING & SNAPSHOT TESTS
    // ============================================================

    #[test]
    fn test_sample_is_reproducible_with_seeded_rng() {
        let mut table = seeded_table();
        for id in 2..=6 {
            table.upsert(node(id), 1, 0);
        }

        let draws: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| table.sample(&mut rng).unwrap()).collect()
        };
        let replay: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| table.sample(&mut rng).unwrap()).collect()
        };

        assert_eq!(draws, replay);
    }

    #[test]
    fn test_sample_covers_whole_table_including_self() {
        let mut table = seeded_table();
        table.upsert(node(2), 1, 0);

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_self = false;
        let mut seen_peer = false;

        for _ in 0..200 {
            match table.sample(&mut rng).unwrap() {
                id if id == node(1) => seen_self = true,
                id if id == node(2) => seen_peer = true,
                other => panic!("sampled unknown identity {}", other),
            }
        }

        assert!(seen_self, "self is part of the sample space");
        assert!(seen_peer);
    }

    #[test]
    fn test_sample_on_empty_table_is_none() {
        let table = MembershipTable::new(node(1));
        let mut rng = StdRng::seed_from_u64(0);

        assert!(table.sample(&mut rng).is_none());
    }

    #[test]
    fn test_snapshot_is_a_defensive_copy() {
        let mut table = seeded_table();
        table.upsert(node(2), 1, 0);

        let snapshot = table.snapshot();
        table.upsert(node(3), 1, 0);
        table.upsert(node(2), 9, 1);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(
            snapshot.iter().find(|e| e.identity == node(2)).unwrap().heartbeat,
            1
        );
    }
}
