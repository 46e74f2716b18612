//! Property-based tests for the roster
//!
//! Uses proptest to verify that ordering and persistence hold for arbitrary
//! sequences of adds and updates.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use proptest::prelude::*;
use roster::Roster;
use roster::core::ports::RosterStore;
use roster::core::services::compare;

use crate::common::TestDir;

#[derive(Debug, Clone)]
enum Op {
    Add(String, String, String),
    Update(String, u8, u16),
}

fn id() -> impl Strategy<Value = String> {
    "[a-d][0-9]{0,1}"
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (id(), "[A-C][a-z]{0,3}", "[A-C][a-z]{0,3}").prop_map(|(i, l, f)| Op::Add(i, l, f)),
        (id(), 1u8..=6, 0u16..=999).prop_map(|(i, r, p)| Op::Update(i, r, p)),
    ]
}

fn apply(ops: &[Op]) -> (Roster, BTreeSet<String>) {
    let mut roster = Roster::new();
    let mut added = BTreeSet::new();
    for op in ops {
        match op {
            Op::Add(id, last, first) => {
                if roster.add(id, last, first).is_ok() {
                    added.insert(id.clone());
                }
            },
            Op::Update(id, round, points) => {
                let _ = roster.update(id, *round, *points);
            },
        }
    }
    (roster, added)
}

proptest! {
    /// The listing is always in rank order
    #[test]
    fn listing_is_sorted(ops in prop::collection::vec(op(), 0..60)) {
        let (roster, _) = apply(&ops);
        let listed: Vec<_> = roster.list().collect();
        for pair in listed.windows(2) {
            prop_assert_ne!(compare(pair[0], pair[1]), Ordering::Greater);
        }
    }

    /// Every distinct accepted ID is listed exactly once
    #[test]
    fn listing_holds_each_added_id_once(ops in prop::collection::vec(op(), 0..60)) {
        let (roster, added) = apply(&ops);
        let listed: Vec<String> = roster.list().map(|s| s.id.clone()).collect();
        prop_assert_eq!(listed.len(), added.len());
        prop_assert_eq!(listed.into_iter().collect::<BTreeSet<_>>(), added);
    }

    /// Writing then loading reproduces the same roster
    #[test]
    fn write_then_load_is_identity(ops in prop::collection::vec(op(), 1..40)) {
        let (roster, _) = apply(&ops);
        prop_assume!(!roster.is_empty());

        let dir = TestDir::new();
        let store = dir.store();
        store.write("roster.txt", &roster).unwrap();
        prop_assert_eq!(store.load("roster.txt").unwrap(), roster);
    }
}
