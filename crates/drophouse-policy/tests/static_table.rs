//! Integration tests for the crazyhouse static table.
//!
//! Verifies that the embedded table agrees with a fresh build from the label
//! list, and that the table can be shared and used for dense/sparse
//! translation across threads.

use std::thread;

use drophouse_core::Move;
use drophouse_policy::{
    CRAZYHOUSE_LABEL_COUNT, FLAT_PLANE_IDX, POLICY_SIZE, PlaneCategory, PolicyTable,
    crazyhouse_labels, crazyhouse_moves, decode, resolve,
};

// ── Embedded table ────────────────────────────────────────────────────────────

#[test]
fn rebuilt_table_matches_embedded_table() {
    let table = PolicyTable::crazyhouse().unwrap();
    assert_eq!(table.len(), CRAZYHOUSE_LABEL_COUNT);
    assert_eq!(
        table.to_raw(),
        FLAT_PLANE_IDX,
        "rebuilding from crazyhouse_labels() must reproduce FLAT_PLANE_IDX"
    );
}

#[test]
fn embedded_table_wraps_without_loss() {
    let wrapped = PolicyTable::from_raw(&FLAT_PLANE_IDX).unwrap();
    let built = PolicyTable::crazyhouse().unwrap();
    assert_eq!(wrapped, built);
}

#[test]
fn entries_are_in_range() {
    for (i, &entry) in FLAT_PLANE_IDX.iter().enumerate() {
        assert!(
            (entry as usize) < POLICY_SIZE,
            "entry {i} = {entry} is outside the 81x8x8 address space"
        );
    }
}

#[test]
fn known_entries() {
    // a1b1: east slide of one from a1.
    assert_eq!(FLAT_PLANE_IDX[0], 14 * 64);
    // a1a2: north slide of one from a1.
    assert_eq!(FLAT_PLANE_IDX[7], 0);
    // a2a1q: queen push backward from a2.
    assert_eq!(FLAT_PLANE_IDX[1792], 74 * 64 + 8);
    // Q@h8: last label, last cell.
    assert_eq!(FLAT_PLANE_IDX[CRAZYHOUSE_LABEL_COUNT - 1], 5183);
}

#[test]
fn rebuild_is_deterministic() {
    let first = PolicyTable::build(crazyhouse_labels()).unwrap();
    let second = PolicyTable::build(crazyhouse_labels()).unwrap();
    assert_eq!(first, second);
}

// ── Category layout ───────────────────────────────────────────────────────────

#[test]
fn label_blocks_land_in_their_categories() {
    for mv in crazyhouse_moves() {
        let category = resolve(mv).unwrap().category();
        let expected = if mv.is_drop() {
            vec![PlaneCategory::Drop]
        } else if mv.is_promotion() {
            vec![PlaneCategory::Promotion]
        } else {
            vec![PlaneCategory::QueenLike, PlaneCategory::Knight]
        };
        assert!(
            expected.contains(&category),
            "{mv} resolved to {category:?}"
        );
    }
}

#[test]
fn every_label_decodes_to_itself() {
    let table = PolicyTable::crazyhouse().unwrap();
    for (position, label) in crazyhouse_labels().iter().enumerate() {
        let flat = table.get(position).unwrap();
        let mv = decode(flat).unwrap();
        assert_eq!(&mv.to_label(), label, "label #{position}");
        assert_eq!(table.position_of(flat), Some(position));
    }
}

// ── Sharing and translation ───────────────────────────────────────────────────

#[test]
fn shared_table_serves_concurrent_readers() {
    let table = PolicyTable::crazyhouse().unwrap();
    let labels = crazyhouse_labels();

    thread::scope(|s| {
        for chunk in labels.chunks(CRAZYHOUSE_LABEL_COUNT / 4 + 1) {
            let table = &table;
            s.spawn(move || {
                for label in chunk {
                    let mv: Move = label.parse().unwrap();
                    let flat = resolve(mv).unwrap().flat();
                    assert!(table.position_of(flat).is_some(), "{label} missing");
                }
            });
        }
    });
}

#[test]
fn dense_policy_roundtrips_through_planes() {
    let table = PolicyTable::crazyhouse().unwrap();
    let dense: Vec<f32> = (0..table.len()).map(|i| i as f32 / table.len() as f32).collect();

    let planes = table.scatter(&dense);
    assert_eq!(planes.len(), POLICY_SIZE);
    assert_eq!(table.gather(&planes), dense);
}
