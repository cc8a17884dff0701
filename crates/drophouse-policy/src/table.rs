//! Static label table: the flat policy address of every label in a list.
//!
//! The table is built once from an ordered label list and then shared
//! read-only. It translates between the dense per-label probability vector
//! (one entry per label) and the sparse 81x8x8 plane tensor in O(1) per entry.

use drophouse_core::Move;
use tracing::{debug, warn};

use crate::coordinate::{FlatIndex, POLICY_SIZE};
use crate::error::TableError;
use crate::labels::crazyhouse_labels;
use crate::resolve::encode;

// ── Compile-time assertion: the table is shared across threads ───────────────
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn check() {
        assert_send_sync::<PolicyTable>();
    }
    let _ = check;
};

/// The flat index of each label in a label list, plus the inverse map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    flat: Vec<FlatIndex>,
    position: Vec<Option<u32>>,
}

impl PolicyTable {
    /// Build the table for an ordered label list.
    ///
    /// Fails on the first label that does not parse or does not encode. No
    /// label is skipped, so a successful table always lines up with the list
    /// it was built from. Repeated labels each get their own entry.
    pub fn build<I, S>(labels: I) -> Result<PolicyTable, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = PolicyTable::empty();
        for label in labels {
            let label = label.as_ref();
            let position = table.flat.len();
            let mv = Move::from_label(label).map_err(|source| {
                warn!(position, label, error = %source, "unparsable policy label");
                TableError::Label {
                    position,
                    label: label.to_string(),
                    source,
                }
            })?;
            table.push(mv, label)?;
        }
        debug!(labels = table.len(), "built policy table");
        Ok(table)
    }

    /// Build the table for an ordered list of move records.
    pub fn from_moves(moves: &[Move]) -> Result<PolicyTable, TableError> {
        let mut table = PolicyTable::empty();
        for &mv in moves {
            table.push(mv, &mv.to_label())?;
        }
        debug!(labels = table.len(), "built policy table");
        Ok(table)
    }

    /// Build the table for the canonical crazyhouse label list.
    pub fn crazyhouse() -> Result<PolicyTable, TableError> {
        PolicyTable::build(crazyhouse_labels())
    }

    /// Wrap a precomputed table, such as [`FLAT_PLANE_IDX`](crate::FLAT_PLANE_IDX).
    ///
    /// Returns `None` if any entry is out of range.
    pub fn from_raw(raw: &[u16]) -> Option<PolicyTable> {
        let mut table = PolicyTable::empty();
        for &entry in raw {
            table.record(FlatIndex::new(entry as usize)?);
        }
        Some(table)
    }

    /// Append `flat`; the inverse map keeps the first label at each index.
    fn record(&mut self, flat: FlatIndex) {
        let position = self.flat.len() as u32;
        self.position[flat.index()].get_or_insert(position);
        self.flat.push(flat);
    }

    fn empty() -> PolicyTable {
        PolicyTable {
            flat: Vec::new(),
            position: vec![None; POLICY_SIZE],
        }
    }

    fn push(&mut self, mv: Move, label: &str) -> Result<(), TableError> {
        let position = self.flat.len();
        let flat = encode(mv).map_err(|source| {
            warn!(position, label, error = %source, "unencodable policy label");
            TableError::Encode {
                position,
                label: label.to_string(),
                source,
            }
        })?;

        self.record(flat);
        Ok(())
    }

    /// Number of labels.
    #[inline]
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    /// Flat index of the label at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Option<FlatIndex> {
        self.flat.get(position).copied()
    }

    /// Label position addressed by `flat`, if any label maps there.
    ///
    /// When a label is repeated, this is the position of its first occurrence.
    #[inline]
    pub fn position_of(&self, flat: FlatIndex) -> Option<usize> {
        self.position[flat.index()].map(|p| p as usize)
    }

    /// The flat indices in label order as plain integers.
    pub fn to_raw(&self) -> Vec<u16> {
        self.flat.iter().map(|f| f.index() as u16).collect()
    }

    /// Spread a dense per-label vector over the full plane tensor.
    ///
    /// Cells no label maps to are left at `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `dense` does not have one entry per label.
    pub fn scatter<T: Copy + Default>(&self, dense: &[T]) -> Vec<T> {
        assert_eq!(dense.len(), self.len(), "dense vector length must match label count");
        let mut planes = vec![T::default(); POLICY_SIZE];
        for (&flat, &value) in self.flat.iter().zip(dense) {
            planes[flat.index()] = value;
        }
        planes
    }

    /// Collect the per-label entries out of a full plane tensor.
    ///
    /// # Panics
    ///
    /// Panics if `planes` does not cover the whole 81x8x8 address space.
    pub fn gather<T: Copy>(&self, planes: &[T]) -> Vec<T> {
        assert_eq!(planes.len(), POLICY_SIZE, "plane tensor must have 5184 cells");
        self.flat.iter().map(|flat| planes[flat.index()]).collect()
    }
}

#[cfg(test)]
mod tests {
    use drophouse_core::{Move, PieceKind, Square};

    use super::PolicyTable;
    use crate::coordinate::{FlatIndex, POLICY_SIZE};
    use crate::error::{EncodeError, TableError};

    #[test]
    fn small_table() {
        let table = PolicyTable::build(["a1h8", "b1c3", "e7e8q", "N@d5"]).unwrap();
        let raw = table.to_raw();
        assert_eq!(raw, vec![13 * 64, 56 * 64 + 1, 74 * 64 + 52, 77 * 64 + 35]);
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn empty_label_list() {
        let table = PolicyTable::build(Vec::<String>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn inverse_lookup() {
        let table = PolicyTable::build(["e2e4", "g1f3"]).unwrap();
        for position in 0..table.len() {
            let flat = table.get(position).unwrap();
            assert_eq!(table.position_of(flat), Some(position));
        }
        assert_eq!(table.position_of(FlatIndex::new(0).unwrap()), None);
    }

    #[test]
    fn fails_fast_on_bad_label() {
        let err = PolicyTable::build(["e2e4", "e2", "K@e4"]).unwrap_err();
        assert!(matches!(err, TableError::Label { position: 1, .. }));
    }

    #[test]
    fn fails_fast_on_unencodable_label() {
        let err = PolicyTable::build(["e2e4", "e4e4", "K@e4"]).unwrap_err();
        match err {
            TableError::Encode {
                position, source, ..
            } => {
                assert_eq!(position, 1);
                assert!(matches!(source, EncodeError::InvalidGeometry(_)));
            }
            other => panic!("expected encode error, got {other:?}"),
        }
    }

    #[test]
    fn king_drop_label_rejected() {
        let err = PolicyTable::build(["K@e4"]).unwrap_err();
        assert!(matches!(
            err,
            TableError::Encode {
                source: EncodeError::InvalidDrop { .. },
                ..
            }
        ));
    }

    #[test]
    fn repeated_labels_keep_their_positions() {
        let table = PolicyTable::build(["e2e4", "d2d4", "e2e4"]).unwrap();
        let raw = table.to_raw();
        assert_eq!(table.len(), 3);
        assert_eq!(raw[0], raw[2]);
        assert_ne!(raw[0], raw[1]);
        assert_eq!(table.position_of(table.get(2).unwrap()), Some(0));
    }

    #[test]
    fn from_moves_matches_build() {
        let moves = [
            Move::new(Square::E2, Square::E4),
            Move::new_drop(PieceKind::Pawn, Square::E4),
        ];
        let from_moves = PolicyTable::from_moves(&moves).unwrap();
        let built = PolicyTable::build(["e2e4", "P@e4"]).unwrap();
        assert_eq!(from_moves, built);
    }

    #[test]
    fn raw_roundtrip() {
        let table = PolicyTable::build(["a1b1", "a1c1", "Q@h8"]).unwrap();
        assert_eq!(PolicyTable::from_raw(&table.to_raw()), Some(table));
        assert_eq!(PolicyTable::from_raw(&[5184]), None);
        let repeated = PolicyTable::from_raw(&[3, 3]).unwrap();
        assert_eq!(repeated.len(), 2);
        assert_eq!(repeated.position_of(FlatIndex::new(3).unwrap()), Some(0));
    }

    #[test]
    fn scatter_then_gather() {
        let table = PolicyTable::build(["a1h8", "b1c3", "N@d5"]).unwrap();
        let dense = [0.5f32, 0.25, 0.25];
        let planes = table.scatter(&dense);
        assert_eq!(planes.len(), POLICY_SIZE);
        assert_eq!(planes[13 * 64], 0.5);
        assert_eq!(planes.iter().filter(|&&p| p != 0.0).count(), 3);
        assert_eq!(table.gather(&planes), dense.to_vec());
    }

    #[test]
    #[should_panic(expected = "dense vector length must match label count")]
    fn scatter_rejects_wrong_length() {
        let table = PolicyTable::build(["a1h8"]).unwrap();
        let _ = table.scatter(&[1.0f32, 2.0]);
    }
}
