//! Policy addresses: (plane, row, column) triples and their flat form.

use std::fmt;

use drophouse_core::{BOARD_SIZE, BoardPosition, Square};

use crate::plane::{PLANE_COUNT, PlaneCategory};

/// Number of cells in one plane.
pub const PLANE_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Size of the full policy address space (81 x 8 x 8).
pub const POLICY_SIZE: usize = PLANE_COUNT * PLANE_CELLS;

/// A cell of the policy tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PolicyCoordinate {
    pub plane: u8,
    pub position: BoardPosition,
}

impl PolicyCoordinate {
    /// Create a coordinate for `plane` at `square`'s cell.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `plane < 81`.
    #[inline]
    pub const fn new(plane: u8, square: Square) -> PolicyCoordinate {
        debug_assert!((plane as usize) < PLANE_COUNT);
        PolicyCoordinate {
            plane,
            position: square.position(),
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.position.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.position.column
    }

    /// The category this coordinate's plane belongs to.
    pub const fn category(self) -> PlaneCategory {
        match PlaneCategory::of(self.plane) {
            Some(category) => category,
            None => PlaneCategory::Drop,
        }
    }

    /// Flatten as `plane * 64 + row * 8 + column`.
    #[inline]
    pub const fn flat(self) -> FlatIndex {
        FlatIndex(
            self.plane as u16 * PLANE_CELLS as u16
                + self.position.row as u16 * BOARD_SIZE as u16
                + self.position.column as u16,
        )
    }

    /// The plane-major boolean tensor with only this cell set.
    pub fn one_hot(self) -> Vec<bool> {
        let mut planes = vec![false; POLICY_SIZE];
        planes[self.flat().index()] = true;
        planes
    }
}

impl fmt::Display for PolicyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.plane, self.row(), self.column())
    }
}

/// A single-integer address into the policy tensor, in `0..5184`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlatIndex(u16);

impl FlatIndex {
    /// Create a flat index, returning `None` if out of range.
    #[inline]
    pub const fn new(index: usize) -> Option<FlatIndex> {
        if index < POLICY_SIZE {
            Some(FlatIndex(index as u16))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Split back into (plane, row, column).
    pub const fn coordinate(self) -> PolicyCoordinate {
        let cell = self.0 as usize % PLANE_CELLS;
        PolicyCoordinate {
            plane: (self.0 as usize / PLANE_CELLS) as u8,
            position: BoardPosition {
                row: (cell / BOARD_SIZE as usize) as u8,
                column: (cell % BOARD_SIZE as usize) as u8,
            },
        }
    }
}

impl fmt::Display for FlatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use drophouse_core::Square;

    use super::{FlatIndex, POLICY_SIZE, PolicyCoordinate};

    #[test]
    fn address_space_size() {
        assert_eq!(POLICY_SIZE, 5184);
    }

    #[test]
    fn flatten_formula() {
        let coord = PolicyCoordinate::new(13, Square::A1);
        assert_eq!(coord.flat().index(), 13 * 64);
        let coord = PolicyCoordinate::new(80, Square::H8);
        assert_eq!(coord.flat().index(), 5183);
        let coord = PolicyCoordinate::new(2, Square::E4);
        assert_eq!(coord.flat().index(), 2 * 64 + 3 * 8 + 4);
    }

    #[test]
    fn flatten_is_injective_and_invertible() {
        let mut seen = HashSet::new();
        for plane in 0..81u8 {
            for sq in Square::all() {
                let coord = PolicyCoordinate::new(plane, sq);
                let flat = coord.flat();
                assert!(flat.index() < POLICY_SIZE);
                assert!(seen.insert(flat), "{coord} collides");
                assert_eq!(flat.coordinate(), coord);
            }
        }
        assert_eq!(seen.len(), POLICY_SIZE);
    }

    #[test]
    fn flat_index_bounds() {
        assert!(FlatIndex::new(5183).is_some());
        assert!(FlatIndex::new(5184).is_none());
    }

    #[test]
    fn one_hot_sets_single_cell() {
        let coord = PolicyCoordinate::new(77, Square::C3);
        let planes = coord.one_hot();
        assert_eq!(planes.len(), POLICY_SIZE);
        assert_eq!(planes.iter().filter(|&&b| b).count(), 1);
        assert!(planes[77 * 64 + 2 * 8 + 2]);
    }
}
