//! Policy planes: the 81 move-geometry categories and their indexers.
//!
//! ```text
//! Queen-like  | 56 planes |  0..=55
//! Knight      |  8 planes | 56..=63
//! Promotion   | 12 planes | 64..=75
//! Drop        |  5 planes | 76..=80
//! ```
//!
//! Each indexer maps one category of move onto its contiguous range. The
//! ranges are disjoint and together cover every plane.

use std::ops::Range;

use drophouse_core::PieceKind;

mod drops;
mod knight;
mod promotion;
mod queen;

pub use drops::drop_plane;
pub use knight::{KNIGHT_OFFSETS, knight_plane};
pub use promotion::promotion_plane;
pub use queen::{Direction, queen_plane, queen_plane_on};

/// Total number of planes.
pub const PLANE_COUNT: usize = 81;

/// First plane of each category.
pub const QUEEN_OFFSET: u8 = 0;
pub const KNIGHT_OFFSET: u8 = 56;
pub const PROMOTION_OFFSET: u8 = 64;
pub const DROP_OFFSET: u8 = 76;

/// The four disjoint move categories of the plane layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneCategory {
    QueenLike,
    Knight,
    Promotion,
    Drop,
}

impl PlaneCategory {
    /// All categories in plane order.
    pub const ALL: [PlaneCategory; 4] = [
        PlaneCategory::QueenLike,
        PlaneCategory::Knight,
        PlaneCategory::Promotion,
        PlaneCategory::Drop,
    ];

    /// The planes owned by this category.
    pub const fn planes(self) -> Range<u8> {
        match self {
            PlaneCategory::QueenLike => QUEEN_OFFSET..KNIGHT_OFFSET,
            PlaneCategory::Knight => KNIGHT_OFFSET..PROMOTION_OFFSET,
            PlaneCategory::Promotion => PROMOTION_OFFSET..DROP_OFFSET,
            PlaneCategory::Drop => DROP_OFFSET..PLANE_COUNT as u8,
        }
    }

    /// The category owning `plane`, or `None` past the last plane.
    pub const fn of(plane: u8) -> Option<PlaneCategory> {
        if plane < KNIGHT_OFFSET {
            Some(PlaneCategory::QueenLike)
        } else if plane < PROMOTION_OFFSET {
            Some(PlaneCategory::Knight)
        } else if plane < DROP_OFFSET {
            Some(PlaneCategory::Promotion)
        } else if (plane as usize) < PLANE_COUNT {
            Some(PlaneCategory::Drop)
        } else {
            None
        }
    }
}

/// Normalised piece id used by the promotion and drop indexers.
///
/// This is the one place external piece numbering is folded into `0..6`.
#[inline]
pub(crate) const fn piece_id(kind: PieceKind) -> u8 {
    kind.rank() % PieceKind::COUNT as u8
}

#[cfg(test)]
mod tests {
    use super::{PLANE_COUNT, PlaneCategory};

    #[test]
    fn categories_cover_all_planes_disjointly() {
        let mut owner = [None; PLANE_COUNT];
        for category in PlaneCategory::ALL {
            for plane in category.planes() {
                assert!(
                    owner[plane as usize].is_none(),
                    "plane {plane} claimed twice"
                );
                owner[plane as usize] = Some(category);
            }
        }
        assert!(owner.iter().all(Option::is_some), "some plane has no category");
    }

    #[test]
    fn category_sizes() {
        assert_eq!(PlaneCategory::QueenLike.planes().len(), 56);
        assert_eq!(PlaneCategory::Knight.planes().len(), 8);
        assert_eq!(PlaneCategory::Promotion.planes().len(), 12);
        assert_eq!(PlaneCategory::Drop.planes().len(), 5);
    }

    #[test]
    fn category_of_matches_ranges() {
        for category in PlaneCategory::ALL {
            for plane in category.planes() {
                assert_eq!(PlaneCategory::of(plane), Some(category));
            }
        }
        assert_eq!(PlaneCategory::of(81), None);
    }
}
