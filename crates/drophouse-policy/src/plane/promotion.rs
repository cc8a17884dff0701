//! Pawn promotions: 4 target pieces times 3 lateral directions.

use drophouse_core::PieceKind;

use crate::error::EncodeError;
use crate::plane::{PROMOTION_OFFSET, piece_id};
use crate::vector::MoveVector;

/// Plane for a promotion to `kind` along `vector` (`64..=75`).
///
/// Only the column delta matters: capture-left, push, capture-right map to
/// lateral offsets 0, 1, 2 within each piece's group of three.
pub fn promotion_plane(kind: PieceKind, vector: MoveVector) -> Result<u8, EncodeError> {
    let id = piece_id(kind);
    if !(1..=4).contains(&id) {
        return Err(EncodeError::InvalidPromotion { kind });
    }

    let lateral = vector.d_col.saturating_add(1);
    if !(0..=2).contains(&lateral) {
        return Err(EncodeError::vector(vector));
    }

    Ok(PROMOTION_OFFSET + (id - 1) * 3 + lateral as u8)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use drophouse_core::PieceKind;

    use super::promotion_plane;
    use crate::error::EncodeError;
    use crate::vector::MoveVector;

    const TARGETS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[test]
    fn targets_and_laterals_are_distinct() {
        let mut seen = HashSet::new();
        for kind in TARGETS {
            for d_col in -1..=1 {
                let plane = promotion_plane(kind, MoveVector::new(1, d_col)).unwrap();
                assert!((64..=75).contains(&plane), "plane {plane} out of range");
                assert!(seen.insert(plane), "plane {plane} produced twice");
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn queen_push() {
        assert_eq!(
            promotion_plane(PieceKind::Queen, MoveVector::new(1, 0)),
            Ok(64 + (4 - 1) * 3 + 1)
        );
    }

    #[test]
    fn black_promotions_share_planes() {
        assert_eq!(
            promotion_plane(PieceKind::Knight, MoveVector::new(-1, -1)),
            promotion_plane(PieceKind::Knight, MoveVector::new(1, -1))
        );
    }

    #[test]
    fn pawn_and_king_rejected() {
        for kind in [PieceKind::Pawn, PieceKind::King] {
            assert_eq!(
                promotion_plane(kind, MoveVector::new(1, 0)),
                Err(EncodeError::InvalidPromotion { kind })
            );
        }
    }

    #[test]
    fn wide_lateral_rejected() {
        let v = MoveVector::new(1, 2);
        assert_eq!(promotion_plane(PieceKind::Queen, v), Err(EncodeError::vector(v)));
    }
}
