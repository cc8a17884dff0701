//! Move classification and dispatch to the plane indexers.

use drophouse_core::{Move, MoveKind};

use crate::coordinate::{FlatIndex, PolicyCoordinate};
use crate::error::EncodeError;
use crate::plane::{drop_plane, knight_plane, promotion_plane, queen_plane};
use crate::vector::MoveVector;

/// Resolve a move to its (plane, row, column) policy coordinate.
///
/// Drops are addressed at their destination square, every other move at its
/// source square. Normal moves with a knight-shaped vector go to the knight
/// planes; all other normal moves are treated as queen-like slides.
pub fn resolve(mv: Move) -> Result<PolicyCoordinate, EncodeError> {
    if let MoveKind::Drop(piece) = mv.kind() {
        return Ok(PolicyCoordinate::new(drop_plane(piece)?, mv.dest()));
    }
    // Move's constructors only leave the source empty for drops.
    let Some(source) = mv.source() else {
        return Err(EncodeError::vector(MoveVector::new(0, 0)));
    };
    let vector = MoveVector::between(source, mv.dest());

    let plane = match mv.kind() {
        MoveKind::Promotion(piece) => promotion_plane(piece, vector)?,
        _ if vector.is_knight_shaped() => knight_plane(vector)?,
        _ => queen_plane(vector)?,
    };

    Ok(PolicyCoordinate::new(plane, source))
}

/// Resolve a move straight to its flat index.
#[inline]
pub fn encode(mv: Move) -> Result<FlatIndex, EncodeError> {
    resolve(mv).map(PolicyCoordinate::flat)
}
