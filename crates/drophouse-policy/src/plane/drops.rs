//! Drops: placing a piece from hand, one plane per droppable piece kind.

use drophouse_core::PieceKind;

use crate::error::EncodeError;
use crate::plane::{DROP_OFFSET, piece_id};

/// Plane for a drop of `kind` (`76..=80`). Kings cannot be dropped.
pub fn drop_plane(kind: PieceKind) -> Result<u8, EncodeError> {
    let id = piece_id(kind);
    if id > 4 {
        return Err(EncodeError::InvalidDrop { kind });
    }
    Ok(DROP_OFFSET + id)
}
