//! Knight moves: the 8 L-shaped offsets.

use crate::error::EncodeError;
use crate::plane::KNIGHT_OFFSET;
use crate::vector::MoveVector;

/// Knight offsets (row, column) in plane order, clockwise from north-north-east.
///
/// ```text
///    7 0
///   6   1
///     N
///   5   2
///    4 3
/// ```
pub const KNIGHT_OFFSETS: [MoveVector; 8] = [
    MoveVector::new(2, 1),
    MoveVector::new(1, 2),
    MoveVector::new(-1, 2),
    MoveVector::new(-2, 1),
    MoveVector::new(-2, -1),
    MoveVector::new(-1, -2),
    MoveVector::new(1, -2),
    MoveVector::new(2, -1),
];

/// Plane for a knight move (`56..=63`).
pub fn knight_plane(vector: MoveVector) -> Result<u8, EncodeError> {
    KNIGHT_OFFSETS
        .iter()
        .position(|&offset| offset == vector)
        .map(|i| KNIGHT_OFFSET + i as u8)
        .ok_or(EncodeError::vector(vector))
}
