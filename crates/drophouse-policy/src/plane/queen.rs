//! Queen-like moves: slides along the 8 compass directions.
//!
//! Covers rook, bishop, queen and king moves as well as non-promoting pawn
//! pushes and captures. Planes are grouped by direction, then by length:
//! `plane = direction * 7 + (distance - 1)`.

use crate::error::EncodeError;
use crate::geometry::{BoardShape, SLIDE_LENGTHS};
use crate::plane::QUEEN_OFFSET;
use crate::vector::MoveVector;

/// One of the 8 compass directions, numbered clockwise from north.
///
/// ```text
///  7 0 1
///  6 . 2
///  5 4 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Classify a straight-line vector by direction.
    ///
    /// Returns `None` for the null vector and for vectors that are neither
    /// orthogonal nor diagonal.
    pub const fn classify(vector: MoveVector) -> Option<Direction> {
        let (r, c) = (vector.d_row, vector.d_col);
        if r != 0 && c != 0 && r.unsigned_abs() != c.unsigned_abs() {
            return None;
        }
        match (r.signum(), c.signum()) {
            (1, 0) => Some(Direction::North),
            (1, 1) => Some(Direction::NorthEast),
            (0, 1) => Some(Direction::East),
            (-1, 1) => Some(Direction::SouthEast),
            (-1, 0) => Some(Direction::South),
            (-1, -1) => Some(Direction::SouthWest),
            (0, -1) => Some(Direction::West),
            (1, -1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    /// Unit step (row, column) for this direction.
    pub const fn step(self) -> MoveVector {
        match self {
            Direction::North => MoveVector::new(1, 0),
            Direction::NorthEast => MoveVector::new(1, 1),
            Direction::East => MoveVector::new(0, 1),
            Direction::SouthEast => MoveVector::new(-1, 1),
            Direction::South => MoveVector::new(-1, 0),
            Direction::SouthWest => MoveVector::new(-1, -1),
            Direction::West => MoveVector::new(0, -1),
            Direction::NorthWest => MoveVector::new(1, -1),
        }
    }

    /// Vector of a slide of `distance` squares in this direction.
    pub const fn scaled(self, distance: i8) -> MoveVector {
        let step = self.step();
        MoveVector::new(step.d_row * distance, step.d_col * distance)
    }
}

/// Plane for a queen-like move on the standard board (`0..=55`).
pub fn queen_plane(vector: MoveVector) -> Result<u8, EncodeError> {
    queen_plane_on(BoardShape::STANDARD, vector)
}

/// Plane for a queen-like move on a board of the given shape.
///
/// Fails with `InvalidGeometry` for any board other than 8x8, null or bent
/// vectors, and slides longer than the board allows.
pub fn queen_plane_on(shape: BoardShape, vector: MoveVector) -> Result<u8, EncodeError> {
    shape.ensure_supported()?;

    let direction = Direction::classify(vector).ok_or(EncodeError::vector(vector))?;
    let length = vector.max_abs() - 1;
    if length >= SLIDE_LENGTHS {
        return Err(EncodeError::vector(vector));
    }

    Ok(QUEEN_OFFSET + direction.index() * SLIDE_LENGTHS + length)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Direction, queen_plane, queen_plane_on};
    use crate::error::{EncodeError, GeometryFault};
    use crate::geometry::BoardShape;
    use crate::vector::MoveVector;

    #[test]
    fn classify_each_direction() {
        for direction in Direction::ALL {
            for distance in 1..=7 {
                assert_eq!(
                    Direction::classify(direction.scaled(distance)),
                    Some(direction),
                    "{direction:?} x{distance}"
                );
            }
        }
    }

    #[test]
    fn classify_rejects_null_and_bent_vectors() {
        assert_eq!(Direction::classify(MoveVector::new(0, 0)), None);
        assert_eq!(Direction::classify(MoveVector::new(1, 3)), None);
        assert_eq!(Direction::classify(MoveVector::new(-2, 1)), None);
    }

    #[test]
    fn planes_are_in_range_and_injective() {
        let mut seen = HashSet::new();
        for direction in Direction::ALL {
            for distance in 1..=7 {
                let plane = queen_plane(direction.scaled(distance)).unwrap();
                assert!(plane <= 55, "plane {plane} out of queen range");
                assert_eq!(plane, direction.index() * 7 + (distance as u8 - 1));
                assert!(seen.insert(plane), "plane {plane} produced twice");
            }
        }
        assert_eq!(seen.len(), 56);
    }

    #[test]
    fn known_planes() {
        assert_eq!(queen_plane(MoveVector::new(1, 0)), Ok(0));
        assert_eq!(queen_plane(MoveVector::new(7, 7)), Ok(13));
        assert_eq!(queen_plane(MoveVector::new(0, 1)), Ok(14));
        assert_eq!(queen_plane(MoveVector::new(1, -1)), Ok(49));
        assert_eq!(queen_plane(MoveVector::new(7, -7)), Ok(55));
    }

    #[test]
    fn null_move_fails() {
        assert_eq!(
            queen_plane(MoveVector::new(0, 0)),
            Err(EncodeError::vector(MoveVector::new(0, 0)))
        );
    }

    #[test]
    fn overlong_slide_fails() {
        assert!(queen_plane(MoveVector::new(8, 0)).is_err());
    }

    #[test]
    fn non_square_board_fails() {
        let err = queen_plane_on(BoardShape::new(8, 10), MoveVector::new(1, 0)).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidGeometry(GeometryFault::NonSquareBoard { .. })
        ));
    }

    #[test]
    fn square_board_other_than_eight_fails() {
        // A 9x9 long diagonal would otherwise spill into the knight planes.
        assert_eq!(
            queen_plane_on(BoardShape::new(9, 9), MoveVector::new(8, -8)),
            Err(EncodeError::InvalidGeometry(GeometryFault::UnsupportedBoard {
                size: 9
            }))
        );
        for size in [0u8, 40] {
            let err = queen_plane_on(BoardShape::new(size, size), MoveVector::new(1, 0));
            assert!(
                matches!(
                    err,
                    Err(EncodeError::InvalidGeometry(GeometryFault::UnsupportedBoard { .. }))
                ),
                "{size}x{size}: {err:?}"
            );
        }
        assert_eq!(
            queen_plane_on(BoardShape::STANDARD, MoveVector::new(1, 0)),
            Ok(0)
        );
    }
}
