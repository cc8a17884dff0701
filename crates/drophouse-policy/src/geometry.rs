//! Board dimensions assumed by the plane layout.

use drophouse_core::BOARD_SIZE;

use crate::error::{EncodeError, GeometryFault};

/// Number of distinct slide lengths along one line of the standard board.
pub const SLIDE_LENGTHS: u8 = BOARD_SIZE - 1;

/// Dimensions of the board the policy planes cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShape {
    pub width: u8,
    pub height: u8,
}

impl BoardShape {
    /// The 8x8 board.
    pub const STANDARD: BoardShape = BoardShape {
        width: BOARD_SIZE,
        height: BOARD_SIZE,
    };

    pub const fn new(width: u8, height: u8) -> BoardShape {
        BoardShape { width, height }
    }

    /// Fail unless the plane layout covers this board.
    ///
    /// Only the 8x8 board is covered: the plane offsets and `PLANE_COUNT`
    /// are fixed for seven slide lengths per direction.
    pub const fn ensure_supported(self) -> Result<(), EncodeError> {
        if self.width != self.height {
            return Err(EncodeError::InvalidGeometry(GeometryFault::NonSquareBoard {
                width: self.width,
                height: self.height,
            }));
        }
        if self.width != BOARD_SIZE {
            return Err(EncodeError::InvalidGeometry(GeometryFault::UnsupportedBoard {
                size: self.width,
            }));
        }
        Ok(())
    }
}
