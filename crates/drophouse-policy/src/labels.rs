//! The canonical crazyhouse policy label list.
//!
//! The order of this list is the layout of the dense policy vector, so it must
//! never change. It consists of three blocks:
//!
//! 1. Board moves (1792): for every source square (files outer, ranks inner)
//!    every queen-line and knight destination.
//! 2. Promotions (176): per file and piece (q, r, b, n), pushes to both back
//!    ranks, then left captures, then right captures.
//! 3. Drops (304): per square, pieces P, N, B, R, Q; no pawn drops on the
//!    first or last rank.

use drophouse_core::{BOARD_SIZE, BoardPosition, Move, PieceKind, Square};

/// Number of labels in [`crazyhouse_labels`].
pub const CRAZYHOUSE_LABEL_COUNT: usize = 2272;

/// Knight destinations as (file, rank) offsets, in label order.
const KNIGHT_FILE_RANK: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, 2),
    (2, 1),
    (1, 2),
];

const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

const DROP_PIECES: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Build the canonical label list as move records.
pub fn crazyhouse_moves() -> Vec<Move> {
    let mut moves = Vec::with_capacity(CRAZYHOUSE_LABEL_COUNT);
    let size = BOARD_SIZE as i8;

    for file in 0..size {
        for rank in 0..size {
            let source = square(file, rank);
            let mut destinations = Vec::with_capacity(64);
            destinations.extend((0..size).map(|t| (t, rank)));
            destinations.extend((0..size).map(|t| (file, t)));
            destinations.extend((-7..=7).map(|t| (file + t, rank + t)));
            destinations.extend((-7..=7).map(|t| (file + t, rank - t)));
            destinations.extend(KNIGHT_FILE_RANK.iter().map(|&(df, dr)| (file + df, rank + dr)));

            for (f, r) in destinations {
                if (f, r) == (file, rank) || !(0..size).contains(&f) || !(0..size).contains(&r) {
                    continue;
                }
                moves.push(Move::new(source, square(f, r)));
            }
        }
    }

    for file in 0..size {
        for piece in PROMOTION_PIECES {
            let mut targets = vec![file];
            if file > 0 {
                targets.push(file - 1);
            }
            if file < size - 1 {
                targets.push(file + 1);
            }
            for target in targets {
                moves.push(Move::new_promotion(square(file, 1), square(target, 0), piece));
                moves.push(Move::new_promotion(square(file, 6), square(target, 7), piece));
            }
        }
    }

    for file in 0..size {
        for rank in 0..size {
            for piece in DROP_PIECES {
                if piece == PieceKind::Pawn && (rank == 0 || rank == size - 1) {
                    continue;
                }
                moves.push(Move::new_drop(piece, square(file, rank)));
            }
        }
    }

    moves
}

/// Build the canonical label list as label strings.
pub fn crazyhouse_labels() -> Vec<String> {
    crazyhouse_moves().into_iter().map(Move::to_label).collect()
}

/// Square at an on-board (file, rank) pair.
fn square(file: i8, rank: i8) -> Square {
    BoardPosition {
        row: rank as u8,
        column: file as u8,
    }
    .square()
}
