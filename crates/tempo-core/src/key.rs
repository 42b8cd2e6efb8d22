//! Compact, exact position keys for repetition counting.

use cozy_chess::{Board, Color, Piece};

/// Exact encoding of everything that makes two positions "the same" for
/// repetition purposes.
///
/// Layout:
/// - `squares`: one nibble per square, low nibble first. `0` is empty,
///   `1..=6` a White piece (`piece + 1`), `9..=14` a Black piece (`8 | (piece + 1)`).
/// - `state`: bit 0 side to move (1 = Black), bits 1-4 castling rights
///   (White short, White long, Black short, Black long), bits 5-8 the
///   en-passant file plus one (`0` = none).
///
/// Unlike a Zobrist hash, two different positions never share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionKey {
    squares: [u8; 32],
    state: u16,
}

impl PositionKey {
    /// Encode a board.
    pub(crate) fn encode(board: &Board) -> PositionKey {
        let mut squares = [0u8; 32];
        for sq in board.occupied() {
            let (Some(piece), Some(color)) = (board.piece_on(sq), board.color_on(sq)) else {
                continue;
            };
            let index = sq as usize;
            let shift = (index & 1) * 4;
            squares[index / 2] |= piece_code(piece, color) << shift;
        }

        let mut state = 0u16;
        if board.side_to_move() == Color::Black {
            state |= 1;
        }
        let mut bit = 1;
        for color in Color::ALL {
            let rights = board.castle_rights(color);
            if rights.short.is_some() {
                state |= 1 << bit;
            }
            if rights.long.is_some() {
                state |= 1 << (bit + 1);
            }
            bit += 2;
        }
        if let Some(file) = board.en_passant() {
            state |= (file as u16 + 1) << 5;
        }

        PositionKey { squares, state }
    }
}

fn piece_code(piece: Piece, color: Color) -> u8 {
    let code = piece as u8 + 1;
    match color {
        Color::White => code,
        Color::Black => 8 | code,
    }
}
