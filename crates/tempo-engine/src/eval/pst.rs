//! Piece-square tables.
//!
//! Tables are written the way a board diagram is read from White's side:
//! the first row is rank 8, the last row is rank 1. A White piece on square
//! `sq` reads entry `sq ^ 56`; a Black piece reads entry `sq` directly, which
//! mirrors the table vertically for Black.
//!
//! Pawns and kings have separate opening and endgame tables. The remaining
//! pieces use one table that applies in every phase.

use tempo_core::{Color, Piece, Square};

use crate::eval::score::Score;

#[rustfmt::skip]
const PAWN_OPENING: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
    50,  50,  50,  50,  50,  50,  50,  50,
    10,  10,  20,  30,  30,  20,  10,  10,
     5,   5,  10,  25,  25,  10,   5,   5,
     0,   0,   0,  20,  22,   0,   0,   0,
     5,  -5, -10,   0,   0, -10,  -5,   5,
     5,  10,  10, -40, -40,  10,  10,   5,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const PAWN_ENDGAME: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
   178, 173, 158, 134, 147, 132, 165, 187,
    94, 100,  85,  67,  56,  53,  82,  84,
    32,  24,  13,   5,  -2,   4,  17,  17,
    13,   9,  -3,  -7,  -7,  -8,   3,  -1,
     4,   7,  -6,   1,   0,  -5,  -1,  -8,
    13,   8,   8,  10,  13,   0,   2,  -7,
     0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
   -50, -40, -30, -30, -30, -30, -40, -50,
   -40, -20,   0,   0,   0,   0, -20, -40,
   -30,   0,  10,  15,  15,  10,   0, -30,
   -30,   5,  15,  20,  20,  15,   5, -30,
   -30,   0,  15,  20,  20,  15,   0, -30,
   -30,   5,  10,  15,  15,  10,   5, -30,
   -40, -20,   0,   5,   5,   0, -20, -40,
   -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
   -20, -10, -10, -10, -10, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,  10,  10,   5,   0, -10,
   -10,   5,   5,  10,  10,   5,   5, -10,
   -10,   0,  10,  10,  10,  10,   0, -10,
   -10,  10,  10,  10,  10,  10,  10, -10,
   -10,   5,   0,   0,   0,   0,   5, -10,
   -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,   0,   0,   0,   0,   0,   0,   0,
     5,  10,  10,  10,  10,  10,  10,   5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
    -5,   0,   0,   0,   0,   0,   0,  -5,
     0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
   -20, -10, -10,  -5,  -5, -10, -10, -20,
   -10,   0,   0,   0,   0,   0,   0, -10,
   -10,   0,   5,   5,   5,   5,   0, -10,
    -5,   0,   5,   5,   5,   5,   0,  -5,
     0,   0,   5,   5,   5,   5,   0,  -5,
   -10,   5,   5,   5,   5,   5,   0, -10,
   -10,   0,   5,   0,   0,   0,   0, -10,
   -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_OPENING: [i32; 64] = [
   -40, -40, -40, -40, -40, -40, -40, -40,
   -40, -40, -40, -40, -40, -40, -40, -40,
   -40, -40, -40, -40, -40, -40, -40, -40,
   -40, -40, -40, -40, -40, -40, -40, -40,
   -40, -40, -40, -40, -40, -40, -40, -40,
   -40, -40, -40, -40, -40, -40, -40, -40,
   -20, -20, -20, -20, -20, -20, -20, -20,
     0,  20,  40, -20,   0, -20,  40,  20,
];

#[rustfmt::skip]
const KING_ENDGAME: [i32; 64] = [
     0,  10,  20,  30,  30,  20,  10,   0,
    10,  20,  30,  40,  40,  30,  20,  10,
    20,  30,  40,  50,  50,  40,  30,  20,
    30,  40,  50,  60,  60,  50,  40,  30,
    30,  40,  50,  60,  60,  50,  40,  30,
    20,  30,  40,  50,  50,  40,  30,  20,
    10,  20,  30,  40,  40,  30,  20,  10,
     0,  10,  20,  30,  30,  20,  10,   0,
];

/// Pair an opening table with an endgame table.
const fn tapered(opening: &[i32; 64], endgame: &[i32; 64]) -> [Score; 64] {
    let mut table = [Score::ZERO; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = Score::new(opening[i], endgame[i]);
        i += 1;
    }
    table
}

/// A table that applies unchanged in every phase.
const fn flat(values: &[i32; 64]) -> [Score; 64] {
    tapered(values, values)
}

/// All tables indexed by `Piece as usize`.
static PST: [[Score; 64]; Piece::NUM] = [
    tapered(&PAWN_OPENING, &PAWN_ENDGAME),
    flat(&KNIGHT),
    flat(&BISHOP),
    flat(&ROOK),
    flat(&QUEEN),
    tapered(&KING_OPENING, &KING_ENDGAME),
];

/// Table index for a piece of `color` standing on `sq`.
#[inline]
fn table_index(color: Color, sq: Square) -> usize {
    match color {
        Color::White => sq as usize ^ 56,
        Color::Black => sq as usize,
    }
}

/// Positional value of `piece` of `color` on `sq`, from that side's view.
#[inline]
pub fn pst_value(color: Color, piece: Piece, sq: Square) -> Score {
    PST[piece as usize][table_index(color, sq)]
}

#[cfg(test)]
mod tests {
    use tempo_core::{Color, Piece, Square};

    use super::pst_value;
    use crate::eval::score::{S, Score};

    #[test]
    fn white_reads_rank_one_from_bottom_row() {
        assert_eq!(pst_value(Color::White, Piece::King, Square::G1), S(40, 10));
        assert_eq!(pst_value(Color::White, Piece::Pawn, Square::D2), S(-40, 10));
        assert_eq!(pst_value(Color::White, Piece::Rook, Square::A7), Score::flat(5));
    }

    #[test]
    fn black_mirrors_white() {
        let pairs = [
            (Square::E2, Square::E7),
            (Square::B1, Square::B8),
            (Square::D4, Square::D5),
            (Square::H6, Square::H3),
        ];
        for piece in Piece::ALL {
            for (white_sq, black_sq) in pairs {
                assert_eq!(
                    pst_value(Color::White, piece, white_sq),
                    pst_value(Color::Black, piece, black_sq),
                    "{piece:?} on {white_sq}/{black_sq}"
                );
            }
        }
    }

    #[test]
    fn knights_prefer_the_center() {
        let rim = pst_value(Color::White, Piece::Knight, Square::A1);
        let center = pst_value(Color::White, Piece::Knight, Square::E4);
        assert!(center.mg > rim.mg);
        assert_eq!(center, Score::flat(20));
    }
}
