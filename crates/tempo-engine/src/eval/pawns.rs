//! Pawn structure: doubled, isolated and passed pawns.
//!
//! All terms are phase-independent and returned from White's perspective.

use tempo_core::{Color, Piece, Position, Square};

use crate::eval::score::Score;

/// Applied to every pawn that shares its file with another friendly pawn.
const DOUBLED_PAWN_PENALTY: i32 = -10;

/// Applied to every pawn with no friendly pawn on an adjacent file.
const ISOLATED_PAWN_PENALTY: i32 = -10;

/// Passed pawn bonus by rank index (0 = rank 1), per color.
const PASSED_PAWN_BONUS: [[i32; 8]; 2] = [
    [0, 10, 30, 50, 75, 100, 150, 200],
    [200, 150, 100, 75, 50, 30, 10, 0],
];

const FILE_A: u64 = 0x0101_0101_0101_0101;

/// Every square on each file.
static FILE_MASK: [u64; 8] = compute_file_masks();

/// The files on either side of each file.
static ADJACENT_FILES: [u64; 8] = compute_adjacent_files();

/// For each `[color][square]`, the squares on the same and adjacent files
/// strictly ahead of a pawn of that color. A pawn is passed when this mask
/// holds no enemy pawn.
static PASSED_PAWN_MASK: [[u64; 64]; 2] = compute_passed_pawn_masks();

const fn compute_file_masks() -> [u64; 8] {
    let mut table = [0u64; 8];
    let mut f = 0;
    while f < 8 {
        table[f] = FILE_A << f;
        f += 1;
    }
    table
}

const fn compute_adjacent_files() -> [u64; 8] {
    let mut table = [0u64; 8];
    let mut f = 0;
    while f < 8 {
        let mut bits = 0u64;
        if f > 0 {
            bits |= FILE_A << (f - 1);
        }
        if f < 7 {
            bits |= FILE_A << (f + 1);
        }
        table[f] = bits;
        f += 1;
    }
    table
}

const fn compute_passed_pawn_masks() -> [[u64; 64]; 2] {
    let mut table = [[0u64; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        let span = (FILE_A << file) | compute_adjacent_files()[file];

        let mut ahead_white = 0u64;
        let mut r = rank + 1;
        while r < 8 {
            ahead_white |= 0xFFu64 << (r * 8);
            r += 1;
        }

        let mut ahead_black = 0u64;
        let mut r = 0;
        while r < rank {
            ahead_black |= 0xFFu64 << (r * 8);
            r += 1;
        }

        table[0][sq] = span & ahead_white;
        table[1][sq] = span & ahead_black;
        sq += 1;
    }
    table
}

/// Structure score for the pawns of one side, from that side's view.
fn side_structure(position: &Position, color: Color) -> i32 {
    let ours = position.pieces(color, Piece::Pawn);
    let theirs = position.pieces(!color, Piece::Pawn).0;
    let ours_bits = ours.0;

    let mut total = 0;
    for sq in ours {
        let file = sq.file() as usize;

        if (FILE_MASK[file] & ours_bits).count_ones() > 1 {
            total += DOUBLED_PAWN_PENALTY;
        }

        if ADJACENT_FILES[file] & ours_bits == 0 {
            total += ISOLATED_PAWN_PENALTY;
        }

        if is_passed(color, sq, theirs) {
            total += PASSED_PAWN_BONUS[color as usize][sq.rank() as usize];
        }
    }
    total
}

#[inline]
fn is_passed(color: Color, sq: Square, enemy_pawns: u64) -> bool {
    PASSED_PAWN_MASK[color as usize][sq as usize] & enemy_pawns == 0
}

/// Pawn structure from White's perspective.
pub fn pawn_structure(position: &Position) -> Score {
    Score::flat(side_structure(position, Color::White) - side_structure(position, Color::Black))
}
