//! Handcrafted static evaluation.
//!
//! Every term produces an opening/endgame [`Score`](score::Score) from White's
//! perspective; the sum is blended by [`game_phase`](phase::game_phase).

pub mod king_safety;
pub mod material;
pub mod pawns;
pub mod phase;
pub mod pst;
pub mod score;

use tempo_core::{Color, Piece, Position};

use self::king_safety::king_safety;
use self::material::material;
use self::pawns::pawn_structure;
use self::phase::game_phase;
use self::pst::pst_value;
use self::score::Score;

/// Sum of piece-square values, White minus Black.
fn placement(position: &Position) -> Score {
    let mut score = Score::ZERO;
    for piece in Piece::ALL {
        for sq in position.pieces(Color::White, piece) {
            score += pst_value(Color::White, piece, sq);
        }
        for sq in position.pieces(Color::Black, piece) {
            score -= pst_value(Color::Black, piece, sq);
        }
    }
    score
}

/// Untapered sum of all terms.
fn raw_score(position: &Position) -> Score {
    material(position) + placement(position) + pawn_structure(position) + king_safety(position)
}

/// Static evaluation in centipawns, positive when White stands better.
///
/// Stateless and side-effect free; the side to move does not change the
/// result.
pub fn evaluate(position: &Position) -> i32 {
    raw_score(position).taper(game_phase(position))
}

/// Static evaluation from the side to move's perspective.
#[inline]
pub fn evaluate_relative(position: &Position) -> i32 {
    match position.side_to_move() {
        Color::White => evaluate(position),
        Color::Black => -evaluate(position),
    }
}

#[cfg(test)]
mod tests {
    use tempo_core::{Position, mirror_fen};

    use super::{evaluate, evaluate_relative};

    const POSITIONS: [&str; 8] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
        "8/8/8/4k3/8/8/4P3/4K3 w - - 0 1",
        "6k1/5ppp/8/8/8/8/1q3PPP/3R2K1 b - - 0 1",
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        "2kr3r/ppp2ppp/2n5/8/3P4/2N5/PP3PPP/R3K2R b KQ - 2 12",
    ];

    fn position(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(evaluate(&Position::starting_position()), 0);
    }

    #[test]
    fn mirrored_positions_negate() {
        for fen in POSITIONS {
            let original = evaluate(&position(fen));
            let mirrored = evaluate(&position(&mirror_fen(fen).unwrap()));
            assert_eq!(mirrored, -original, "{fen}");
        }
    }

    #[test]
    fn relative_score_follows_side_to_move() {
        for fen in POSITIONS {
            let pos = position(fen);
            let mirrored = position(&mirror_fen(fen).unwrap());
            assert_eq!(evaluate_relative(&pos), evaluate_relative(&mirrored), "{fen}");
        }
    }

    #[test]
    fn extra_queen_is_winning() {
        let pos = position("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(evaluate(&pos) > 800);
        let black_to_move = position("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");
        assert_eq!(evaluate(&black_to_move), evaluate(&pos));
        assert!(evaluate_relative(&black_to_move) < -800);
    }

    #[test]
    fn central_pawn_push_is_preferred() {
        let start = evaluate(&Position::starting_position());
        let e4 = evaluate(&position(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        ));
        assert!(e4 > start);
    }
}
