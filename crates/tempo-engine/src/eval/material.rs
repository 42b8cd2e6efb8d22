//! Material balance.
//!
//! Piece values do not depend on the game phase. The king carries a large
//! nominal value that always cancels out; it only matters for ordering.

use tempo_core::{Color, Piece, Position};

use crate::eval::score::Score;

/// Centipawn value of each piece, indexed by `Piece as usize`.
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |   100 |
/// | Knight |   320 |
/// | Bishop |   330 |
/// | Rook   |   500 |
/// | Queen  |   900 |
/// | King   | 20000 |
pub const PIECE_VALUE: [i32; Piece::NUM] = [100, 320, 330, 500, 900, 20_000];

/// Material balance from White's perspective.
pub fn material(position: &Position) -> Score {
    let mut score = Score::ZERO;
    for piece in Piece::ALL {
        let white = position.pieces(Color::White, piece).len() as i32;
        let black = position.pieces(Color::Black, piece).len() as i32;
        score += Score::flat(PIECE_VALUE[piece as usize] * (white - black));
    }
    score
}

#[cfg(test)]
mod tests {
    use tempo_core::Position;

    use super::material;
    use crate::eval::score::Score;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(material(&Position::starting_position()), Score::ZERO);
    }

    #[test]
    fn missing_black_queen() {
        let position: Position = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();
        assert_eq!(material(&position), Score::flat(900));
    }

    #[test]
    fn knight_against_two_pawns() {
        let position: Position = "4k3/8/8/8/8/8/PP6/1N2K3 b - - 0 1".parse().unwrap();
        assert_eq!(material(&position), Score::flat(520));
    }
}
