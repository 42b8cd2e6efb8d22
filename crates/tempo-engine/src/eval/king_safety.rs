//! King shelter: friendly versus enemy pieces next to each king.

use tempo_core::{Color, Position, king_attacks};

use crate::eval::score::Score;

/// Weight per adjacent piece.
const NEIGHBOR_WEIGHT: i32 = 15;

/// `(friendly neighbors - enemy neighbors) * NEIGHBOR_WEIGHT` for one side.
fn shelter(position: &Position, color: Color) -> i32 {
    let ring = king_attacks(position.king_square(color));
    let friendly = (ring & position.side(color)).len() as i32;
    let enemy = (ring & position.side(!color)).len() as i32;
    (friendly - enemy) * NEIGHBOR_WEIGHT
}

/// King safety from White's perspective.
///
/// An opening-only term: the endgame half is always zero so the king is free
/// to walk out once material comes off.
pub fn king_safety(position: &Position) -> Score {
    Score::new(shelter(position, Color::White) - shelter(position, Color::Black), 0)
}
