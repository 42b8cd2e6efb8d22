//! Game phase from the number of pieces left on the board.

use tempo_core::Position;

/// Phase of a crowded board; every non-king piece on the board counts one.
///
/// A full starting set has 30 non-king pieces, so even the initial position
/// sits slightly below `PHASE_SCALE`. Promotions can never push past it.
pub const PHASE_SCALE: i32 = 32;

/// Number of non-king pieces on the board, clamped to `0..=PHASE_SCALE`.
///
/// `PHASE_SCALE` selects pure opening tables, 0 pure endgame tables.
pub fn game_phase(position: &Position) -> i32 {
    let non_king = position.piece_count().saturating_sub(2) as i32;
    non_king.min(PHASE_SCALE)
}
