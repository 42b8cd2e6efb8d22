//! Killer move table and history heuristic for quiet move ordering.

use tempo_core::{Color, Move, Piece};

use crate::search::negamax::MAX_PLY;

/// Two killer moves per ply: quiet moves that caused beta cutoffs.
pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl KillerTable {
    /// Create an empty killer table.
    pub fn new() -> Self {
        Self {
            slots: [[Move::NULL; 2]; MAX_PLY],
        }
    }

    /// Store a killer move at the given ply.
    ///
    /// Shifts slot 0 to slot 1 if the new move differs from slot 0.
    pub fn store(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY {
            return;
        }
        if self.slots[ply][0] != mv {
            self.slots[ply][1] = self.slots[ply][0];
            self.slots[ply][0] = mv;
        }
    }

    /// Most recent killer at `ply`, or [`Move::NULL`].
    pub fn first(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(Move::NULL, |slot| slot[0])
    }

    /// Older killer at `ply`, or [`Move::NULL`].
    pub fn second(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(Move::NULL, |slot| slot[1])
    }

    /// Check if a move is a killer at the given ply.
    pub fn is_killer(&self, ply: usize, mv: Move) -> bool {
        !mv.is_null() && (self.first(ply) == mv || self.second(ply) == mv)
    }

    pub fn clear(&mut self) {
        self.slots = [[Move::NULL; 2]; MAX_PLY];
    }
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Ceiling for history scores. Kept below the second killer priority so
/// that killers always sort first among quiet moves.
pub const HISTORY_MAX: i32 = 7_000;

/// History heuristic table, indexed by `[side][piece][destination]`.
///
/// Accumulates `depth` each time a quiet move raises alpha. Survives
/// between iterations of one search and is cleared before the next.
pub struct HistoryTable {
    table: [[[i32; 64]; Piece::NUM]; Color::NUM],
}

impl HistoryTable {
    /// Create a zeroed history table.
    pub fn new() -> Self {
        Self {
            table: [[[0; 64]; Piece::NUM]; Color::NUM],
        }
    }

    /// Reward a quiet move by `side` that improved alpha at `depth`.
    pub fn reward(&mut self, side: Color, mv: Move, depth: u8) {
        let entry = &mut self.table[side as usize][mv.piece() as usize][mv.dest() as usize];
        *entry = (*entry + depth as i32).min(HISTORY_MAX);
    }

    /// History score of a quiet move by `side`.
    pub fn score(&self, side: Color, mv: Move) -> i32 {
        self.table[side as usize][mv.piece() as usize][mv.dest() as usize]
    }

    pub fn clear(&mut self) {
        self.table = [[[0; 64]; Piece::NUM]; Color::NUM];
    }
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tempo_core::{Color, Move, Position};

    use super::*;

    fn moves(texts: &[&str]) -> Vec<Move> {
        let position = Position::starting_position();
        texts.iter().map(|t| position.parse_move(t).unwrap()).collect()
    }

    #[test]
    fn killer_store_and_check() {
        let mut kt = KillerTable::new();
        let m = moves(&["e2e4", "d2d4"]);

        kt.store(5, m[0]);
        assert!(kt.is_killer(5, m[0]));
        assert!(!kt.is_killer(5, m[1]));

        // mv1 shifts to the second slot
        kt.store(5, m[1]);
        assert_eq!(kt.first(5), m[1]);
        assert_eq!(kt.second(5), m[0]);
    }

    #[test]
    fn killer_same_move_no_shift() {
        let mut kt = KillerTable::new();
        let m = moves(&["e2e4", "d2d4"]);

        kt.store(0, m[0]);
        kt.store(0, m[1]);
        kt.store(0, m[1]);
        assert_eq!(kt.first(0), m[1]);
        assert_eq!(kt.second(0), m[0]);
    }

    #[test]
    fn killer_plies_independent_and_clearable() {
        let mut kt = KillerTable::new();
        let m = moves(&["g1f3"]);
        kt.store(3, m[0]);
        assert!(kt.is_killer(3, m[0]));
        assert!(!kt.is_killer(4, m[0]));
        assert!(!kt.is_killer(MAX_PLY + 1, m[0]));
        kt.clear();
        assert!(!kt.is_killer(3, m[0]));
        assert!(!kt.is_killer(3, Move::NULL));
    }

    #[test]
    fn history_accumulates_depth_per_side() {
        let mut ht = HistoryTable::new();
        let m = moves(&["g1f3"]);
        assert_eq!(ht.score(Color::White, m[0]), 0);

        ht.reward(Color::White, m[0], 4);
        ht.reward(Color::White, m[0], 3);
        assert_eq!(ht.score(Color::White, m[0]), 7);
        assert_eq!(ht.score(Color::Black, m[0]), 0);

        ht.clear();
        assert_eq!(ht.score(Color::White, m[0]), 0);
    }

    #[test]
    fn history_clamped() {
        let mut ht = HistoryTable::new();
        let m = moves(&["e2e4"]);
        for _ in 0..1_000 {
            ht.reward(Color::White, m[0], 20);
        }
        assert_eq!(ht.score(Color::White, m[0]), HISTORY_MAX);
    }
}
