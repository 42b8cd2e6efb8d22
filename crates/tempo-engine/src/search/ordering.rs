//! Move ordering via MVV-LVA, killer moves and the history heuristic.
//!
//! Priority bands, highest first:
//! - PV move while following the previous principal variation: 20,000
//! - Captures: 10,000 + MVV-LVA (10,100..10,605)
//! - First killer: 9,000
//! - Second killer: 8,000
//! - Other quiet moves: history score (0..=7,000)

use tempo_core::{Color, Move, MoveList, Piece};

use crate::search::heuristics::{HistoryTable, KillerTable};

pub const PV_PRIORITY: i32 = 20_000;
pub const CAPTURE_OFFSET: i32 = 10_000;
pub const FIRST_KILLER_PRIORITY: i32 = 9_000;
pub const SECOND_KILLER_PRIORITY: i32 = 8_000;

/// MVV-LVA scores indexed by `[victim][attacker]`.
///
/// The victim decides the hundreds, the attacker breaks ties so that the
/// cheapest attacker comes first.
#[rustfmt::skip]
const MVV_LVA: [[i32; Piece::NUM]; Piece::NUM] = [
    // attacker:  P    N    B    R    Q    K
    /* victim P */ [105, 104, 103, 102, 101, 100],
    /* victim N */ [205, 204, 203, 202, 201, 200],
    /* victim B */ [305, 304, 303, 302, 301, 300],
    /* victim R */ [405, 404, 403, 402, 401, 400],
    /* victim Q */ [505, 504, 503, 502, 501, 500],
    /* victim K */ [605, 604, 603, 602, 601, 600],
];

/// A move paired with its ordering priority.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMove {
    pub mv: Move,
    pub priority: i32,
}

/// Moves of one node sorted by descending priority.
///
/// The sort is stable: equal priorities keep generation order.
pub struct OrderedMoves {
    moves: Vec<ScoredMove>,
}

impl OrderedMoves {
    fn sorted(mut moves: Vec<ScoredMove>) -> Self {
        moves.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in search order.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().map(|scored| scored.mv)
    }

    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves
    }

    /// Highest-priority move, if any.
    pub fn first(&self) -> Option<Move> {
        self.moves.first().map(|scored| scored.mv)
    }
}

/// Capture priority: offset above every quiet band.
#[inline]
pub fn capture_priority(victim: Piece, attacker: Piece) -> i32 {
    CAPTURE_OFFSET + MVV_LVA[victim as usize][attacker as usize]
}

/// Priority of a single move in the main search, ignoring the PV.
pub fn score_move(
    mv: Move,
    side: Color,
    ply: usize,
    killers: &KillerTable,
    history: &HistoryTable,
) -> i32 {
    if let Some(victim) = mv.victim() {
        capture_priority(victim, mv.piece())
    } else if killers.first(ply) == mv {
        FIRST_KILLER_PRIORITY
    } else if killers.second(ply) == mv {
        SECOND_KILLER_PRIORITY
    } else {
        history.score(side, mv)
    }
}

/// Order all moves of a main-search node.
///
/// `pv_move`, when given, is forced to the front regardless of its own
/// priority.
pub fn order_moves(
    moves: &MoveList,
    side: Color,
    ply: usize,
    killers: &KillerTable,
    history: &HistoryTable,
    pv_move: Option<Move>,
) -> OrderedMoves {
    let scored = moves
        .as_slice()
        .iter()
        .map(|&mv| {
            let priority = if pv_move == Some(mv) {
                PV_PRIORITY
            } else {
                score_move(mv, side, ply, killers, history)
            };
            ScoredMove { mv, priority }
        })
        .collect();
    OrderedMoves::sorted(scored)
}

/// Order the captures of a quiescence node by MVV-LVA alone.
pub fn order_captures(captures: &MoveList) -> OrderedMoves {
    let scored = captures
        .as_slice()
        .iter()
        .map(|&mv| ScoredMove {
            mv,
            priority: mv.victim().map_or(0, |victim| capture_priority(victim, mv.piece())),
        })
        .collect();
    OrderedMoves::sorted(scored)
}
