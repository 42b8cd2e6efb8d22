//! Negamax alpha-beta search with quiescence.
//!
//! Every node starts with a deadline check. When the deadline has passed the
//! node returns [`Aborted`], which travels to the driver through `?`. Moves
//! are always unmade before the error propagates, so the position, the ply
//! counter and the repetition counts stay consistent on every path.

use tempo_core::{Move, MoveFilter, MoveList, Position};

use crate::eval::evaluate_relative;
use crate::search::SearchOptions;
use crate::search::control::{Aborted, SearchControl};
use crate::search::heuristics::{HistoryTable, KillerTable};
use crate::search::ordering::{order_captures, order_moves};
use crate::search::pv::PvBuffers;
use crate::search::repetition::RepetitionTracker;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Base score for checkmate (adjusted by ply for mate distance).
pub const MATE_SCORE: i32 = 29_000;

/// Scores above this threshold indicate a forced mate.
pub const MATE_THRESHOLD: i32 = 28_000;

/// Maximum search depth (in plies) for array sizing and recursion limits.
pub const MAX_PLY: usize = 64;

/// Depth reduction applied to the null-move probe.
pub const NULL_MOVE_REDUCTION: u8 = 2;

/// Minimum depth for null-move pruning.
const NULL_MOVE_MIN_DEPTH: u8 = 3;

/// Moves searched at full depth before late-move reductions start.
pub const FULL_DEPTH_MOVES: usize = 4;

/// Minimum depth for late-move reductions.
pub const REDUCTION_LIMIT: u8 = 3;

/// Search state threaded through negamax calls.
///
/// Created fresh for every top-level search, so nothing leaks between
/// searches except the repetition counts, which the driver owns.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Distance from the root of the current node.
    pub ply: usize,
    pub pv: PvBuffers,
    pub killers: KillerTable,
    pub history: HistoryTable,
    pub repetitions: &'a mut RepetitionTracker,
    pub control: &'a SearchControl,
    pub options: &'a SearchOptions,
    /// Still walking the leftmost path of the previous iteration's PV.
    pub follow_pv: bool,
    /// Inside the subtree of a null-move probe.
    pub in_null_move: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        repetitions: &'a mut RepetitionTracker,
        control: &'a SearchControl,
        options: &'a SearchOptions,
    ) -> Self {
        Self {
            nodes: 0,
            ply: 0,
            pv: PvBuffers::new(),
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            repetitions,
            control,
            options,
            follow_pv: false,
            in_null_move: false,
        }
    }

    /// Negamax alpha-beta search, fail-hard.
    ///
    /// Returns the score of `position` for the side to move, clamped to
    /// `[alpha, beta]`. The principal variation is collected into the
    /// current PV buffer.
    pub fn negamax(
        &mut self,
        position: &mut Position,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, Aborted> {
        self.control.check()?;
        self.nodes += 1;

        let ply = self.ply;
        self.pv.current().clear_ply(ply);

        // The root always searches, so a move is available even in a
        // position that already occurred twice.
        if ply > 0 && self.repetitions.is_threefold(position) {
            return Ok(0);
        }

        if depth == 0 {
            self.follow_pv = false;
            return self.quiescence(position, alpha, beta);
        }

        if ply >= MAX_PLY - 1 {
            return Ok(evaluate_relative(position));
        }

        let in_check = position.in_check();

        if self.options.null_move
            && !self.in_null_move
            && !self.follow_pv
            && depth >= NULL_MOVE_MIN_DEPTH
            && !in_check
            && ply > 0
            && evaluate_relative(position) >= beta
            && let Some(score) = self.null_move_probe(position, depth, beta)?
        {
            return Ok(score);
        }

        let moves = position.legal_moves(MoveFilter::All);
        if moves.is_empty() {
            return Ok(if in_check { -(MATE_SCORE - ply as i32) } else { 0 });
        }

        let side = position.side_to_move();
        let pv_move = self.pv_hint(&moves);
        let ordered = order_moves(&moves, side, ply, &self.killers, &self.history, pv_move);

        for (index, mv) in ordered.iter().enumerate() {
            let score = self.search_move(position, mv, index, depth, alpha, beta, in_check)?;

            if score >= beta {
                if !mv.is_capture() {
                    self.killers.store(ply, mv);
                }
                return Ok(beta);
            }

            if score > alpha {
                alpha = score;
                if !mv.is_capture() {
                    self.history.reward(side, mv, depth);
                }
                self.pv.current().update(ply, mv);
            }
        }

        Ok(alpha)
    }

    /// Pass the turn and search the reduced null-window tree.
    ///
    /// Returns `Some(beta)` when the side to move is still at or above beta
    /// after giving the opponent a free move.
    fn null_move_probe(
        &mut self,
        position: &mut Position,
        depth: u8,
        beta: i32,
    ) -> Result<Option<i32>, Aborted> {
        if !position.make_null_move() {
            return Ok(None);
        }
        self.in_null_move = true;
        self.ply += 1;
        let result = self.negamax(position, depth - 1 - NULL_MOVE_REDUCTION, -beta, -beta + 1);
        self.ply -= 1;
        self.in_null_move = false;
        position.unmake_null_move();

        let score = -result?;
        Ok((score >= beta).then_some(beta))
    }

    /// Make `mv`, score it, and take it back.
    #[allow(clippy::too_many_arguments)]
    fn search_move(
        &mut self,
        position: &mut Position,
        mv: Move,
        index: usize,
        depth: u8,
        alpha: i32,
        beta: i32,
        in_check: bool,
    ) -> Result<i32, Aborted> {
        position.make_move(mv);
        self.repetitions.observe(position);
        self.ply += 1;

        let result = self.child_score(position, index, depth, alpha, beta, in_check);

        self.ply -= 1;
        self.repetitions.forget(position);
        position.unmake_move();
        result
    }

    /// Score of the child already on the board, from the parent's side.
    ///
    /// The first move gets a full window. Later moves get a null-window
    /// probe (after a reduced-depth probe for late quiet-position moves) and
    /// a full re-search only when the probe lands strictly inside the window.
    fn child_score(
        &mut self,
        position: &mut Position,
        index: usize,
        depth: u8,
        alpha: i32,
        beta: i32,
        in_check: bool,
    ) -> Result<i32, Aborted> {
        if index == 0 {
            return Ok(-self.negamax(position, depth - 1, -beta, -alpha)?);
        }

        if self.options.late_move_reductions
            && index >= FULL_DEPTH_MOVES
            && depth >= REDUCTION_LIMIT
            && !in_check
        {
            let reduced = -self.negamax(position, depth - 2, -alpha - 1, -alpha)?;
            if reduced <= alpha {
                return Ok(reduced);
            }
        }

        let probe = -self.negamax(position, depth - 1, -alpha - 1, -alpha)?;
        if probe > alpha && probe < beta {
            return Ok(-self.negamax(position, depth - 1, -beta, -alpha)?);
        }
        Ok(probe)
    }

    /// PV move to force at this node, if still following the previous line.
    ///
    /// Following stops for the rest of the iteration at the first node whose
    /// legal moves do not include the expected continuation.
    fn pv_hint(&mut self, moves: &MoveList) -> Option<Move> {
        if !self.follow_pv {
            return None;
        }
        match self.pv.completed_move(self.ply) {
            Some(mv) if moves.contains(mv) => Some(mv),
            _ => {
                self.follow_pv = false;
                None
            }
        }
    }

    /// Quiescence search: resolve captures before trusting the static score.
    pub fn quiescence(
        &mut self,
        position: &mut Position,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, Aborted> {
        self.control.check()?;
        self.nodes += 1;

        // Stand-pat: the side to move can choose not to capture
        let stand_pat = evaluate_relative(position);
        if stand_pat >= beta {
            return Ok(beta);
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        if self.ply >= MAX_PLY - 1 {
            return Ok(alpha);
        }

        let captures = position.legal_moves(MoveFilter::Captures);
        for mv in order_captures(&captures).iter() {
            position.make_move(mv);
            self.ply += 1;
            let result = self.quiescence(position, -beta, -alpha);
            self.ply -= 1;
            position.unmake_move();

            let score = -result?;
            if score >= beta {
                return Ok(beta);
            }
            if score > alpha {
                alpha = score;
            }
        }

        Ok(alpha)
    }
}
