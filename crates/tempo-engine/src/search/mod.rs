//! Iterative-deepening search and its building blocks.

pub mod control;
pub mod heuristics;
pub mod negamax;
pub mod ordering;
pub mod pv;
pub mod repetition;

use std::time::Duration;

use tempo_core::{Move, MoveFilter, Position};
use tracing::debug;

use control::{Aborted, SearchControl};
use negamax::{INF, SearchContext};
use ordering::order_moves;
use repetition::RepetitionTracker;

/// Iteration cap of the driver.
pub const MAX_DEPTH: u8 = 20;

/// Half-width of the aspiration window around the previous score.
pub const ASPIRATION_WINDOW: i32 = 50;

/// Switches for the search enhancements that change the tree shape.
///
/// With `null_move` and `late_move_reductions` off the search returns the
/// exact minimax value at every depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Deepest iteration to run.
    pub max_depth: u8,
    pub null_move: bool,
    pub late_move_reductions: bool,
    /// Search each iteration in a window around the previous score.
    pub aspiration: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            null_move: true,
            late_move_reductions: true,
            aspiration: true,
        }
    }
}

/// Result of a top-level search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Best move of the deepest completed iteration. `None` only when the
    /// root has no legal move.
    pub best_move: Option<Move>,
    /// Deepest completed iteration, 0 if none completed.
    pub depth: u8,
    /// Score of that iteration from the side to move's perspective.
    pub score: i32,
    /// Principal variation of that iteration.
    pub pv: Vec<Move>,
    /// Nodes visited, aborted iterations included.
    pub nodes: u64,
    pub elapsed: Duration,
}

/// Iterative-deepening searcher.
///
/// Keeps the repetition counts of the game played so far; every search
/// starts from them and leaves them as it found them plus the root.
#[derive(Debug, Default)]
pub struct Searcher {
    options: SearchOptions,
    history: RepetitionTracker,
}

impl Searcher {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            history: RepetitionTracker::new(),
        }
    }

    /// Count a position that occurred in the game.
    pub fn record_position(&mut self, position: &Position) {
        self.history.observe(position);
    }

    /// Forget the game history, e.g. for a new game.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Repetition counts of the game so far.
    pub fn history(&self) -> &RepetitionTracker {
        &self.history
    }

    /// Search `position` for at most `budget`.
    pub fn search_with_budget(&mut self, position: &mut Position, budget: Duration) -> SearchReport {
        let control = SearchControl::with_budget(budget);
        self.search(position, &control, |_, _, _, _| {})
    }

    /// Run iterative deepening until `max_depth` or until `control` stops.
    ///
    /// A root seen for the third time is still searched and answered with a
    /// move; repetition draws are only scored below the root.
    ///
    /// Calls `on_iter(depth, score, nodes, pv)` after each completed
    /// iteration. `position` is mutated during the search and restored
    /// before returning.
    pub fn search<F>(
        &mut self,
        position: &mut Position,
        control: &SearchControl,
        mut on_iter: F,
    ) -> SearchReport
    where
        F: FnMut(u8, i32, u64, &[Move]),
    {
        self.history.observe(position);
        let snapshot = self.history.clone();

        let root_moves = position.legal_moves(MoveFilter::All);
        if root_moves.is_empty() {
            debug!(fen = %position, "no legal move at the root");
            return SearchReport {
                best_move: None,
                depth: 0,
                score: 0,
                pv: Vec::new(),
                nodes: 0,
                elapsed: control.elapsed(),
            };
        }

        let options = self.options;
        let mut ctx = SearchContext::new(&mut self.history, control, &options);

        // Fallback if not even depth 1 completes.
        let seed = order_moves(
            &root_moves,
            position.side_to_move(),
            0,
            &ctx.killers,
            &ctx.history,
            None,
        )
        .first();

        let mut completed_depth: u8 = 0;
        let mut completed_score: i32 = 0;
        let (mut alpha, mut beta) = (-INF, INF);
        let mut depth: u8 = 1;
        let mut aborted = false;

        while depth <= options.max_depth {
            ctx.follow_pv = true;
            ctx.ply = 0;

            let score = match ctx.negamax(position, depth, alpha, beta) {
                Ok(score) => score,
                Err(Aborted) => {
                    debug!(depth, nodes = ctx.nodes, "iteration aborted");
                    aborted = true;
                    break;
                }
            };

            if score <= alpha || score >= beta {
                debug!(depth, score, alpha, beta, "aspiration window failed");
                alpha = -INF;
                beta = INF;
                continue;
            }

            if options.aspiration {
                alpha = score - ASPIRATION_WINDOW;
                beta = score + ASPIRATION_WINDOW;
            }

            ctx.pv.promote();
            completed_depth = depth;
            completed_score = score;

            let pv = ctx.pv.completed_line();
            debug!(depth, score, nodes = ctx.nodes, pv_len = pv.len(), "iteration complete");
            on_iter(depth, score, ctx.nodes, pv);

            depth += 1;
        }

        let pv = ctx.pv.completed_line().to_vec();
        let nodes = ctx.nodes;
        drop(ctx);

        if aborted {
            self.history = snapshot;
        }

        let best_move = pv.first().copied().or(seed);
        SearchReport {
            best_move,
            depth: completed_depth,
            score: completed_score,
            pv,
            nodes,
            elapsed: control.elapsed(),
        }
    }
}
