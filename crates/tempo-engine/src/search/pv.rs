//! Triangular principal-variation tables, double-buffered across iterations.

use std::mem;

use tempo_core::Move;

use crate::search::negamax::MAX_PLY;

/// Triangular PV table for collecting principal variation lines.
///
/// Each row `ply` contains the PV continuation from that ply onward.
pub struct PvTable {
    moves: [[Move; MAX_PLY]; MAX_PLY],
    len: [usize; MAX_PLY],
}

impl PvTable {
    /// Create an empty PV table.
    pub fn new() -> Self {
        Self {
            moves: [[Move::NULL; MAX_PLY]; MAX_PLY],
            len: [0; MAX_PLY],
        }
    }

    /// Clear the PV line at `ply` (called at the top of each node).
    pub fn clear_ply(&mut self, ply: usize) {
        if ply < MAX_PLY {
            self.len[ply] = 0;
        }
    }

    /// Set `mv` as the best move at `ply`, followed by the line one ply
    /// deeper.
    pub fn update(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY {
            return;
        }

        self.moves[ply][0] = mv;

        let child_ply = ply + 1;
        if child_ply < MAX_PLY {
            let copy_len = self.len[child_ply].min(MAX_PLY - 1);
            let (top, bottom) = self.moves.split_at_mut(child_ply);
            top[ply][1..1 + copy_len].copy_from_slice(&bottom[0][..copy_len]);
            self.len[ply] = 1 + copy_len;
        } else {
            self.len[ply] = 1;
        }
    }

    /// The principal variation from the root.
    pub fn root_pv(&self) -> &[Move] {
        &self.moves[0][..self.len[0]]
    }

    pub fn clear(&mut self) {
        self.len = [0; MAX_PLY];
    }
}

impl Default for PvTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Two PV tables: one written by the iteration in progress, one holding the
/// line of the last completed iteration.
///
/// The completed line is only replaced by [`promote`](PvBuffers::promote),
/// which the driver calls after an iteration finishes without aborting.
pub struct PvBuffers {
    current: Box<PvTable>,
    completed: Box<PvTable>,
}

impl PvBuffers {
    pub fn new() -> Self {
        Self {
            current: Box::default(),
            completed: Box::default(),
        }
    }

    /// Table the running iteration writes into.
    #[inline]
    pub fn current(&mut self) -> &mut PvTable {
        &mut self.current
    }

    /// Move at `ply` of the last completed principal variation.
    #[inline]
    pub fn completed_move(&self, ply: usize) -> Option<Move> {
        self.completed.root_pv().get(ply).copied()
    }

    /// Line of the last completed iteration.
    pub fn completed_line(&self) -> &[Move] {
        self.completed.root_pv()
    }

    /// Make the current line authoritative and recycle the old one.
    pub fn promote(&mut self) {
        mem::swap(&mut self.current, &mut self.completed);
        self.current.clear();
    }
}

impl Default for PvBuffers {
    fn default() -> Self {
        Self::new()
    }
}
