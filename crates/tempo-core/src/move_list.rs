//! Fixed-capacity move buffer and generation filters.

use crate::chess_move::Move;

/// Which subset of legal moves to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFilter {
    /// Every legal move.
    All,
    /// Captures only, en passant included.
    Captures,
    /// Non-captures only.
    Quiets,
}

impl MoveFilter {
    #[inline]
    pub(crate) fn accepts(self, mv: Move) -> bool {
        match self {
            MoveFilter::All => true,
            MoveFilter::Captures => mv.is_capture(),
            MoveFilter::Quiets => !mv.is_capture(),
        }
    }
}

/// Upper bound on legal moves in any reachable position is 218.
const CAPACITY: usize = 256;

/// Legal moves of one position, filled by [`Position::legal_moves`].
///
/// [`Position::legal_moves`]: crate::Position::legal_moves
pub struct MoveList {
    buf: [Move; CAPACITY],
    len: usize,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            buf: [Move::NULL; CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < CAPACITY);
        self.buf[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.buf[..self.len]
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{MoveFilter, Position};

    #[test]
    fn filters_partition_the_move_list() {
        // Kiwipete: 48 moves, 8 of them captures.
        let position: Position =
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
                .parse()
                .unwrap();
        let all = position.legal_moves(MoveFilter::All);
        let captures = position.legal_moves(MoveFilter::Captures);
        let quiets = position.legal_moves(MoveFilter::Quiets);
        assert_eq!(all.len(), 48);
        assert_eq!(captures.len(), 8);
        assert_eq!(captures.len() + quiets.len(), all.len());
        assert!(captures.as_slice().iter().all(|mv| all.contains(*mv)));
    }

    #[test]
    fn starting_position_has_no_captures() {
        let position = Position::starting_position();
        assert!(position.legal_moves(MoveFilter::Captures).is_empty());
        assert_eq!(position.legal_moves(MoveFilter::Quiets).len(), 20);
    }
}
