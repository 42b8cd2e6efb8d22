//! In-place position with make/unmake on top of the `cozy-chess` rules engine.

use std::fmt;
use std::str::FromStr;

use cozy_chess::{BitBoard, Board, Color, Piece, Square};
use tracing::debug;

use crate::chess_move::{Move, MoveKind};
use crate::error::{MoveParseError, PositionError};
use crate::key::PositionKey;
use crate::move_list::{MoveFilter, MoveList};

/// A board plus the stack of states needed to undo moves.
///
/// Moves are applied in place with [`make_move`](Position::make_move) and
/// reverted with [`unmake_move`](Position::unmake_move), strictly LIFO. The
/// same stack serves null moves.
#[derive(Clone)]
pub struct Position {
    board: Board,
    undo: Vec<Board>,
}

impl Position {
    /// The standard starting position.
    pub fn starting_position() -> Position {
        Position::from_board(Board::default())
    }

    /// Parse a position from FEN.
    pub fn from_fen(fen: &str) -> Result<Position, PositionError> {
        match Board::from_fen(fen.trim(), false) {
            Ok(board) => Ok(Position::from_board(board)),
            Err(err) => {
                debug!(fen, error = ?err, "rejected FEN");
                Err(PositionError::InvalidFen {
                    fen: fen.to_string(),
                    reason: format!("{err:?}"),
                })
            }
        }
    }

    fn from_board(board: Board) -> Position {
        Position {
            board,
            undo: Vec::with_capacity(128),
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// `true` if the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board.piece_on(sq)
    }

    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.board.color_on(sq)
    }

    /// Pieces of one kind and color.
    #[inline]
    pub fn pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.board.colored_pieces(color, piece)
    }

    /// All pieces of one color.
    #[inline]
    pub fn side(&self, color: Color) -> BitBoard {
        self.board.colors(color)
    }

    #[inline]
    pub fn occupied(&self) -> BitBoard {
        self.board.occupied()
    }

    /// Total number of pieces on the board, kings and pawns included.
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.board.occupied().len()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.board.king(color)
    }

    /// Compact key for repetition detection.
    pub fn key(&self) -> PositionKey {
        PositionKey::encode(&self.board)
    }

    /// Number of moves (null moves included) currently applied.
    pub fn applied(&self) -> usize {
        self.undo.len()
    }

    /// Generate the legal moves selected by `filter`.
    pub fn legal_moves(&self, filter: MoveFilter) -> MoveList {
        let mut list = MoveList::new();
        let board = &self.board;
        let us = board.side_to_move();
        board.generate_moves(|piece_moves| {
            let piece = piece_moves.piece;
            for raw in piece_moves {
                let mv = classify(board, raw, piece, us);
                if filter.accepts(mv) {
                    list.push(mv);
                }
            }
            false
        });
        list
    }

    /// Apply a legal move generated from this position.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(!mv.is_null(), "make_move called with Move::NULL");
        self.undo.push(self.board.clone());
        self.board.play_unchecked(mv.raw());
    }

    /// Revert the most recent [`make_move`](Position::make_move).
    pub fn unmake_move(&mut self) {
        debug_assert!(!self.undo.is_empty(), "unmake_move without a matching make_move");
        if let Some(previous) = self.undo.pop() {
            self.board = previous;
        }
    }

    /// Pass the turn. Returns `false` (and changes nothing) when in check.
    pub fn make_null_move(&mut self) -> bool {
        match self.board.null_move() {
            Some(next) => {
                self.undo.push(std::mem::replace(&mut self.board, next));
                true
            }
            None => false,
        }
    }

    /// Revert the most recent successful [`make_null_move`](Position::make_null_move).
    pub fn unmake_null_move(&mut self) {
        self.unmake_move();
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`, `e1g1`) to a legal move.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(MoveParseError::Malformed {
                text: text.to_string(),
            });
        }
        self.legal_moves(MoveFilter::All)
            .as_slice()
            .iter()
            .copied()
            .find(|mv| mv.to_uci() == text)
            .ok_or_else(|| MoveParseError::Illegal {
                text: text.to_string(),
            })
    }
}

/// Tag a raw rules-engine move with its kind, mover and victim.
fn classify(board: &Board, raw: cozy_chess::Move, piece: Piece, us: Color) -> Move {
    // The rules engine encodes castling as the king capturing its own rook.
    if piece == Piece::King && board.colors(us).has(raw.to) {
        return Move::new(raw, MoveKind::Castling, piece, None);
    }

    let victim = board.piece_on(raw.to);
    if piece == Piece::Pawn && victim.is_none() && raw.from.file() != raw.to.file() {
        return Move::new(raw, MoveKind::EnPassant, piece, Some(Piece::Pawn));
    }

    let kind = if raw.promotion.is_some() {
        MoveKind::Promotion
    } else {
        MoveKind::Normal
    };
    Move::new(raw, kind, piece, victim)
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("fen", &self.board.to_string())
            .field("applied", &self.undo.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use cozy_chess::{Color, Piece, Square};

    use super::Position;
    use crate::{MoveFilter, MoveParseError};

    #[test]
    fn make_unmake_restores_key() {
        let mut position = Position::starting_position();
        let before = position.key();
        let mv = position.parse_move("e2e4").unwrap();
        position.make_move(mv);
        assert_ne!(position.key(), before);
        assert_eq!(position.side_to_move(), Color::Black);
        position.unmake_move();
        assert_eq!(position.key(), before);
        assert_eq!(position.applied(), 0);
    }

    #[test]
    fn null_move_passes_the_turn() {
        let mut position = Position::starting_position();
        assert!(position.make_null_move());
        assert_eq!(position.side_to_move(), Color::Black);
        position.unmake_null_move();
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn null_move_refused_in_check() {
        // Black king on e8 checked by the rook on e1.
        let mut position: Position = "4k3/8/8/8/8/8/8/K3R3 b - - 0 1".parse().unwrap();
        assert!(position.in_check());
        assert!(!position.make_null_move());
        assert_eq!(position.applied(), 0);
    }

    #[test]
    fn piece_queries() {
        let position = Position::starting_position();
        assert_eq!(position.piece_on(Square::D1), Some(Piece::Queen));
        assert_eq!(position.color_on(Square::D8), Some(Color::Black));
        assert_eq!(position.piece_on(Square::D4), None);
        assert_eq!(position.piece_count(), 32);
        assert_eq!(position.pieces(Color::White, Piece::Pawn).len(), 8);
        assert_eq!(position.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn parse_move_rejects_garbage_and_illegal() {
        let position = Position::starting_position();
        assert!(matches!(
            position.parse_move("e2"),
            Err(MoveParseError::Malformed { .. })
        ));
        assert!(matches!(
            position.parse_move("e2e5"),
            Err(MoveParseError::Illegal { .. })
        ));
    }

    #[test]
    fn invalid_fen_is_an_error() {
        assert!(Position::from_fen("not a position").is_err());
    }

    #[test]
    fn checkmated_side_has_no_moves() {
        let position: Position = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(position.in_check());
        assert!(position.legal_moves(MoveFilter::All).is_empty());
    }
}
