//! Move representation tagged with the facts the search needs.

use std::fmt;
use std::hash::{Hash, Hasher};

use cozy_chess::{File, Piece, Square};

/// The category of a chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion,
    EnPassant,
    Castling,
}

/// A legal move as produced by [`Position::legal_moves`](crate::Position::legal_moves).
///
/// Besides the raw transition it carries the moving piece and the captured
/// piece, both resolved at generation time so that ordering code never has
/// to look at the board again.
#[derive(Clone, Copy)]
pub struct Move {
    raw: cozy_chess::Move,
    kind: MoveKind,
    piece: Piece,
    victim: Option<Piece>,
}

impl Move {
    /// Sentinel for "no move". Never produced by move generation.
    pub const NULL: Move = Move {
        raw: cozy_chess::Move {
            from: Square::A1,
            to: Square::A1,
            promotion: None,
        },
        kind: MoveKind::Normal,
        piece: Piece::Pawn,
        victim: None,
    };

    pub(crate) const fn new(
        raw: cozy_chess::Move,
        kind: MoveKind,
        piece: Piece,
        victim: Option<Piece>,
    ) -> Move {
        Move {
            raw,
            kind,
            piece,
            victim,
        }
    }

    /// The move in the rules engine's own encoding.
    #[inline]
    pub(crate) fn raw(self) -> cozy_chess::Move {
        self.raw
    }

    /// Origin square.
    #[inline]
    pub fn source(self) -> Square {
        self.raw.from
    }

    /// Destination square. For castling this is the king's landing square.
    #[inline]
    pub fn dest(self) -> Square {
        match self.kind {
            MoveKind::Castling => {
                let file = if self.raw.to.file() as u8 > self.raw.from.file() as u8 {
                    File::G
                } else {
                    File::C
                };
                Square::new(file, self.raw.from.rank())
            }
            _ => self.raw.to,
        }
    }

    #[inline]
    pub fn kind(self) -> MoveKind {
        self.kind
    }

    /// The piece being moved.
    #[inline]
    pub fn piece(self) -> Piece {
        self.piece
    }

    /// The piece being captured, if any (a pawn for en passant).
    #[inline]
    pub fn victim(self) -> Option<Piece> {
        self.victim
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        self.victim.is_some()
    }

    #[inline]
    pub fn promotion(self) -> Option<Piece> {
        self.raw.promotion
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self == Move::NULL
    }

    /// Coordinate notation: `e2e4`, `e7e8q`, `e1g1`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

/// Lowercase promotion letter used by coordinate notation.
fn promotion_char(piece: Piece) -> char {
    match piece {
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::Pawn => 'p',
        Piece::King => 'k',
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        write!(f, "{}{}", self.source(), self.dest())?;
        if let Some(piece) = self.promotion() {
            write!(f, "{}", promotion_char(piece))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}, {:?})", self.kind)
    }
}
