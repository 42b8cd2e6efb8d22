//! Rules-engine boundary: positions, moves and keys on top of `cozy-chess`.

mod chess_move;
mod error;
mod fen;
mod key;
mod move_list;
mod perft;
mod position;

pub use chess_move::{Move, MoveKind};
pub use error::{MoveParseError, PositionError};
pub use fen::{STARTING_FEN, mirror_fen};
pub use key::PositionKey;
pub use move_list::{MoveFilter, MoveList};
pub use perft::{divide, perft};
pub use position::Position;

pub use cozy_chess::{BitBoard, Color, File, Piece, Rank, Square};

/// Squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> BitBoard {
    cozy_chess::get_king_moves(sq)
}
