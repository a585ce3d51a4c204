pub mod fen;
pub mod model;
pub mod test_utils;
pub mod zobrist_hash;

pub use model::{CastleSide, ChessField, Color, Move, Piece, PieceType, Square};
pub use zobrist_hash::{ZobristHash, ZOBRIST};

mod attack;
mod board;
mod move_generation;
mod state;

pub use board::Board;
pub use state::{Game, MoveError};
