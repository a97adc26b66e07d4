//! # Chess board with pseudo-legal move generation
//!
//! The crate models an 8×8 chess board and answers one question: where can the piece on a
//! given square go? The answer follows piece geometry and blocking only. Turns, check,
//! castling, en passant, double pawn steps and promotion are not modelled.
//!
//! Coordinates are `(x, y)` pairs, with `x` being the outer (row) index of the board and `y`
//! the inner (column) one. Black starts on the rows `y = 0` and `y = 1` and its pawns go
//! towards larger `y`; White starts on `y = 7` and `y = 6`.
//!
//! # Example
//!
//! ```
//! use raychess::{Board, Coord, Square};
//!
//! let mut board = Board::initial();
//!
//! // Knights are the only pieces that can leave the back rank at first
//! assert!(board.valid_moves(0, 0).unwrap().is_empty());
//! assert_eq!(board.valid_moves(1, 0).unwrap().len(), 2);
//!
//! let captured = board
//!     .make_move(Coord::from_parts(1, 0), Coord::from_parts(2, 2))
//!     .unwrap();
//! assert_eq!(captured, Square::Empty);
//! assert_eq!(board.cell_at(2, 2).unwrap().resource_key().unwrap(), "b_knight");
//! ```

pub mod board;
pub mod movegen;
pub mod moves;
pub mod rays;

pub use raychess_base::geometry;
pub use raychess_base::types;

pub use board::Board;
pub use movegen::MoveList;
pub use moves::MoveError;
pub use types::{Color, Coord, OutOfBounds, Piece, PieceKind, Point, Square};
