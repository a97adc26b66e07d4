//! Applying moves to the board
//!
//! The board itself accepts any cell writes. The functions here bundle the two writes of a
//! move (destination gets the piece, source becomes empty), either after checking the move
//! against [`movegen::valid_moves()`] or without any check.

use crate::board::Board;
use crate::movegen;
use crate::types::{Coord, OutOfBounds, Square};

use thiserror::Error;
use tracing::debug;

/// Error applying a move
#[derive(Debug, Clone, Copy, Error, Eq, PartialEq)]
pub enum MoveError {
    /// One of the coordinates lies outside the board
    #[error("{0}")]
    OutOfBounds(#[from] OutOfBounds),
    /// There is no piece to move
    #[error("no piece on {0}")]
    EmptySource(Coord),
    /// The piece cannot reach the destination
    #[error("move from {src} to {dst} is not allowed")]
    NotAllowed { src: Coord, dst: Coord },
}

/// Moves the piece from `src` to `dst` without any checks
///
/// Returns the square that was on `dst` before the move. If `src` is empty, `dst` just becomes
/// empty.
pub fn move_piece_unchecked(b: &mut Board, src: Coord, dst: Coord) -> Square {
    let moved = b.get(src);
    let captured = b.get(dst);
    b.put(dst, moved);
    if src != dst {
        b.put(src, Square::Empty);
    }
    captured
}

/// Moves the piece from `src` to `dst` if the move is among the valid moves
///
/// Returns the square that was on `dst` before the move, i.e. the captured piece or
/// [`Square::Empty`]. On error, the board is left unchanged.
pub fn make_move(b: &mut Board, src: Coord, dst: Coord) -> Result<Square, MoveError> {
    if b.get(src).is_empty() {
        return Err(MoveError::EmptySource(src));
    }
    if !movegen::is_move_allowed(b, src, dst) {
        return Err(MoveError::NotAllowed { src, dst });
    }
    let captured = move_piece_unchecked(b, src, dst);
    debug!(%src, %dst, captured = %captured, "made move");
    Ok(captured)
}

/// Same as [`make_move()`], but takes raw coordinates
pub fn make_move_at(
    b: &mut Board,
    src: (isize, isize),
    dst: (isize, isize),
) -> Result<Square, MoveError> {
    let src = Coord::new(src.0, src.1)?;
    let dst = Coord::new(dst.0, dst.1)?;
    make_move(b, src, dst)
}
