//! Generation of pseudo-legal moves
//!
//! Moves are generated from the rays in [`rays`](crate::rays) and the current contents of the
//! board. They follow piece geometry and blocking only; whether the king is left under attack
//! is never checked.

use crate::board::Board;
use crate::rays;
use crate::types::{Coord, Square};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;
use tracing::trace;

/// List of destination squares
///
/// Capacity is large enough for any piece: a Queen in the center of an empty board reaches 27
/// squares, and captures only replace squares a slide would otherwise reach.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Coord, 32>);

impl Deref for MoveList {
    type Target = ArrayVec<Coord, 32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Coord;
    type IntoIter = arrayvec::IntoIter<Coord, 32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Returns all the squares where the piece standing on `src` can move or capture
///
/// Non-capturing moves come first, in ray order. For each ray, they stop right before the first
/// occupied square, whatever its color. Captures follow: a capture ray yields its first occupied
/// square if it holds an enemy piece, and nothing otherwise.
///
/// For an empty square, the list is empty.
pub fn valid_moves(b: &Board, src: Coord) -> MoveList {
    let mut res = MoveList::new();
    let piece = match b.get(src) {
        Square::Empty => return res,
        Square::Piece(p) => p,
    };

    for ray in &rays::move_rays(piece.kind, src, piece.color) {
        for dst in ray.coords().take_while(|&c| b.get(c).is_empty()) {
            res.push(dst);
        }
    }
    let move_count = res.len();

    for ray in &rays::capture_rays(piece.kind, src, piece.color) {
        if let Some(dst) = ray.coords().find(|&c| b.get(c).is_occupied()) {
            if b.get(dst).color() == Some(piece.color.inv()) {
                res.push(dst);
            }
        }
    }

    trace!(
        %src,
        %piece,
        moves = move_count,
        captures = res.len() - move_count,
        "generated moves"
    );

    #[cfg(feature = "selftest")]
    selftest::check(b, src, &res);

    res
}

/// Returns `true` if the piece on `src` can go to `dst`
pub fn is_move_allowed(b: &Board, src: Coord, dst: Coord) -> bool {
    valid_moves(b, src).contains(&dst)
}

#[cfg(feature = "selftest")]
mod selftest {
    use super::MoveList;
    use crate::board::Board;
    use crate::types::Coord;

    pub fn check(b: &Board, src: Coord, moves: &MoveList) {
        let color = b.get(src).color();
        for (i, dst) in moves.iter().enumerate() {
            assert_ne!(*dst, src, "origin {} listed as a destination", src);
            assert!(
                color.is_none() || b.get(*dst).color() != color,
                "friendly square {} listed as a destination of {}",
                dst,
                src
            );
            assert!(
                !moves[i + 1..].contains(dst),
                "duplicate destination {} for {}",
                dst,
                src
            );
        }
    }
}
