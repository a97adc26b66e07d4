//! Movement rules of the pieces
//!
//! For each piece kind, the rules produce a set of rays. A ray is a sequence of candidate
//! points going from the origin in one direction, ordered by distance. Rays are purely
//! geometric: they may leave the board and know nothing about other pieces, all of the
//! filtering is done by [`movegen`](crate::movegen).

use crate::types::{Color, Coord, PieceKind, Point};
use raychess_base::geometry::{self, MAX_SLIDE};

use std::ops::Deref;
use std::slice;

use arrayvec::ArrayVec;

/// Ray going from a square in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ray {
    dir: Point,
    points: ArrayVec<Point, MAX_SLIDE>,
}

impl Ray {
    fn new(origin: Point, dir: Point, len: usize) -> Ray {
        let points = (1..=len as isize).map(|step| origin + dir * step).collect();
        Ray { dir, points }
    }

    /// Direction of the ray, i.e. the offset between two consecutive points
    #[inline]
    pub fn dir(&self) -> Point {
        self.dir
    }

    /// All the points of the ray, including the ones outside the board
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Points of the ray which lie on the board, in ray order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.points.iter().filter_map(|&p| Coord::try_from(p).ok())
    }
}

/// Ordered collection of rays produced for one piece
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RaySet(ArrayVec<Ray, 8>);

impl RaySet {
    fn from_dirs<'a>(origin: Coord, dirs: impl IntoIterator<Item = &'a Point>, len: usize) -> RaySet {
        let origin = origin.to_point();
        RaySet(dirs.into_iter().map(|&d| Ray::new(origin, d, len)).collect())
    }

    fn slide(origin: Coord, dirs: &[Point]) -> RaySet {
        Self::from_dirs(origin, dirs, MAX_SLIDE)
    }

    fn step(origin: Coord, dirs: &[Point]) -> RaySet {
        Self::from_dirs(origin, dirs, 1)
    }
}

impl Deref for RaySet {
    type Target = ArrayVec<Ray, 8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a RaySet {
    type Item = &'a Ray;
    type IntoIter = slice::Iter<'a, Ray>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Returns the rays along which a piece of kind `kind` and color `color` standing on `origin`
/// moves without capturing
///
/// A Queen gets the Rook rays followed by the Bishop rays.
pub fn move_rays(kind: PieceKind, origin: Coord, color: Color) -> RaySet {
    match kind {
        PieceKind::Pawn => RaySet::step(origin, &[geometry::pawn_forward(color)]),
        PieceKind::Knight => RaySet::step(origin, &geometry::KNIGHT_JUMPS),
        PieceKind::Bishop => RaySet::slide(origin, &geometry::DIAGONAL),
        PieceKind::Rook => RaySet::slide(origin, &geometry::ORTHOGONAL),
        PieceKind::Queen => RaySet::from_dirs(
            origin,
            geometry::ORTHOGONAL.iter().chain(geometry::DIAGONAL.iter()),
            MAX_SLIDE,
        ),
        PieceKind::King => RaySet::step(origin, &geometry::KING_STEPS),
    }
}

/// Returns the rays along which a piece captures
///
/// These are the same as [`move_rays()`] for every kind except the Pawn, which captures on the
/// two forward diagonals.
pub fn capture_rays(kind: PieceKind, origin: Coord, color: Color) -> RaySet {
    match kind {
        PieceKind::Pawn => RaySet::step(origin, &geometry::pawn_captures(color)),
        _ => move_rays(kind, origin, color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(rays: &RaySet) -> Vec<(isize, isize)> {
        rays.iter().map(|r| (r.dir().x, r.dir().y)).collect()
    }

    #[test]
    fn test_pawn() {
        let c = Coord::from_parts(3, 3);
        assert_eq!(dirs(&move_rays(PieceKind::Pawn, c, Color::White)), [(0, -1)]);
        assert_eq!(dirs(&move_rays(PieceKind::Pawn, c, Color::Black)), [(0, 1)]);
        assert_eq!(
            dirs(&capture_rays(PieceKind::Pawn, c, Color::White)),
            [(1, -1), (-1, -1)]
        );
        assert_eq!(
            dirs(&capture_rays(PieceKind::Pawn, c, Color::Black)),
            [(1, 1), (-1, 1)]
        );
        let rays = capture_rays(PieceKind::Pawn, c, Color::Black);
        assert_eq!(rays[0].points(), [Point::new(4, 4)]);
        assert_eq!(rays[1].points(), [Point::new(2, 4)]);
    }

    #[test]
    fn test_captures_default_to_moves() {
        let c = Coord::from_parts(2, 5);
        for kind in PieceKind::iter().filter(|&k| k != PieceKind::Pawn) {
            for color in Color::iter() {
                assert_eq!(move_rays(kind, c, color), capture_rays(kind, c, color));
            }
        }
    }

    #[test]
    fn test_shape() {
        let c = Coord::from_parts(0, 0);
        let expected = [
            (PieceKind::Pawn, 1, 1),
            (PieceKind::Knight, 8, 1),
            (PieceKind::Bishop, 4, 7),
            (PieceKind::Rook, 4, 7),
            (PieceKind::Queen, 8, 7),
            (PieceKind::King, 8, 1),
        ];
        for (kind, count, len) in expected {
            let rays = move_rays(kind, c, Color::White);
            assert_eq!(rays.len(), count, "{:?}", kind);
            assert!(rays.iter().all(|r| r.points().len() == len), "{:?}", kind);
        }
    }

    #[test]
    fn test_queen_is_rook_then_bishop() {
        let c = Coord::from_parts(4, 1);
        let queen = move_rays(PieceKind::Queen, c, Color::Black);
        let rook = move_rays(PieceKind::Rook, c, Color::Black);
        let bishop = move_rays(PieceKind::Bishop, c, Color::Black);
        let union: Vec<_> = rook.iter().chain(bishop.iter()).cloned().collect();
        assert_eq!(queen.to_vec(), union);
    }

    #[test]
    fn test_ray_order() {
        let rays = move_rays(PieceKind::Rook, Coord::from_parts(2, 2), Color::White);
        let up = &rays[1];
        assert_eq!(up.dir(), Point::new(0, -1));
        assert_eq!(
            up.points()[..3],
            [Point::new(2, 1), Point::new(2, 0), Point::new(2, -1)]
        );
        assert_eq!(
            up.coords().collect::<Vec<_>>(),
            [Coord::from_parts(2, 1), Coord::from_parts(2, 0)]
        );
    }

    #[test]
    fn test_knight_offsets() {
        let rays = move_rays(PieceKind::Knight, Coord::from_parts(4, 4), Color::White);
        let points: Vec<_> = rays.iter().map(|r| r.points()[0]).collect();
        assert_eq!(
            points,
            [
                Point::new(5, 6),
                Point::new(5, 2),
                Point::new(3, 6),
                Point::new(3, 2),
                Point::new(6, 5),
                Point::new(6, 3),
                Point::new(2, 5),
                Point::new(2, 3),
            ]
        );
    }
}
