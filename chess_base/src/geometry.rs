use crate::types::{Color, Point};

/// Orthogonal directions, in the order their rays are generated
pub const ORTHOGONAL: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Diagonal directions, in the order their rays are generated
pub const DIAGONAL: [Point; 4] = [
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

pub const KNIGHT_JUMPS: [Point; 8] = [
    Point::new(1, 2),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-1, -2),
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(-2, 1),
    Point::new(-2, -1),
];

pub const KING_STEPS: [Point; 8] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// Longest possible ray of a sliding piece
pub const MAX_SLIDE: usize = 7;

pub const fn pawn_forward_delta(c: Color) -> isize {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub const fn pawn_forward(c: Color) -> Point {
    Point::new(0, pawn_forward_delta(c))
}

/// Diagonal steps a pawn captures along, right one first
pub const fn pawn_captures(c: Color) -> [Point; 2] {
    let dy = pawn_forward_delta(c);
    [Point::new(1, dy), Point::new(-1, dy)]
}

/// `y` of the row holding the back rank of color `c`
pub const fn home_row(c: Color) -> usize {
    match c {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// `y` of the row holding the pawns of color `c` in the initial position
pub const fn pawn_row(c: Color) -> usize {
    match c {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_directions_mirror() {
        assert_eq!(pawn_forward(Color::White), -pawn_forward(Color::Black));
        let [w1, w2] = pawn_captures(Color::White);
        let [b1, b2] = pawn_captures(Color::Black);
        assert_eq!((w1.x, w2.x), (b1.x, b2.x));
        assert_eq!((w1.y, w2.y), (-b1.y, -b2.y));
    }

    #[test]
    fn test_rows() {
        for c in Color::iter() {
            assert_eq!(home_row(c), 7 - home_row(c.inv()));
            assert_eq!(pawn_row(c), 7 - pawn_row(c.inv()));
            assert_eq!(
                pawn_row(c) as isize - home_row(c) as isize,
                pawn_forward_delta(c)
            );
        }
    }

    #[test]
    fn test_tables_distinct() {
        for table in [&KNIGHT_JUMPS[..], &KING_STEPS[..]] {
            for (i, a) in table.iter().enumerate() {
                assert!(table[i + 1..].iter().all(|b| a != b));
            }
        }
        assert!(ORTHOGONAL
            .iter()
            .chain(DIAGONAL.iter())
            .all(|d| KING_STEPS.contains(d)));
    }
}
