use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

use derive_more::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[error("coordinate ({x}, {y}) is out of bounds")]
pub struct OutOfBounds {
    pub x: isize,
    pub y: isize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("expected two numbers separated by a comma")]
    BadFormat,
    #[error("bad number: {0}")]
    BadNumber(#[from] ParseIntError),
    #[error("{0}")]
    OutOfBounds(#[from] OutOfBounds),
}

/// Unvalidated signed position, used for ray points before bounds filtering
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Add, Sub, Mul, Neg)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }

    pub const fn is_inside(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < BOARD_SIZE as isize && self.y < BOARD_SIZE as isize
    }
}

/// Position on the board
///
/// `x` is the outer (row) dimension and `y` is the inner (column) one. A `Coord` is always
/// inside the board, so accessors taking it never fail.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    pub fn new(x: isize, y: isize) -> Result<Coord, OutOfBounds> {
        Coord::try_from(Point::new(x, y))
    }

    pub const fn from_parts(x: usize, y: usize) -> Coord {
        assert!(x < BOARD_SIZE && y < BOARD_SIZE, "coord parts must be between 0 and 7");
        Coord {
            x: x as u8,
            y: y as u8,
        }
    }

    pub const fn from_index(val: usize) -> Coord {
        assert!(val < 64, "coord must be between 0 and 63");
        Coord {
            x: (val / BOARD_SIZE) as u8,
            y: (val % BOARD_SIZE) as u8,
        }
    }

    pub const fn x(&self) -> usize {
        self.x as usize
    }

    pub const fn y(&self) -> usize {
        self.y as usize
    }

    pub const fn index(&self) -> usize {
        self.x() * BOARD_SIZE + self.y()
    }

    pub const fn to_point(self) -> Point {
        Point::new(self.x as isize, self.y as isize)
    }

    /// Mirrors the coordinate across the horizontal midline (`y` becomes `7 - y`)
    pub const fn flipped_y(self) -> Coord {
        Coord {
            x: self.x,
            y: 7 - self.y,
        }
    }

    /// Mirrors the coordinate across the vertical midline (`x` becomes `7 - x`)
    pub const fn flipped_x(self) -> Coord {
        Coord {
            x: 7 - self.x,
            y: self.y,
        }
    }

    /// Iterates over all coordinates, `x` outer and `y` inner
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..64).map(Coord::from_index)
    }
}

impl TryFrom<Point> for Coord {
    type Error = OutOfBounds;

    fn try_from(p: Point) -> Result<Coord, OutOfBounds> {
        if !p.is_inside() {
            return Err(OutOfBounds { x: p.x, y: p.y });
        }
        Ok(Coord {
            x: p.x as u8,
            y: p.y as u8,
        })
    }
}

impl From<Coord> for Point {
    fn from(c: Coord) -> Point {
        c.to_point()
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        let (x, y) = s.split_once(',').ok_or(CoordParseError::BadFormat)?;
        let x: isize = x.trim().parse()?;
        let y: isize = y.trim().parse()?;
        Ok(Coord::new(x, y)?)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black].into_iter()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Name used to build resource keys
    pub const fn code(&self) -> &'static str {
        match *self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Character used in the textual board dump
    ///
    /// Note that the keys are not unique: `King` shares `R` with `Rook`, and `Knight` is `K`.
    /// Existing board dumps rely on this table, so a dump cannot be parsed back.
    pub const fn key(&self) -> char {
        match *self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'K',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'R',
        }
    }

    pub const fn white(self) -> Piece {
        Piece::new(self, Color::White)
    }

    pub const fn black(self) -> Piece {
        Piece::new(self, Color::Black)
    }

    pub const fn is_sliding(&self) -> bool {
        matches!(*self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
        .into_iter()
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Key used by renderers to locate the piece bitmap, e.g. `"w_rook"`
    pub fn resource_key(&self) -> String {
        format!("{}_{}", self.color.as_char(), self.kind.code())
    }

    pub fn as_char(&self) -> char {
        let key = self.kind.key();
        match self.color {
            Color::White => key.to_ascii_uppercase(),
            Color::Black => key.to_ascii_lowercase(),
        }
    }

    pub fn as_utf8_char(&self) -> char {
        let glyphs = match self.color {
            Color::White => ['♙', '♘', '♗', '♖', '♕', '♔'],
            Color::Black => ['♟', '♞', '♝', '♜', '♛', '♚'],
        };
        glyphs[self.kind as usize]
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of a board cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Square {
    #[default]
    Empty,
    Piece(Piece),
}

impl Square {
    pub const fn is_empty(&self) -> bool {
        matches!(*self, Square::Empty)
    }

    pub const fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub const fn piece(&self) -> Option<Piece> {
        match *self {
            Square::Empty => None,
            Square::Piece(p) => Some(p),
        }
    }

    pub const fn color(&self) -> Option<Color> {
        match *self {
            Square::Empty => None,
            Square::Piece(p) => Some(p.color),
        }
    }

    /// Returns `None` for an empty square, which has no bitmap
    pub fn resource_key(&self) -> Option<String> {
        self.piece().map(|p| p.resource_key())
    }

    pub fn as_char(&self) -> char {
        match self {
            Square::Empty => '.',
            Square::Piece(p) => p.as_char(),
        }
    }

    pub fn as_utf8_char(&self) -> char {
        match self {
            Square::Empty => '.',
            Square::Piece(p) => p.as_utf8_char(),
        }
    }
}

impl From<Piece> for Square {
    fn from(p: Piece) -> Square {
        Square::Piece(p)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}
