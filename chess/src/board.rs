//! Board and related things

use crate::movegen::{self, MoveList};
use crate::moves::{self, MoveError};
use crate::types::{Color, Coord, OutOfBounds, Piece, PieceKind, Square, BOARD_SIZE};
use raychess_base::geometry;

use std::fmt::{self, Display};

use tracing::debug;

/// Kinds on the back rank, indexed by `x`
const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board
///
/// The board is an 8×8 grid of [`Square`]s, stored row-major with `x` as the outer index. Every
/// cell always holds a square, an empty cell holds [`Square::Empty`].
///
/// The board doesn't enforce any rules on its own: cells are written directly, and the move query
/// ([`Board::valid_moves()`]) only advises which writes make sense. There is no side to move and
/// no move history.
///
/// # Example
///
/// ```
/// # use raychess::{Board, Coord, PieceKind};
/// #
/// let mut board = Board::empty();
/// board.set_cell(0, 1, PieceKind::Bishop.white().into()).unwrap();
/// board.set_cell(4, 4, PieceKind::King.black().into()).unwrap();
///
/// let moves = board.valid_moves(4, 4).unwrap();
/// assert!(moves.contains(&Coord::from_parts(4, 5)));
/// assert!(!moves.contains(&Coord::from_parts(2, 4)));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns a board with all the cells empty
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns a board with the initial position
    ///
    /// Black occupies the rows `y = 0` and `y = 1`, White the rows `y = 7` and `y = 6`. Both sides
    /// are placed as mirror images of each other across the horizontal midline.
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for color in Color::iter() {
            let (home, pawns) = (geometry::home_row(color), geometry::pawn_row(color));
            for (x, kind) in BACK_RANK.into_iter().enumerate() {
                res.put(Coord::from_parts(x, home), Piece::new(kind, color).into());
                res.put(
                    Coord::from_parts(x, pawns),
                    Piece::new(PieceKind::Pawn, color).into(),
                );
            }
        }
        debug!("built initial board");
        res
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Square {
        self.cells[c.x()][c.y()]
    }

    /// Puts `square` to the cell with coordinate `c`
    #[inline]
    pub fn put(&mut self, c: Coord, square: Square) {
        self.cells[c.x()][c.y()] = square;
    }

    /// Returns the contents of the cell `(x, y)`
    pub fn cell_at(&self, x: isize, y: isize) -> Result<Square, OutOfBounds> {
        Ok(self.get(Coord::new(x, y)?))
    }

    /// Puts `square` to the cell `(x, y)`
    ///
    /// Use [`Square::Empty`] to remove a piece.
    pub fn set_cell(&mut self, x: isize, y: isize, square: Square) -> Result<(), OutOfBounds> {
        self.put(Coord::new(x, y)?, square);
        Ok(())
    }

    /// Iterates over all the cells, `x` outer and `y` inner
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Square)> + '_ {
        Coord::iter().map(move |c| (c, self.get(c)))
    }

    /// Calls `f` for every cell, in the same order as [`Board::iter()`]
    pub fn for_each_cell<F: FnMut(Coord, Square)>(&self, mut f: F) {
        for (c, square) in self.iter() {
            f(c, square);
        }
    }

    /// Returns the pseudo-legal destinations of the piece on `(x, y)`
    ///
    /// See [`movegen::valid_moves()`] for the exact rules. An empty cell yields an empty list.
    pub fn valid_moves(&self, x: isize, y: isize) -> Result<MoveList, OutOfBounds> {
        Ok(self.valid_moves_from(Coord::new(x, y)?))
    }

    /// Returns the pseudo-legal destinations of the piece on `c`
    #[inline]
    pub fn valid_moves_from(&self, c: Coord) -> MoveList {
        movegen::valid_moves(self, c)
    }

    /// Returns `true` if `dst` is among the valid moves from `src`
    #[inline]
    pub fn is_move_allowed(&self, src: Coord, dst: Coord) -> bool {
        movegen::is_move_allowed(self, src, dst)
    }

    /// Convenience alias for [`moves::make_move()`]
    pub fn make_move(&mut self, src: Coord, dst: Coord) -> Result<Square, MoveError> {
        moves::make_move(self, src, dst)
    }

    /// Convenience alias for [`moves::move_piece_unchecked()`]
    pub fn move_piece_unchecked(&mut self, src: Coord, dst: Coord) -> Square {
        moves::move_piece_unchecked(self, src, dst)
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use raychess::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 0|rp....PR
    /// 1|kp....PK
    /// 2|bp....PB
    /// 3|qp....PQ
    /// 4|rp....PR
    /// 5|bp....PB
    /// 6|kp....PK
    /// 7|rp....PR
    /// -+--------
    ///  |01234567
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    ///
    /// let res = r#"
    /// 0│♜♟....♙♖
    /// 1│♞♟....♙♘
    /// 2│♝♟....♙♗
    /// 3│♛♟....♙♕
    /// 4│♚♟....♙♔
    /// 5│♝♟....♙♗
    /// 6│♞♟....♙♘
    /// 7│♜♟....♙♖
    /// ─┼────────
    ///  │01234567
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Utf8).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// One line per `x`, one character per `y`, each line terminated by a newline
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in &self.cells {
            for square in row {
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PrettyStyle {
    /// Plain ASCII, pieces use the same characters as the board dump
    Ascii,
    /// Box-drawing frame and chess glyphs
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See [`Board::pretty()`] for details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(s: Square) -> char;

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for x in 0..BOARD_SIZE {
            write!(f, "{}{}", x, Self::VERT_FRAME)?;
            for y in 0..BOARD_SIZE {
                write!(f, "{}", Self::cell(b.get(Coord::from_parts(x, y))))?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in 0..BOARD_SIZE {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{}", y)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(s: Square) -> char {
        s.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(s: Square) -> char {
        s.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
