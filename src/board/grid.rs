//! The 8x8 mailbox board.

use serde::{Deserialize, Serialize};

use crate::board::board_location::BoardLocation;
use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::chess_errors::EngineError;

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// Row 0 is Black's home rank, row 7 White's. The board is a plain value:
/// cloning it is how move application produces the next position, so past
/// positions can be retained for history/undo.
///
/// The serialized form is the 8x8 array of nullable `{type, color}` pairs
/// the host persists; any board the engine produced round-trips through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces at all, for sandbox/demo use.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting layout.
    pub fn standard_start() -> Self {
        let mut board = Board::empty();
        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_row.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, PieceColor::Black));
            board.squares[7][col] = Some(Piece::new(kind, PieceColor::White));
        }
        for col in 0..8 {
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, PieceColor::White));
        }
        board
    }

    /// Read-only view of a square. The location must already be validated.
    #[inline]
    pub fn view(&self, x: &BoardLocation) -> &Option<Piece> {
        &self.squares[x.0 as usize][x.1 as usize]
    }

    /// Mutable access to a square. The location must already be validated.
    #[inline]
    pub fn at(&mut self, x: &BoardLocation) -> &mut Option<Piece> {
        &mut self.squares[x.0 as usize][x.1 as usize]
    }

    /// Places a piece on an empty square.
    pub fn place(&mut self, piece: Piece, x: BoardLocation) -> Result<(), EngineError> {
        if self.view(&x).is_some() {
            return Err(EngineError::SquareOccupied(x));
        }
        *self.at(&x) = Some(piece);
        Ok(())
    }

    /// Clears a square, returning whatever occupied it.
    pub fn remove(&mut self, x: BoardLocation) -> Option<Piece> {
        self.at(&x).take()
    }

    /// Iterates over every occupied square as `(location, piece)`.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, square)| {
                square.map(|piece| ((row as i8, col as i8), piece))
            })
        })
    }

    /// Scans the board for the king of the given color.
    pub fn find_king(&self, color: PieceColor) -> Option<BoardLocation> {
        self.occupied_squares()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(location, _)| location)
    }

    /// Counts pieces of a kind and color, used by invariant checks.
    pub fn count_pieces(&self, kind: PieceKind, color: PieceColor) -> usize {
        self.occupied_squares()
            .filter(|(_, piece)| piece.kind == kind && piece.color == color)
            .count()
    }
}
