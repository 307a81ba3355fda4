//! Piece value types shared by the whole engine.

use serde::{Deserialize, Serialize};

/// Side of a piece, and by extension the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a forward pawn step. White pawns march toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row on which this side's pawns begin, enabling the double step.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Farthest rank for this side's pawns; reaching it suspends the move
    /// until a promotion choice is supplied.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            PieceColor::White => 0,
            PieceColor::Black => 7,
        }
    }

    /// Home rank holding the back-row pieces at the start of a game.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

impl std::fmt::Display for PieceColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

/// Kind of a piece (color is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Whether a pawn may promote into this kind.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// An occupant of a board square. Immutable value; moves replace occupancy
/// rather than mutating a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Piece { kind, color }
    }
}
