//! Castling eligibility memory.
//!
//! Records whether each king and each original-corner rook has ever moved.
//! Flags are monotonic: once set they stay set for the lifetime of a game
//! and are only discarded by constructing a fresh value on reset. Undo does
//! not clear them.

use crate::board::board_location::BoardLocation;
use crate::board::piece::{Piece, PieceColor, PieceKind};

/// Which wing a castling move targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    /// Rook origin column 7.
    Kingside,
    /// Rook origin column 0.
    Queenside,
}

impl CastlingSide {
    /// The column the participating rook starts on.
    #[inline]
    pub const fn rook_origin_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }
}

/// Six monotonic first-move flags, one per king and corner rook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CastlingMemory {
    white_king_moved: bool,
    white_kingside_rook_moved: bool,
    white_queenside_rook_moved: bool,
    black_king_moved: bool,
    black_kingside_rook_moved: bool,
    black_queenside_rook_moved: bool,
}

impl CastlingMemory {
    pub fn new() -> Self {
        CastlingMemory::default()
    }

    /// Records that `piece` moved away from `origin`. Only king moves and
    /// rook moves off the corner columns affect castling eligibility;
    /// everything else is ignored.
    pub fn record_move(&mut self, piece: &Piece, origin: &BoardLocation) {
        match piece.kind {
            PieceKind::King => match piece.color {
                PieceColor::White => self.white_king_moved = true,
                PieceColor::Black => self.black_king_moved = true,
            },
            PieceKind::Rook => {
                // Only a rook leaving its home corner forfeits a right.
                if origin.0 != piece.color.home_row() {
                    return;
                }
                match (piece.color, origin.1) {
                    (PieceColor::White, 0) => self.white_queenside_rook_moved = true,
                    (PieceColor::White, 7) => self.white_kingside_rook_moved = true,
                    (PieceColor::Black, 0) => self.black_queenside_rook_moved = true,
                    (PieceColor::Black, 7) => self.black_kingside_rook_moved = true,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Whether neither the king nor the given wing's rook has moved yet.
    /// Says nothing about occupancy or attacks; those are checked by the
    /// legality layer.
    pub fn right_intact(&self, color: PieceColor, side: CastlingSide) -> bool {
        match (color, side) {
            (PieceColor::White, CastlingSide::Kingside) => {
                !self.white_king_moved && !self.white_kingside_rook_moved
            }
            (PieceColor::White, CastlingSide::Queenside) => {
                !self.white_king_moved && !self.white_queenside_rook_moved
            }
            (PieceColor::Black, CastlingSide::Kingside) => {
                !self.black_king_moved && !self.black_kingside_rook_moved
            }
            (PieceColor::Black, CastlingSide::Queenside) => {
                !self.black_king_moved && !self.black_queenside_rook_moved
            }
        }
    }

    /// True when the given king's flag has been set.
    pub fn king_has_moved(&self, color: PieceColor) -> bool {
        match color {
            PieceColor::White => self.white_king_moved,
            PieceColor::Black => self.black_king_moved,
        }
    }
}
