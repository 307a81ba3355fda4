use crate::board::board_location::BoardLocation;
use crate::board::piece::{Piece, PieceKind};

/// The last move applied to a board, kept alongside it because en passant
/// eligibility only exists on the immediately following move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub piece: Piece,
}

impl MoveRecord {
    /// True for a pawn that just advanced two squares, which is the only
    /// move that opens an en passant window.
    #[inline]
    pub fn is_double_pawn_advance(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && (self.to.0 - self.from.0).abs() == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceColor;

    #[test]
    fn double_advance_detection() {
        let pawn = Piece::new(PieceKind::Pawn, PieceColor::Black);
        let double = MoveRecord {
            from: (1, 3),
            to: (3, 3),
            piece: pawn,
        };
        assert!(double.is_double_pawn_advance());

        let single = MoveRecord {
            from: (1, 3),
            to: (2, 3),
            piece: pawn,
        };
        assert!(!single.is_double_pawn_advance());

        let rook_slide = MoveRecord {
            from: (0, 0),
            to: (4, 0),
            piece: Piece::new(PieceKind::Rook, PieceColor::Black),
        };
        assert!(!rook_slide.is_double_pawn_advance());
    }
}
