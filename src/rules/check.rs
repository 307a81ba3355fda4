//! Check detection.
//!
//! Locates a color's king and asks, for every opposing piece, whether a
//! pseudo-legal move onto the king's square exists. The probe explicitly
//! permits king capture (otherwise no pattern could ever target the king)
//! and disables castling (a castle can never deliver the attack, and the
//! rule would re-enter check detection).

use crate::board::board_location::BoardLocation;
use crate::board::grid::Board;
use crate::board::piece::PieceColor;
use crate::chess_errors::EngineError;
use crate::rules::legality::pseudo_legal_move;

/// Scans the board for the king of the given color.
pub fn find_king(board: &Board, color: PieceColor) -> Option<BoardLocation> {
    board.find_king(color)
}

/// Whether the king of `color` is currently attacked.
///
/// # Returns
/// * `Ok(bool)` for any position holding that color's king.
/// * `Err(EngineError::MissingKing)` for a corrupted position with no such
///   king. The engine never produces one, so this only surfaces for
///   externally supplied state.
pub fn is_in_check(board: &Board, color: PieceColor) -> Result<bool, EngineError> {
    let king_square = match find_king(board, color) {
        Some(square) => square,
        None => {
            debug_assert!(false, "position without a {color} king");
            return Err(EngineError::MissingKing(color));
        }
    };

    for (from, piece) in board.occupied_squares() {
        if piece.color == color {
            continue;
        }
        // Pseudo-legal probing only; the fully-legal filter would recurse
        // back into this function.
        if pseudo_legal_move(board, &from, &king_square, None, true, None)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceColor::{Black, White};
    use crate::board::piece::PieceKind::*;
    use crate::board::piece::{Piece, PieceKind};

    fn put(board: &mut Board, kind: PieceKind, color: PieceColor, at: BoardLocation) {
        board.place(Piece::new(kind, color), at).unwrap();
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 4));
        put(&mut board, King, Black, (0, 0));
        put(&mut board, Rook, Black, (2, 4));

        assert!(is_in_check(&board, White).unwrap());
        assert!(!is_in_check(&board, Black).unwrap());
    }

    #[test]
    fn blocked_line_is_no_check() {
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 4));
        put(&mut board, King, Black, (0, 0));
        put(&mut board, Rook, Black, (2, 4));
        put(&mut board, Pawn, White, (5, 4));

        assert!(!is_in_check(&board, White).unwrap());
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        let mut board = Board::empty();
        put(&mut board, King, White, (4, 4));
        put(&mut board, King, Black, (0, 0));
        put(&mut board, Pawn, Black, (3, 3));

        assert!(is_in_check(&board, White).unwrap());

        let mut board = Board::empty();
        put(&mut board, King, White, (4, 4));
        put(&mut board, King, Black, (0, 0));
        put(&mut board, Pawn, Black, (3, 4)); // directly in front

        assert!(!is_in_check(&board, White).unwrap());
    }

    #[test]
    fn knight_check_ignores_blockers() {
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 4));
        put(&mut board, King, Black, (0, 0));
        put(&mut board, Knight, Black, (5, 3));
        // Shield the king on every line; the knight still reaches.
        put(&mut board, Pawn, White, (6, 3));
        put(&mut board, Pawn, White, (6, 4));
        put(&mut board, Pawn, White, (6, 5));

        assert!(is_in_check(&board, White).unwrap());
    }

    #[test]
    fn starting_position_is_quiet() {
        let board = Board::standard_start();
        assert!(!is_in_check(&board, White).unwrap());
        assert!(!is_in_check(&board, Black).unwrap());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn missing_king_is_reported() {
        let board = Board::empty();
        assert!(matches!(
            is_in_check(&board, White),
            Err(EngineError::MissingKing(White))
        ));
    }
}
