//! Game status derivation.
//!
//! Recomputed from scratch on every query; nothing is cached between moves.
//! Checkmate and stalemate are the only terminal conditions recognized
//! (no repetition, fifty-move, or material rules).

use crate::board::castling_memory::CastlingMemory;
use crate::board::grid::Board;
use crate::board::piece::PieceColor;
use crate::chess_errors::EngineError;
use crate::game::move_record::MoveRecord;
use crate::rules::check::is_in_check;
use crate::rules::legality::side_has_any_legal_move;

/// The state of a game as derived from a position and its move context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game continues; `in_check` drives UI highlighting of the king.
    InProgress {
        turn: PieceColor,
        in_check: bool,
    },
    /// Side to move is in check with no legal reply.
    Checkmate {
        winner: PieceColor,
    },
    /// Side to move is not in check but has no legal reply. Drawn.
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => write!(f, "{winner} won by checkmate"),
            GameStatus::Stalemate => write!(f, "Draw by stalemate"),
            GameStatus::InProgress {
                turn,
                in_check: true,
            } => write!(f, "{turn} king is in check"),
            GameStatus::InProgress { turn, .. } => write!(f, "{turn} to move"),
        }
    }
}

/// Derives the status for `side_to_move` in the given position.
///
/// # Arguments
/// * `board` - The position after the last applied move.
/// * `side_to_move` - Whose reply is being judged.
/// * `last_move` - Context for en passant replies.
/// * `castling` - Context for castling replies.
pub fn derive_status(
    board: &Board,
    side_to_move: PieceColor,
    last_move: Option<&MoveRecord>,
    castling: Option<&CastlingMemory>,
) -> Result<GameStatus, EngineError> {
    let in_check = is_in_check(board, side_to_move)?;
    let any_legal_move = side_has_any_legal_move(board, side_to_move, last_move, castling)?;

    if !any_legal_move {
        return Ok(if in_check {
            GameStatus::Checkmate {
                winner: side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        });
    }

    Ok(GameStatus::InProgress {
        turn: side_to_move,
        in_check,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_location::BoardLocation;
    use crate::board::piece::PieceColor::{Black, White};
    use crate::board::piece::PieceKind::*;
    use crate::board::piece::{Piece, PieceKind};

    fn put(board: &mut Board, kind: PieceKind, color: PieceColor, at: BoardLocation) {
        board.place(Piece::new(kind, color), at).unwrap();
    }

    #[test]
    fn fresh_game_is_in_progress() {
        let board = Board::standard_start();
        let status = derive_status(&board, White, None, None).unwrap();
        assert_eq!(
            status,
            GameStatus::InProgress {
                turn: White,
                in_check: false
            }
        );
        assert!(!status.is_game_over());
        assert_eq!(status.to_string(), "White to move");
    }

    #[test]
    fn check_is_surfaced_while_in_progress() {
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 4));
        put(&mut board, King, Black, (0, 0));
        put(&mut board, Rook, Black, (2, 4));

        let status = derive_status(&board, White, None, None).unwrap();
        assert_eq!(
            status,
            GameStatus::InProgress {
                turn: White,
                in_check: true
            }
        );
        assert_eq!(status.to_string(), "White king is in check");
    }

    #[test]
    fn back_rank_mate() {
        // White king boxed in behind its own pawns, black queen sweeping
        // the first rank. No flight square, no block, no capture.
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 4)); // e1
        put(&mut board, Pawn, White, (6, 3)); // d2
        put(&mut board, Pawn, White, (6, 4)); // e2
        put(&mut board, Pawn, White, (6, 5)); // f2
        put(&mut board, Queen, Black, (7, 0)); // a1
        put(&mut board, King, Black, (0, 4));

        let status = derive_status(&board, White, None, None).unwrap();
        assert_eq!(status, GameStatus::Checkmate { winner: Black });
        assert!(status.is_game_over());
        assert_eq!(status.to_string(), "Black won by checkmate");
    }

    #[test]
    fn rook_corner_mate() {
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 0)); // a1
        put(&mut board, King, Black, (5, 1)); // b3
        put(&mut board, Rook, Black, (7, 7)); // h1

        let status = derive_status(&board, White, None, None).unwrap();
        assert_eq!(status, GameStatus::Checkmate { winner: Black });
    }

    #[test]
    fn cornered_king_stalemate() {
        // King alone on a1; enemy king on a3 and rook on b8 cover a2, b1,
        // and b2 without giving check.
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 0)); // a1
        put(&mut board, King, Black, (5, 0)); // a3
        put(&mut board, Rook, Black, (0, 1)); // b8

        assert!(!is_in_check(&board, White).unwrap());
        let status = derive_status(&board, White, None, None).unwrap();
        assert_eq!(status, GameStatus::Stalemate);
        assert_eq!(status.to_string(), "Draw by stalemate");
    }

    #[test]
    fn status_reflects_move_context() {
        // The same position with and without an en passant window: the
        // move record must flow through to the legality scan.
        let mut board = Board::empty();
        put(&mut board, King, White, (7, 4));
        put(&mut board, King, Black, (0, 4));
        put(&mut board, Pawn, White, (3, 4));
        put(&mut board, Pawn, Black, (3, 3));

        let record = MoveRecord {
            from: (1, 3),
            to: (3, 3),
            piece: Piece::new(Pawn, Black),
        };
        let with_window =
            crate::rules::legality::legal_destinations(&board, (3, 4), Some(&record), None)
                .unwrap();
        let without_window =
            crate::rules::legality::legal_destinations(&board, (3, 4), None, None).unwrap();
        assert_eq!(with_window.len(), without_window.len() + 1);

        let status = derive_status(&board, White, Some(&record), None).unwrap();
        assert!(!status.is_game_over());
    }
}
