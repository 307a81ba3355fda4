//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of a `Board` for debugging, tests, and
//! diagnostics in text environments.

use crate::board::grid::Board;
use crate::board::piece::{Piece, PieceColor, PieceKind};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (Black's home rank) prints at the top, matching how the host
/// application draws the board.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8 {
        let rank_label = char::from(b'8' - row as u8);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8 {
            match board.view(&(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (PieceColor::White, PieceKind::Pawn) => '♙',
        (PieceColor::White, PieceKind::Knight) => '♘',
        (PieceColor::White, PieceKind::Bishop) => '♗',
        (PieceColor::White, PieceKind::Rook) => '♖',
        (PieceColor::White, PieceKind::Queen) => '♕',
        (PieceColor::White, PieceKind::King) => '♔',
        (PieceColor::Black, PieceKind::Pawn) => '♟',
        (PieceColor::Black, PieceKind::Knight) => '♞',
        (PieceColor::Black, PieceKind::Bishop) => '♝',
        (PieceColor::Black, PieceKind::Rook) => '♜',
        (PieceColor::Black, PieceKind::Queen) => '♛',
        (PieceColor::Black, PieceKind::King) => '♚',
    }
}
