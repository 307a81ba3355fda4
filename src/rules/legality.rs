//! Move legality.
//!
//! Two tiers, kept deliberately asymmetric:
//!
//! * `pseudo_legal_move` checks a piece's movement pattern and path
//!   clearance only. It is what check detection probes with, and it never
//!   consults the fully-legal filter.
//! * `fully_legal_move` additionally simulates the resulting board and
//!   rejects anything that leaves the mover's own king attacked.
//!
//! Collapsing the tiers would make "is the king in check" depend on "is the
//! king in check after a hypothetical move" without bound; the split is
//! what terminates the recursion. Castling is only considered when a
//! `CastlingMemory` is supplied, and attack probes supply `None`, so the
//! one pseudo-legal rule that itself needs check detection is never reached
//! from inside check detection.

use crate::board::board_location::{require_on_board, BoardLocation};
use crate::board::castling_memory::{CastlingMemory, CastlingSide};
use crate::board::grid::Board;
use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::chess_errors::EngineError;
use crate::game::move_record::MoveRecord;
use crate::rules::check::is_in_check;

/// Determines whether moving the piece on `from` to `to` obeys its movement
/// pattern, ignoring whether the mover's own king ends up attacked.
///
/// # Arguments
/// * `board` - The position to test against.
/// * `from` / `to` - Origin and destination, already validated as on-board.
/// * `last_move` - The previous move, needed for en passant eligibility.
/// * `allow_king_capture` - Permits a pseudo-move onto the enemy king's
///   square; only check detection sets this.
/// * `castling` - First-move memory; `None` disables the castling rule.
///
/// # Returns
/// * `Ok(true)` / `Ok(false)` for the pattern verdict.
/// * `Err(EngineError)` only out of castling's check simulation.
pub fn pseudo_legal_move(
    board: &Board,
    from: &BoardLocation,
    to: &BoardLocation,
    last_move: Option<&MoveRecord>,
    allow_king_capture: bool,
    castling: Option<&CastlingMemory>,
) -> Result<bool, EngineError> {
    if from == to {
        return Ok(false);
    }
    let piece = match board.view(from) {
        Some(piece) => *piece,
        None => return Ok(false),
    };
    if let Some(target) = board.view(to) {
        if target.color == piece.color {
            return Ok(false);
        }
        if target.kind == PieceKind::King && !allow_king_capture {
            return Ok(false);
        }
    }

    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;

    match piece.kind {
        PieceKind::Pawn => Ok(pawn_pattern(board, &piece, from, to, last_move)),
        PieceKind::Knight => Ok(matches!(
            (d_row.abs(), d_col.abs()),
            (2, 1) | (1, 2)
        )),
        PieceKind::Bishop => {
            Ok(d_row.abs() == d_col.abs() && d_row != 0 && path_is_clear(board, from, to))
        }
        PieceKind::Rook => {
            Ok((d_row == 0) != (d_col == 0) && path_is_clear(board, from, to))
        }
        PieceKind::Queen => {
            let straight = (d_row == 0) != (d_col == 0);
            let diagonal = d_row.abs() == d_col.abs() && d_row != 0;
            Ok((straight || diagonal) && path_is_clear(board, from, to))
        }
        PieceKind::King => {
            if d_row.abs() <= 1 && d_col.abs() <= 1 {
                return Ok(true);
            }
            if d_row == 0 && d_col.abs() == 2 {
                if let Some(memory) = castling {
                    return castling_allowed(board, &piece, from, to, memory);
                }
            }
            Ok(false)
        }
    }
}

/// Pawn pattern: forward steps onto empty squares, diagonal captures, and
/// the en passant capture into the square an enemy pawn just jumped over.
fn pawn_pattern(
    board: &Board,
    piece: &Piece,
    from: &BoardLocation,
    to: &BoardLocation,
    last_move: Option<&MoveRecord>,
) -> bool {
    let direction = piece.color.pawn_direction();
    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;

    if d_col == 0 {
        if board.view(to).is_some() {
            return false;
        }
        if d_row == direction {
            return true;
        }
        // Double step from the original rank, both squares empty.
        return from.0 == piece.color.pawn_start_row()
            && d_row == 2 * direction
            && board.view(&(from.0 + direction, from.1)).is_none();
    }

    if d_col.abs() != 1 || d_row != direction {
        return false;
    }
    if board.view(to).is_some() {
        // Same-color and king targets were already filtered by the caller.
        return true;
    }

    // Diagonal step into an empty square: only legal as en passant, when
    // the last move was an enemy pawn's double step landing beside us.
    match last_move {
        Some(last) => {
            last.is_double_pawn_advance()
                && last.piece.color != piece.color
                && last.to.0 == from.0
                && last.to.1 == to.1
        }
        None => false,
    }
}

/// Walks the squares strictly between `from` and `to` along a straight or
/// diagonal line and reports whether all of them are empty.
fn path_is_clear(board: &Board, from: &BoardLocation, to: &BoardLocation) -> bool {
    let step_row = (to.0 - from.0).signum();
    let step_col = (to.1 - from.1).signum();
    let mut current = (from.0 + step_row, from.1 + step_col);
    while current != *to {
        if board.view(&current).is_some() {
            return false;
        }
        current = (current.0 + step_row, current.1 + step_col);
    }
    true
}

/// The castling rule: rights intact, rook in place, path clear, and the
/// king neither in check now nor crossing/landing on an attacked square.
fn castling_allowed(
    board: &Board,
    king: &Piece,
    from: &BoardLocation,
    to: &BoardLocation,
    memory: &CastlingMemory,
) -> Result<bool, EngineError> {
    let side = if to.1 > from.1 {
        CastlingSide::Kingside
    } else {
        CastlingSide::Queenside
    };
    if !memory.right_intact(king.color, side) {
        return Ok(false);
    }

    let rook_square = (from.0, side.rook_origin_col());
    match board.view(&rook_square) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color => {}
        _ => return Ok(false),
    }

    // All squares strictly between king and rook must be empty.
    let low = from.1.min(rook_square.1) + 1;
    let high = from.1.max(rook_square.1);
    for col in low..high {
        if board.view(&(from.0, col)).is_some() {
            return Ok(false);
        }
    }

    if is_in_check(board, king.color)? {
        return Ok(false);
    }

    // The king may not pass through or land on an attacked square; simulate
    // the crossed square and the destination and re-run check detection.
    let step = (to.1 - from.1).signum();
    for col in [from.1 + step, to.1] {
        let mut trial = board.clone();
        let moved = trial.remove(*from);
        *trial.at(&(from.0, col)) = moved;
        if is_in_check(&trial, king.color)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Produces the board that results from moving `from` to `to`, as a new
/// value. Handles the two compound transitions: the en passant victim is
/// removed, and a two-square king move relocates the matching rook.
///
/// The move is assumed pseudo-legal; this function never rejects.
pub fn apply_move_to_board(board: &Board, from: &BoardLocation, to: &BoardLocation) -> Board {
    let mut next = board.clone();
    let piece = match next.remove(*from) {
        Some(piece) => piece,
        None => return next,
    };

    // Pawn sliding diagonally into an empty square is an en passant
    // capture; the victim sits beside the origin, on the destination file.
    if piece.kind == PieceKind::Pawn && from.1 != to.1 && next.view(to).is_none() {
        next.remove((from.0, to.1));
    }

    // A two-square king move carries the rook to the king's near side.
    if piece.kind == PieceKind::King && (to.1 - from.1).abs() == 2 {
        let side = if to.1 > from.1 {
            CastlingSide::Kingside
        } else {
            CastlingSide::Queenside
        };
        let rook_from = (from.0, side.rook_origin_col());
        let rook_to = (from.0, to.1 - (to.1 - from.1).signum());
        if let Some(rook) = next.remove(rook_from) {
            *next.at(&rook_to) = Some(rook);
        }
    }

    *next.at(to) = Some(piece);
    next
}

/// Pseudo-legality plus the king-safety filter: the simulated position must
/// not leave the mover's own king in check. This is the test actual move
/// generation uses; a pinned piece fails it even though its pattern passes.
pub fn fully_legal_move(
    board: &Board,
    from: &BoardLocation,
    to: &BoardLocation,
    last_move: Option<&MoveRecord>,
    castling: Option<&CastlingMemory>,
) -> Result<bool, EngineError> {
    let piece = match board.view(from) {
        Some(piece) => *piece,
        None => return Ok(false),
    };
    if !pseudo_legal_move(board, from, to, last_move, false, castling)? {
        return Ok(false);
    }
    let trial = apply_move_to_board(board, from, to);
    Ok(!is_in_check(&trial, piece.color)?)
}

/// Enumerates every fully-legal destination for the piece on `from` by
/// trying all 64 squares. An empty origin yields an empty list.
///
/// Bounded work (64 candidates, each at most an 8-square path walk plus one
/// simulation); fine for interactive use without attack-map machinery.
pub fn legal_destinations(
    board: &Board,
    from: (i8, i8),
    last_move: Option<&MoveRecord>,
    castling: Option<&CastlingMemory>,
) -> Result<Vec<BoardLocation>, EngineError> {
    let from = require_on_board(from)?;
    if board.view(&from).is_none() {
        return Ok(Vec::new());
    }
    let mut destinations = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = (row, col);
            if fully_legal_move(board, &from, &to, last_move, castling)? {
                destinations.push(to);
            }
        }
    }
    Ok(destinations)
}

/// True when at least one piece of `color` has at least one fully-legal
/// move. Status derivation keys off this.
pub fn side_has_any_legal_move(
    board: &Board,
    color: PieceColor,
    last_move: Option<&MoveRecord>,
    castling: Option<&CastlingMemory>,
) -> Result<bool, EngineError> {
    for (from, piece) in board.occupied_squares() {
        if piece.color != color {
            continue;
        }
        for row in 0..8 {
            for col in 0..8 {
                if fully_legal_move(board, &from, &(row, col), last_move, castling)? {
                    return Ok(true);
                }
            }
        }
    }
    Ok(false)
}
