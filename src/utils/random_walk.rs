//! Randomized legal self-play for invariant smoke-testing.
//!
//! Plays games by choosing uniformly among the fully-legal moves of the
//! side to move, auto-queening at promotion. Deterministic per seed. Not a
//! playing engine: the walk exists to exercise the rules across thousands
//! of reachable positions and to assert invariants that no single
//! hand-built scenario covers well (king counts, kings never adjacent,
//! status always derivable).

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::board::board_location::BoardLocation;
use crate::board::grid::Board;
use crate::board::piece::{PieceColor, PieceKind};
use crate::chess_errors::EngineError;
use crate::game::session::{GameSession, MoveOutcome};
use crate::rules::status::GameStatus;

/// Result of one random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkReport {
    /// Status when the walk stopped.
    pub final_status: GameStatus,
    /// Moves actually applied.
    pub plies_played: u32,
}

/// Plays up to `max_plies` uniformly random legal moves from the standard
/// starting position, stopping early at checkmate or stalemate.
pub fn play_random_game(seed: u64, max_plies: u32) -> Result<WalkReport, EngineError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new_game();
    let mut plies_played = 0;

    while plies_played < max_plies {
        let status = session.status()?;
        if status.is_game_over() {
            return Ok(WalkReport {
                final_status: status,
                plies_played,
            });
        }

        let (from, to) = match random_legal_move(&session, &mut rng)? {
            Some(chosen) => chosen,
            None => break, // unreachable while status is in progress
        };
        if session.apply_move(from, to)? == MoveOutcome::AwaitingPromotion {
            session.choose_promotion(PieceKind::Queen)?;
        }
        plies_played += 1;
    }

    Ok(WalkReport {
        final_status: session.status()?,
        plies_played,
    })
}

/// Picks one `(from, to)` uniformly from all legal moves of the side to
/// move, or `None` when no legal move exists.
fn random_legal_move<R: Rng + ?Sized>(
    session: &GameSession,
    rng: &mut R,
) -> Result<Option<(BoardLocation, BoardLocation)>, EngineError> {
    let mut all_moves: Vec<(BoardLocation, BoardLocation)> = Vec::new();
    for (from, piece) in session.board().occupied_squares() {
        if piece.color != session.side_to_move() {
            continue;
        }
        for to in session.legal_destinations(from)? {
            all_moves.push((from, to));
        }
    }
    Ok(all_moves.into_iter().choose(rng))
}

/// Chebyshev distance between the two kings, if both are present.
pub fn king_separation(board: &Board) -> Option<i8> {
    let white = board.find_king(PieceColor::White)?;
    let black = board.find_king(PieceColor::Black)?;
    Some((white.0 - black.0).abs().max((white.1 - black.1).abs()))
}
