//! Errors used throughout the rules engine.
//!
//! A single enum, `EngineError`, is the error type for every fallible
//! operation in the crate. All rejections are local and synchronous: a
//! failed call leaves the board and session exactly as they were, so the
//! caller can re-render the current state and re-prompt.
//!
//! Usage guidelines:
//! - Input and move-validation variants (`InvalidSquare`, `NoPieceAtOrigin`,
//!   `IllegalMove`, `InvalidPromotionChoice`, ...) are expected, recoverable
//!   conditions suitable for showing to a user.
//! - `MissingKing` indicates a corrupted position and should never occur for
//!   any state the engine itself produced; treat it as a fatal
//!   internal-consistency failure.

use crate::board::board_location::BoardLocation;
use crate::board::piece::{PieceColor, PieceKind};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Offsetting a location by `(d_row, d_col)` would leave the board.
    ///
    /// Payload: (origin_location, d_row, d_col)
    OutOfBounds((BoardLocation, i8, i8)),

    /// A caller-supplied coordinate pair lies outside `0..=7`.
    InvalidSquare((i8, i8)),

    /// A move or enumeration was requested from a square holding no piece.
    NoPieceAtOrigin(BoardLocation),

    /// The requested move is not among the legal destinations for the
    /// origin square. Expected and non-fatal; the caller should re-prompt.
    IllegalMove {
        from: BoardLocation,
        to: BoardLocation,
    },

    /// Tried to place a piece onto an occupied square.
    SquareOccupied(BoardLocation),

    /// The board holds no king of the given color. Positions produced by
    /// the engine always contain exactly one king per color, so this
    /// signals corruption in externally supplied state.
    MissingKing(PieceColor),

    /// A promotion choice other than queen/rook/bishop/knight was supplied.
    /// The suspended transition stays pending.
    InvalidPromotionChoice(PieceKind),

    /// `choose_promotion` was called with no promotion pending.
    NoPendingPromotion,

    /// A mutation was attempted while a promotion choice is still pending.
    PromotionPending,

    /// A move was attempted after checkmate or stalemate.
    GameAlreadyOver,

    /// Free placement/removal was attempted on a competitive session.
    SandboxOnly,
}
