//! The game session context.
//!
//! Everything a host needs to drive one game lives here: the board, the
//! side to move, the last move, castling memory, the board history for
//! undo, and an optional suspended promotion. The engine holds no other
//! state; hosts are responsible for sequencing calls (one interaction at a
//! time) and for persisting the board between them.

use crate::board::board_location::{require_on_board, BoardLocation};
use crate::board::castling_memory::CastlingMemory;
use crate::board::grid::Board;
use crate::board::piece::{Piece, PieceColor, PieceKind};
use crate::chess_errors::EngineError;
use crate::game::move_record::MoveRecord;
use crate::rules::legality::{apply_move_to_board, legal_destinations};
use crate::rules::status::{derive_status, GameStatus};

/// What a successful `apply_move` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The transition completed and the side to move flipped.
    Completed,
    /// A pawn reached its promotion row; the transition is suspended until
    /// `choose_promotion` supplies a piece choice.
    AwaitingPromotion,
}

/// One game's full context. Cloning a session snapshots it.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    side_to_move: PieceColor,
    last_move: Option<MoveRecord>,
    castling: CastlingMemory,
    history: Vec<Board>,
    pending_promotion: Option<BoardLocation>,
    sandbox: bool,
}

impl GameSession {
    /// A competitive game from the standard starting position.
    pub fn new_game() -> Self {
        GameSession {
            board: Board::standard_start(),
            side_to_move: PieceColor::White,
            last_move: None,
            castling: CastlingMemory::new(),
            history: Vec::new(),
            pending_promotion: None,
            sandbox: false,
        }
    }

    /// A sandbox session on an empty board: pieces may be placed and
    /// removed freely and either color may be moved, for demonstrations.
    pub fn sandbox() -> Self {
        GameSession {
            board: Board::empty(),
            side_to_move: PieceColor::White,
            last_move: None,
            castling: CastlingMemory::new(),
            history: Vec::new(),
            pending_promotion: None,
            sandbox: true,
        }
    }

    /// Restores a session from a persisted board, continuing as a
    /// competitive game with `side_to_move` to play. Move context that was
    /// not persisted (en passant window) starts empty; castling memory
    /// starts fresh unless the host kept its own record.
    pub fn from_board(board: Board, side_to_move: PieceColor, castling: CastlingMemory) -> Self {
        GameSession {
            board,
            side_to_move,
            last_move: None,
            castling,
            history: Vec::new(),
            pending_promotion: None,
            sandbox: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    pub fn castling_memory(&self) -> &CastlingMemory {
        &self.castling
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// The square of a pawn whose promotion choice is pending, if any.
    pub fn pending_promotion(&self) -> Option<BoardLocation> {
        self.pending_promotion
    }

    /// Derives the current game status. Sandbox sessions report in
    /// progress without consulting the (possibly king-less) board.
    pub fn status(&self) -> Result<GameStatus, EngineError> {
        if self.sandbox {
            return Ok(GameStatus::InProgress {
                turn: self.side_to_move,
                in_check: false,
            });
        }
        derive_status(
            &self.board,
            self.side_to_move,
            self.last_move.as_ref(),
            Some(&self.castling),
        )
    }

    /// Enumerates the fully-legal destinations for the piece on `square`,
    /// for rendering move hints. Empty squares yield an empty list.
    pub fn legal_destinations(&self, square: (i8, i8)) -> Result<Vec<BoardLocation>, EngineError> {
        if self.sandbox {
            // Free-placement boards may lack kings; hint with pattern
            // legality only by skipping enumeration entirely for them.
            if self.board.find_king(PieceColor::White).is_none()
                || self.board.find_king(PieceColor::Black).is_none()
            {
                return Ok(Vec::new());
            }
        }
        legal_destinations(
            &self.board,
            square,
            self.last_move.as_ref(),
            Some(&self.castling),
        )
    }

    /// Applies the move `from -> to` after validating it end to end.
    ///
    /// On success the board, castling memory, and move record advance as
    /// one atomic transition and the prior board is pushed onto the
    /// history. A pawn reaching its farthest rank leaves the transition
    /// suspended (`MoveOutcome::AwaitingPromotion`): the provisional pawn
    /// sits on the destination and the side to move does not flip until
    /// `choose_promotion`.
    ///
    /// Any `Err` leaves the session untouched.
    pub fn apply_move(&mut self, from: (i8, i8), to: (i8, i8)) -> Result<MoveOutcome, EngineError> {
        if self.pending_promotion.is_some() {
            return Err(EngineError::PromotionPending);
        }
        let from = require_on_board(from)?;
        let to = require_on_board(to)?;
        let piece = match self.board.view(&from) {
            Some(piece) => *piece,
            None => return Err(EngineError::NoPieceAtOrigin(from)),
        };

        if !self.sandbox {
            if piece.color != self.side_to_move {
                return Err(EngineError::IllegalMove { from, to });
            }
            if self.status()?.is_game_over() {
                return Err(EngineError::GameAlreadyOver);
            }
        }

        let allowed = self.legal_destinations(from)?.contains(&to);
        if !allowed {
            return Err(EngineError::IllegalMove { from, to });
        }

        let next_board = apply_move_to_board(&self.board, &from, &to);

        // Commit point: nothing below fails.
        self.history.push(std::mem::replace(&mut self.board, next_board));
        self.castling.record_move(&piece, &from);
        if piece.kind == PieceKind::King && (to.1 - from.1).abs() == 2 {
            // Castling moves the rook too; flag its origin in the same
            // transition.
            let rook_col = if to.1 > from.1 { 7 } else { 0 };
            self.castling.record_move(
                &Piece::new(PieceKind::Rook, piece.color),
                &(from.0, rook_col),
            );
        }
        self.last_move = Some(MoveRecord { from, to, piece });

        if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
            self.pending_promotion = Some(to);
            return Ok(MoveOutcome::AwaitingPromotion);
        }

        self.side_to_move = self.side_to_move.opposite();
        Ok(MoveOutcome::Completed)
    }

    /// Completes a suspended promotion by replacing the provisional pawn
    /// with the chosen piece of the same color, then flips the side to
    /// move. Rejecting an invalid choice leaves the suspension active.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<(), EngineError> {
        let square = match self.pending_promotion {
            Some(square) => square,
            None => return Err(EngineError::NoPendingPromotion),
        };
        if !kind.is_promotion_choice() {
            return Err(EngineError::InvalidPromotionChoice(kind));
        }
        let color = match self.board.view(&square) {
            Some(pawn) => pawn.color,
            // The provisional pawn is placed by apply_move and the board
            // cannot change while the promotion is pending.
            None => return Err(EngineError::NoPieceAtOrigin(square)),
        };
        *self.board.at(&square) = Some(Piece::new(kind, color));
        self.pending_promotion = None;
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }

    /// Steps back to the previous board from the saved history. Returns
    /// `false` when there is nothing to undo.
    ///
    /// Undo restores the board, never replays an inverse move: the
    /// last-move record is dropped (closing any en passant window) and
    /// castling memory stays as it was, since its flags are monotonic for
    /// the lifetime of a game.
    pub fn undo(&mut self) -> bool {
        let previous = match self.history.pop() {
            Some(board) => board,
            None => return false,
        };
        self.board = previous;
        if self.pending_promotion.take().is_none() {
            // A suspended promotion never flipped the turn, so only a
            // completed move flips it back.
            self.side_to_move = self.side_to_move.opposite();
        }
        self.last_move = None;
        true
    }

    /// Number of boards retained for undo.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Starts the session over from the standard layout, discarding
    /// history and resetting castling memory and mode.
    pub fn reset(&mut self) {
        *self = GameSession::new_game();
    }

    /// Clears every square and switches to sandbox mode.
    pub fn clear_board(&mut self) {
        *self = GameSession::sandbox();
    }

    /// Sandbox-only: puts a piece on an empty square.
    pub fn place_piece(&mut self, piece: Piece, square: (i8, i8)) -> Result<(), EngineError> {
        if !self.sandbox {
            return Err(EngineError::SandboxOnly);
        }
        let square = require_on_board(square)?;
        self.history.push(self.board.clone());
        match self.board.place(piece, square) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.history.pop();
                Err(error)
            }
        }
    }

    /// Sandbox-only: removes whatever occupies a square.
    pub fn remove_piece(&mut self, square: (i8, i8)) -> Result<Option<Piece>, EngineError> {
        if !self.sandbox {
            return Err(EngineError::SandboxOnly);
        }
        let square = require_on_board(square)?;
        self.history.push(self.board.clone());
        Ok(self.board.remove(square))
    }
}
