//! Crate root module declarations for the lesson chess rules engine.
//!
//! This file exposes the board model, the rules layer (legality, check,
//! status), the game session context, and utility helpers so hosts and
//! tests can import stable module paths.

pub mod board {
    pub mod board_location;
    pub mod castling_memory;
    pub mod grid;
    pub mod piece;
}

pub mod rules {
    pub mod check;
    pub mod legality;
    pub mod status;
}

pub mod game {
    pub mod move_record;
    pub mod session;
}

pub mod utils {
    pub mod random_walk;
    pub mod render_board;
}

pub mod chess_errors;
