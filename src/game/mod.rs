//! Core Connect Four game logic: board representation, win detection,
//! move generation, and the game state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, SEARCH_ORDER};
pub use player::Player;
pub use state::{GameState, GameStatus};
