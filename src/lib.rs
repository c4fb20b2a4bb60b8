//! # Connect Four Engine
//!
//! A two-player Connect Four engine: a deterministic rules core plus a
//! depth-limited negamax search with alpha-beta pruning and a per-decision
//! visited-state memo. Rendering and input belong to the embedding
//! application; this crate only exposes the three operations it needs:
//!
//! - apply a human move: [`GameState::apply_move`]
//! - compute and apply the engine's move: [`NegamaxAgent::play`]
//! - query the game status: [`GameState::status`]
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, move generation,
//!   state machine
//! - [`ai`] — Agent trait, negamax search engine, random baseline
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_four_engine::{GameState, GameStatus, NegamaxAgent};
//!
//! let state = GameState::initial();
//! let state = state.apply_move(3).expect("column 3 is open");
//!
//! let mut engine = NegamaxAgent::new(8);
//! let state = engine.play(&state);
//!
//! assert_eq!(state.status(), GameStatus::InProgress);
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod game;

pub use ai::{Agent, NegamaxAgent, RandomAgent};
pub use config::{EngineConfig, SearchConfig};
pub use error::{ConfigError, MoveError};
pub use game::{Board, Cell, GameState, GameStatus, Player};
