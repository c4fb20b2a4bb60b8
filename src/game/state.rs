use crate::error::MoveError;

use super::{Board, Player};

/// Status of a game as reported to the caller: either play continues, or
/// the position is terminal with a winner or a drawn full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            status: GameStatus::InProgress,
        }
    }

    /// Build a state around an existing board position.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        GameState {
            board,
            current_player,
            status: Self::derive_status(&board),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Legal columns for the current player, center-out. Empty once the
    /// game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.possible_moves()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let board = self.board.child(column, self.current_player.to_cell())?;

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
            status: Self::derive_status(&board),
        })
    }

    /// Apply a move in place (for callers that do not need the old state).
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        *self = self.apply_move(column)?;
        Ok(())
    }

    fn derive_status(board: &Board) -> GameStatus {
        if let Some(player) = board.winner().and_then(|cell| cell.player()) {
            GameStatus::Won(player)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
