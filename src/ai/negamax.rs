use std::collections::HashSet;

use crate::config::SearchConfig;
use crate::game::{Board, GameState, Player};

use super::agent::Agent;

/// Depth-limited negamax agent with alpha-beta pruning and a visited-state
/// memo.
///
/// The memo is a per-decision set of boards already expanded during the
/// current `select_action` call. A candidate whose resulting board is
/// already in the set is skipped entirely rather than re-searched; two
/// move orders reaching the same position are only explored once. The set
/// ignores remaining depth, so a position first seen deep in one branch
/// suppresses a shallower revisit elsewhere. That is a deliberate lossy
/// speed trade-off, not a true transposition table.
pub struct NegamaxAgent {
    depth: usize,
    visited: HashSet<Board>,
}

impl NegamaxAgent {
    pub fn new(depth: usize) -> Self {
        NegamaxAgent {
            depth,
            visited: HashSet::new(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.max_depth)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Compute and apply the engine's move for the side to play.
    ///
    /// If the position is already terminal (or no column is open), the
    /// state is returned unchanged.
    pub fn play(&mut self, state: &GameState) -> GameState {
        if state.legal_actions().is_empty() {
            return *state;
        }
        let col = self.best_move(state);
        state.apply_move(col).unwrap()
    }

    fn best_move(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");

        // Fresh memo for every top-level decision
        self.visited.clear();

        let player = state.current_player();
        let mut best_action = legal[0];
        let mut best_score = f64::NEG_INFINITY;

        // Root children are evaluated at full depth and are not recorded
        // in the visited set; only their descendants are. Ties keep the
        // first candidate in generator order.
        for &col in &legal {
            let child = state.board().child(col, player.to_cell()).unwrap();
            let score = -self.negamax(
                &child,
                self.depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                player.other(),
            );
            if score > best_score {
                best_score = score;
                best_action = col;
            }
        }

        best_action
    }

    /// Negamax over (board, depth remaining, player to move).
    ///
    /// Terminal positions score `±depth`: a win found with more depth
    /// remaining (i.e. sooner) outranks one found later, so the agent
    /// prefers fast wins and slow losses. The depth horizon scores a
    /// neutral 0 with no positional evaluation.
    fn negamax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        beta: f64,
        to_move: Player,
    ) -> f64 {
        if let Some(winner) = board.winner().and_then(|cell| cell.player()) {
            return if winner == to_move {
                depth as f64
            } else {
                -(depth as f64)
            };
        }

        if depth == 0 {
            return 0.0;
        }

        let moves = board.possible_moves();
        if moves.is_empty() {
            return 0.0; // draw
        }

        // NEG_INFINITY doubles as the sentinel when every child below was
        // skipped as already visited.
        let mut best = f64::NEG_INFINITY;

        for col in moves {
            let child = board.child(col, to_move.to_cell()).unwrap();

            if !self.visited.insert(child) {
                continue;
            }

            let value = -self.negamax(&child, depth - 1, -beta, -alpha, to_move.other());

            if value >= beta {
                return value;
            }
            if value > best {
                best = value;
            }
            if value > alpha {
                alpha = value;
            }
        }

        best
    }
}

impl Agent for NegamaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        self.best_move(state)
    }

    fn name(&self) -> &str {
        "Negamax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(NegamaxAgent::new(self.depth))
    }
}
