//! Host-side game session: turn order, action decoding and the final result.

use serde::Serialize;

use super::action::{self, Column};
use super::engine::Engine;
use super::grid::Grid;
use super::player::Player;
use crate::error::{ActionError, EngineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("invalid action: {0}")]
    Action(#[from] ActionError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// What one call to [`GameState::step`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepResult {
    pub player: Player,
    pub column: Column,
    /// Placement reward plus outcome reward.
    pub reward: f32,
    pub done: bool,
    pub winner: Option<Player>,
    /// The chosen column was full: nothing was placed and the turn did not
    /// pass.
    pub full_column: bool,
}

impl StepResult {
    pub fn winner_sign(&self) -> i8 {
        self.winner.map_or(0, Player::sign)
    }
}

/// One game in progress: the grid, whose turn it is, and the result once
/// decided. Player A moves first.
#[derive(Debug, Clone)]
pub struct GameState {
    engine: Engine,
    grid: Grid,
    current_player: Player,
    outcome: Option<GameOutcome>,
    moves: usize,
}

impl GameState {
    /// Create initial game state
    pub fn new(engine: Engine) -> Self {
        let grid = engine.new_grid();
        GameState {
            engine,
            grid,
            current_player: Player::A,
            outcome: None,
            moves: 0,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Get reference to grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Stones placed so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Get list of legal actions (columns not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        action::legal_actions(&self.grid)
    }

    pub fn action_mask(&self) -> Vec<bool> {
        if self.is_terminal() {
            return vec![false; action::action_space(self.grid.side())];
        }
        action::action_mask(&self.grid)
    }

    /// Apply a flat action for the current player.
    pub fn step(&mut self, action: usize) -> Result<StepResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let column = action::decode(action, self.grid.side())?;
        let placement = self
            .engine
            .place(column.wide, column.depth, player, &mut self.grid)?;

        if placement.full_column {
            return Ok(StepResult {
                player,
                column,
                reward: placement.reward,
                done: false,
                winner: None,
                full_column: true,
            });
        }

        let outcome = self.engine.play_turn(player, &self.grid)?;
        self.moves += 1;
        if outcome.done {
            self.outcome = Some(match outcome.winner {
                Some(winner) => GameOutcome::Winner(winner),
                None => GameOutcome::Draw,
            });
        }
        self.current_player = player.other();

        Ok(StepResult {
            player,
            column,
            reward: placement.reward + outcome.reward,
            done: outcome.done,
            winner: outcome.winner,
            full_column: false,
        })
    }
}
