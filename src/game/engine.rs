//! Move resolution and reward translation for one validated rule set.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::player::Player;
use super::scanner;
use crate::error::{ConfigError, EngineError};

/// Board geometry and reward shaping. Immutable once an [`Engine`] is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Side length N of the grid.
    pub num_grid: usize,
    /// Stones in a row needed to win (K).
    pub num_win_seq: usize,
    pub win_reward: f32,
    pub draw_penalty: f32,
    /// Granted for every successful placement.
    pub could_locate_reward: f32,
    /// Charged when the chosen column is already full.
    pub couldnt_locate_penalty: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            num_grid: 4,
            num_win_seq: 4,
            win_reward: 1.0,
            draw_penalty: 0.5,
            could_locate_reward: 0.01,
            couldnt_locate_penalty: 0.1,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_win_seq < 2 {
            return Err(ConfigError::Validation(
                "rules.num_win_seq must be >= 2".into(),
            ));
        }
        if self.num_grid < self.num_win_seq {
            return Err(ConfigError::Validation(
                "rules.num_grid must be >= rules.num_win_seq".into(),
            ));
        }
        let rewards = [
            ("win_reward", self.win_reward),
            ("draw_penalty", self.draw_penalty),
            ("could_locate_reward", self.could_locate_reward),
            ("couldnt_locate_penalty", self.couldnt_locate_penalty),
        ];
        for (name, value) in rewards {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "rules.{name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Result of dropping a stone into a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub reward: f32,
    /// The column had no room; the grid was not touched.
    pub full_column: bool,
    /// Height the stone landed at, `None` when the column was full.
    pub height: Option<usize>,
}

/// Verdict after a successful placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub done: bool,
    pub reward: f32,
    pub winner: Option<Player>,
}

impl Outcome {
    /// Winner as a signed label, `0` when there is none.
    pub fn winner_sign(&self) -> i8 {
        self.winner.map_or(0, Player::sign)
    }

    pub fn is_draw(&self) -> bool {
        self.done && self.winner.is_none()
    }
}

/// Move resolution, win detection and reward translation for one rule set.
///
/// Holds no grid: every call borrows the caller's grid for its duration only.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RulesConfig,
}

impl Engine {
    pub fn new(rules: RulesConfig) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Engine { rules })
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Empty grid of the configured size.
    pub fn new_grid(&self) -> Grid {
        Grid::new(self.rules.num_grid)
    }

    /// Drop `player`'s stone into column `(wide, depth)`.
    ///
    /// The stone lands in the lowest empty cell. A full column leaves the
    /// grid untouched and yields the negated `couldnt_locate_penalty`.
    pub fn place(
        &self,
        wide: usize,
        depth: usize,
        player: Player,
        grid: &mut Grid,
    ) -> Result<Placement, EngineError> {
        self.check_side(grid)?;
        let side = grid.side();
        if wide >= side || depth >= side {
            return Err(EngineError::ColumnOutOfRange { wide, depth, side });
        }

        for height in 0..side {
            if grid.get(height, wide, depth).is_empty() {
                grid.set(height, wide, depth, player.to_cell());
                return Ok(Placement {
                    reward: self.rules.could_locate_reward,
                    full_column: false,
                    height: Some(height),
                });
            }
        }

        Ok(Placement {
            reward: -self.rules.couldnt_locate_penalty,
            full_column: true,
            height: None,
        })
    }

    /// Check whether any `num_win_seq` stones of one player are aligned.
    pub fn is_won(&self, grid: &Grid) -> Result<bool, EngineError> {
        self.check_side(grid)?;
        Ok(scanner::is_won(grid, self.rules.num_win_seq))
    }

    /// Turn a scan result into done/reward/winner.
    ///
    /// Rewards here are net of the placement reward already granted by
    /// [`Engine::place`], so a winning move totals exactly `win_reward` and a
    /// drawing move totals exactly `-draw_penalty`.
    pub fn resolve_outcome(&self, won: bool, mover: Player, grid: &Grid) -> Outcome {
        if won {
            Outcome {
                done: true,
                reward: self.rules.win_reward - self.rules.could_locate_reward,
                winner: Some(mover),
            }
        } else if grid.is_full() {
            Outcome {
                done: true,
                reward: -self.rules.draw_penalty - self.rules.could_locate_reward,
                winner: None,
            }
        } else {
            Outcome {
                done: false,
                reward: 0.0,
                winner: None,
            }
        }
    }

    /// Scan the post-move grid and resolve the outcome for `mover`.
    pub fn play_turn(&self, mover: Player, grid: &Grid) -> Result<Outcome, EngineError> {
        let won = self.is_won(grid)?;
        Ok(self.resolve_outcome(won, mover, grid))
    }

    fn check_side(&self, grid: &Grid) -> Result<(), EngineError> {
        if grid.side() != self.rules.num_grid {
            return Err(EngineError::SideMismatch {
                expected: self.rules.num_grid,
                found: grid.side(),
            });
        }
        Ok(())
    }
}
