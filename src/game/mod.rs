//! 3D Connect-X rules: the grid, gravity placement, K-in-a-row detection and
//! reward resolution, plus a host-side game session.

pub mod action;
mod engine;
mod grid;
pub mod lines;
mod player;
pub mod radix;
pub mod scanner;
mod state;

pub use action::Column;
pub use engine::{Engine, Outcome, Placement, RulesConfig};
pub use grid::{Cell, Grid};
pub use player::Player;
pub use scanner::WinningLine;
pub use state::{GameOutcome, GameState, MoveError, StepResult};
