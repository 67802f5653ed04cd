use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use connect_x3d::config::AppConfig;
use connect_x3d::game::{scanner, Engine, GameOutcome, GameState, StepResult, WinningLine};

/// Replay a sequence of flat actions on a 3D Connect-X grid.
#[derive(Parser)]
#[command(name = "connectx", about = "Replay moves through the 3D Connect-X rules engine")]
struct Cli {
    /// Flat actions in `0..N*N`, played alternately starting with player A
    actions: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connectx.toml")]
    config: PathBuf,

    /// Override grid side length
    #[arg(long)]
    grid: Option<usize>,

    /// Override number of stones in a row needed to win
    #[arg(long)]
    win: Option<usize>,

    /// Emit one JSON object per step instead of text
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(Serialize)]
struct StepRecord<'a> {
    step: usize,
    action: usize,
    #[serde(flatten)]
    result: &'a StepResult,
    winner_sign: i8,
}

/// Final line of `--json` output.
#[derive(Serialize)]
struct Summary {
    status: &'static str,
    moves: usize,
    winner_sign: i8,
    winning_line: Option<WinningLine>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(grid) = cli.grid {
        app_config.rules.num_grid = grid;
    }
    if let Some(win) = cli.win {
        app_config.rules.num_win_seq = win;
    }

    let engine = Engine::new(app_config.rules.clone()).context("invalid rules")?;
    let mut state = GameState::new(engine);

    if cli.actions.is_empty() {
        bail!("no actions given (expected values in 0..{})", state.grid().side().pow(2));
    }

    for (step, &action) in cli.actions.iter().enumerate() {
        if state.is_terminal() {
            eprintln!(
                "Warning: game ended after step {}, ignoring {} remaining action(s)",
                step,
                cli.actions.len() - step
            );
            break;
        }

        let result = state
            .step(action)
            .with_context(|| format!("step {} (action {})", step + 1, action))?;

        if cli.json {
            let record = StepRecord {
                step: step + 1,
                action,
                result: &result,
                winner_sign: result.winner_sign(),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else {
            println!(
                "step {:>3}: player {} -> (wide={}, depth={}) reward={:+.3}{}",
                step + 1,
                result.player.name(),
                result.column.wide,
                result.column.depth,
                result.reward,
                if result.full_column { " [column full]" } else { "" },
            );
        }
    }

    let k = state.engine().rules().num_win_seq;
    let winning_line = scanner::winning_line(state.grid(), k);

    if cli.json {
        let (status, winner_sign) = match state.outcome() {
            Some(GameOutcome::Winner(player)) => ("win", player.sign()),
            Some(GameOutcome::Draw) => ("draw", 0),
            None => ("in_progress", 0),
        };
        let summary = Summary {
            status,
            moves: state.move_count(),
            winner_sign,
            winning_line,
        };
        println!("{}", serde_json::to_string(&summary)?);
        return Ok(());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) => {
            println!("Player {} wins after {} moves", player.name(), state.move_count());
            if let Some(found) = winning_line {
                let cells: Vec<String> = found
                    .line
                    .cells()
                    .map(|(h, w, d)| format!("({h},{w},{d})"))
                    .collect();
                println!("Line: {}", cells.join(" "));
            }
        }
        Some(GameOutcome::Draw) => println!("Draw after {} moves", state.move_count()),
        None => println!(
            "Game in progress after {} moves, player {} to move",
            state.move_count(),
            state.current_player().name()
        ),
    }

    Ok(())
}
