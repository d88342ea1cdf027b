use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use hanabi_bot::HeuristicPolicy;
use hanabi_core::game::agent::Agent;
use hanabi_core::game::engine::{Game, GameOutcome, MoveError, SetupError};
use hanabi_core::game::log::{GameLog, NullLog};
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;

use crate::config::{BenchConfig, ResolvedOutputs, SeatDifficulty};
use crate::logging::TraceLog;

/// Plays a configured batch of seeded games and streams one JSONL row each.
pub struct BatchRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
pub struct RunSummary {
    pub games_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
}

/// One JSONL row per finished game.
#[derive(Debug, Serialize)]
struct GameRow<'a> {
    run_id: &'a str,
    game: usize,
    seed: u64,
    players: usize,
    turns: u32,
    score: u32,
    lives_left: u8,
    hints_left: u8,
    outcome: GameOutcome,
}

#[derive(Debug, Default)]
struct Tally {
    games: usize,
    total_score: u64,
    best_score: u32,
    perfect: usize,
    life_loss: usize,
    timeout: usize,
}

impl Tally {
    fn record(&mut self, score: u32, outcome: GameOutcome) {
        self.games += 1;
        self.total_score += score as u64;
        self.best_score = self.best_score.max(score);
        match outcome {
            GameOutcome::Perfect => self.perfect += 1,
            GameOutcome::LifeLoss => self.life_loss += 1,
            GameOutcome::Timeout => self.timeout += 1,
        }
    }

    fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games as f64
        }
    }
}

impl BatchRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Execute the batch, streaming JSONL rows to disk.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.games.seed.unwrap_or(0));
        let mut tally = Tally::default();
        let mut rows_written = 0usize;

        for game_index in 0..self.config.games.count {
            let seed = rng.next_u64();
            let mut game = self.build_game(seed)?;
            let outcome = game.play_to_end()?;

            let row = GameRow {
                run_id: &self.config.run_id,
                game: game_index,
                seed,
                players: game.player_count(),
                turns: game.current_turn(),
                score: game.score(),
                lives_left: game.lives(),
                hints_left: game.hints(),
                outcome,
            };
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
            tally.record(game.score(), outcome);
        }

        writer.flush()?;
        self.write_summary(&tally)?;

        Ok(RunSummary {
            games_played: self.config.games.count,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
        })
    }

    fn build_game(&self, seed: u64) -> Result<Game, RunnerError> {
        let agents: Vec<Box<dyn Agent>> = self
            .config
            .seats
            .iter()
            .map(|seat| match seat.difficulty {
                SeatDifficulty::Easy => Box::new(HeuristicPolicy::easy()) as Box<dyn Agent>,
                SeatDifficulty::Normal => Box::new(HeuristicPolicy::normal()) as Box<dyn Agent>,
            })
            .collect();

        let narrate = self.config.logging.enable_structured;
        let logger: Box<dyn GameLog> = if narrate {
            Box::new(TraceLog)
        } else {
            Box::new(NullLog)
        };

        Ok(Game::with_seed(agents, logger, narrate, seed)?)
    }

    fn write_summary(&self, tally: &Tally) -> Result<(), RunnerError> {
        let mut summary = String::new();
        summary.push_str(&format!("# Batch summary — {}\n\n", self.config.run_id));
        summary.push_str(&format!("- games: {}\n", tally.games));
        summary.push_str(&format!("- mean score: {:.2}\n", tally.mean_score()));
        summary.push_str(&format!("- best score: {}\n\n", tally.best_score));
        summary.push_str("| outcome | games |\n|---|---|\n");
        summary.push_str(&format!("| perfect | {} |\n", tally.perfect));
        summary.push_str(&format!("| life-loss | {} |\n", tally.life_loss));
        summary.push_str(&format!("| timeout | {} |\n", tally.timeout));

        fs::write(&self.outputs.summary_md, summary)?;
        Ok(())
    }
}

fn ensure_parent(parent: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = parent {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}

/// Failures while executing a batch.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode result row: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not construct game: {0}")]
    Setup(#[from] SetupError),
    #[error("agent broke the move contract: {0}")]
    Engine(#[from] MoveError),
}
