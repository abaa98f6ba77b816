use anyhow::{Context, Result};
use serde::Serialize;
use treasure_hunter_game::{Difficulty, Game, GameConfig, GameStatus, Treasure};

use crate::logic::policy::{GameplayStrategy, PlayerPolicy};

/// Configuration for one automated play-through.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub seed: u64,
    pub difficulty: Difficulty,
    pub strategy: GameplayStrategy,
    pub max_turns: u32,
    pub game: GameConfig,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(difficulty: Difficulty, strategy: GameplayStrategy, seed: u64) -> Self {
        Self {
            seed,
            difficulty,
            strategy,
            max_turns: 500,
            game: GameConfig::default(),
        }
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }
}

/// Outcome of a single automated game. `status` stays `playing` when the
/// turn limit ran out first.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRecord {
    pub seed: u64,
    pub strategy: String,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub turns: u32,
    pub towns: u32,
    pub gold: i32,
    pub treasures: Vec<Treasure>,
}

/// Drive a game with the configured policy until it ends or the turn limit
/// is reached.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationRecord> {
    let mut policy = config.strategy.create_policy();
    let mut game = Game::new(
        policy.name(),
        config.difficulty,
        config.game.clone(),
        config.seed,
    );
    let mut turns = 0;
    while !game.status().is_terminal() && turns < config.max_turns {
        let action = policy.next_action(&game);
        log::debug!("seed {} turn {turns}: {action:?}", config.seed);
        game.perform(action)
            .with_context(|| format!("seed {} turn {turns}", config.seed))?;
        turns += 1;
    }
    if !game.status().is_terminal() {
        log::warn!(
            "{} stalled on seed {} after {turns} turns",
            config.strategy,
            config.seed
        );
    }

    Ok(SimulationRecord {
        seed: config.seed,
        strategy: config.strategy.label().to_string(),
        difficulty: config.difficulty,
        status: game.status(),
        turns,
        towns: game.towns_visited(),
        gold: game.hunter().gold(),
        treasures: game.collected().iter().collect(),
    })
}

/// Run every strategy over `games` consecutive seeds starting at `first_seed`.
pub fn run_batch(
    strategies: &[GameplayStrategy],
    difficulty: Difficulty,
    game: &GameConfig,
    first_seed: u64,
    games: usize,
    max_turns: u32,
) -> Result<Vec<SimulationRecord>> {
    let mut records = Vec::with_capacity(strategies.len() * games);
    for &strategy in strategies {
        for seed in (first_seed..).take(games) {
            let config = SimulationConfig::new(difficulty, strategy, seed)
                .with_max_turns(max_turns)
                .with_game_config(game.clone());
            records.push(run_simulation(&config)?);
        }
    }
    Ok(records)
}
