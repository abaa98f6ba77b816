//! Game-wide configuration with serde defaults and validation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_KIT_CAPACITY, DEFAULT_STARTING_GOLD, DEFAULT_TREASURE_GOAL};
use crate::item::Item;
use crate::shop::Catalog;
use crate::treasure::SCORING_TREASURES;

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: i64,
        value: i64,
    },
    #[error("treasure goal {goal} exceeds the {available} collectible treasures")]
    UnreachableGoal { goal: usize, available: usize },
    #[error("price for {item} must be positive (got {price})")]
    NonPositivePrice { item: Item, price: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "GameConfig::default_starting_gold")]
    pub starting_gold: i32,
    #[serde(default = "GameConfig::default_kit_capacity")]
    pub kit_capacity: usize,
    #[serde(default = "GameConfig::default_treasure_goal")]
    pub treasure_goal: usize,
    #[serde(default)]
    pub catalog: Catalog,
}

impl GameConfig {
    const fn default_starting_gold() -> i32 {
        DEFAULT_STARTING_GOLD
    }

    const fn default_kit_capacity() -> usize {
        DEFAULT_KIT_CAPACITY
    }

    const fn default_treasure_goal() -> usize {
        DEFAULT_TREASURE_GOAL
    }

    /// Parse a JSON document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the game relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_gold < 1 {
            return Err(ConfigError::MinViolation {
                field: "starting_gold",
                min: 1,
                value: i64::from(self.starting_gold),
            });
        }
        if self.kit_capacity == 0 {
            return Err(ConfigError::MinViolation {
                field: "kit_capacity",
                min: 1,
                value: 0,
            });
        }
        if self.treasure_goal == 0 {
            return Err(ConfigError::MinViolation {
                field: "treasure_goal",
                min: 1,
                value: 0,
            });
        }
        if self.treasure_goal > SCORING_TREASURES.len() {
            return Err(ConfigError::UnreachableGoal {
                goal: self.treasure_goal,
                available: SCORING_TREASURES.len(),
            });
        }
        for item in Item::ALL {
            let price = self.catalog.base_price(item);
            if price <= 0 {
                return Err(ConfigError::NonPositivePrice { item, price });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_gold: Self::default_starting_gold(),
            kit_capacity: Self::default_kit_capacity(),
            treasure_goal: Self::default_treasure_goal(),
            catalog: Catalog::default(),
        }
    }
}
