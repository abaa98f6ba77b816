//! Difficulty selection and the tuning profile each one implies.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    EASY_BONUS_GOLD, EASY_MARKDOWN, EASY_TOUGHNESS, HARD_MARKDOWN, HARD_TOUGHNESS,
    ITEM_BREAK_CHANCE, NORMAL_MARKDOWN, NORMAL_TOUGHNESS, SAMURAI_BONUS_GOLD, SAMURAI_MARKDOWN,
    SAMURAI_TOUGHNESS, TEST_BONUS_GOLD,
};
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Samurai,
    /// Debug preset: normal odds with a padded purse and a stocked kit.
    Test,
}

impl Difficulty {
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Samurai,
        Self::Test,
    ];

    /// Map a setup code to a difficulty. Unknown codes play as normal.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "e" => Self::Easy,
            "h" => Self::Hard,
            "s" => Self::Samurai,
            "test" => Self::Test,
            _ => Self::Normal,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Easy => "e",
            Self::Normal => "n",
            Self::Hard => "h",
            Self::Samurai => "s",
            Self::Test => "test",
        }
    }

    #[must_use]
    pub const fn profile(self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                markdown: EASY_MARKDOWN,
                toughness: EASY_TOUGHNESS,
                bonus_gold: EASY_BONUS_GOLD,
                item_break_chance: 0.0,
            },
            Self::Normal => DifficultyProfile {
                markdown: NORMAL_MARKDOWN,
                toughness: NORMAL_TOUGHNESS,
                bonus_gold: 0,
                item_break_chance: ITEM_BREAK_CHANCE,
            },
            Self::Hard => DifficultyProfile {
                markdown: HARD_MARKDOWN,
                toughness: HARD_TOUGHNESS,
                bonus_gold: 0,
                item_break_chance: ITEM_BREAK_CHANCE,
            },
            Self::Samurai => DifficultyProfile {
                markdown: SAMURAI_MARKDOWN,
                toughness: SAMURAI_TOUGHNESS,
                bonus_gold: SAMURAI_BONUS_GOLD,
                item_break_chance: ITEM_BREAK_CHANCE,
            },
            Self::Test => DifficultyProfile {
                markdown: NORMAL_MARKDOWN,
                toughness: NORMAL_TOUGHNESS,
                bonus_gold: TEST_BONUS_GOLD,
                item_break_chance: ITEM_BREAK_CHANCE,
            },
        }
    }

    /// Gear the hunter starts with.
    #[must_use]
    pub const fn starting_kit(self) -> &'static [Item] {
        match self {
            Self::Test => &[
                Item::Water,
                Item::Rope,
                Item::Machete,
                Item::Horse,
                Item::Boat,
                Item::Boot,
            ],
            _ => &[],
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Samurai => "Samurai",
            Self::Test => "Test",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-difficulty tuning consumed by towns and shops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Sell price multiplier, `0 < markdown <= 1`.
    pub markdown: f64,
    /// Probability a freshly built town is tough.
    pub toughness: f64,
    pub bonus_gold: i32,
    /// Chance the crossing item breaks on the way out of town.
    pub item_break_chance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_folded_and_default_to_normal() {
        assert_eq!(Difficulty::from_code("E"), Difficulty::Easy);
        assert_eq!(Difficulty::from_code(" h "), Difficulty::Hard);
        assert_eq!(Difficulty::from_code("S"), Difficulty::Samurai);
        assert_eq!(Difficulty::from_code("TEST"), Difficulty::Test);
        assert_eq!(Difficulty::from_code("n"), Difficulty::Normal);
        assert_eq!(Difficulty::from_code("nightmare"), Difficulty::Normal);
        assert_eq!(Difficulty::from_code(""), Difficulty::Normal);
    }

    #[test]
    fn codes_roundtrip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_code(difficulty.code()), difficulty);
        }
    }

    #[test]
    fn only_easy_mode_spares_crossing_items() {
        for difficulty in Difficulty::ALL {
            let chance = difficulty.profile().item_break_chance;
            if difficulty == Difficulty::Easy {
                assert!(chance.abs() < f64::EPSILON);
            } else {
                assert!((chance - 0.99).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn markdowns_stay_in_range() {
        for difficulty in Difficulty::ALL {
            let markdown = difficulty.profile().markdown;
            assert!(markdown > 0.0 && markdown <= 1.0, "{difficulty}");
        }
    }

    #[test]
    fn samurai_towns_are_never_tough() {
        assert!(Difficulty::Samurai.profile().toughness.abs() < f64::EPSILON);
    }
}
