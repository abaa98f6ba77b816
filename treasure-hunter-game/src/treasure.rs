//! Treasure pool, per-town draws and the collection the hunter builds.
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::table::{WeightedTable, choose_weighted};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    /// Decoy: found like any other treasure but never collected.
    Dust,
}

pub const TREASURE_TABLE: &WeightedTable<Treasure> = &[
    (Treasure::Crown, 1),
    (Treasure::Trophy, 1),
    (Treasure::Gem, 1),
    (Treasure::Dust, 1),
];

pub const SCORING_TREASURES: [Treasure; 3] = [Treasure::Crown, Treasure::Trophy, Treasure::Gem];

impl Treasure {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let treasure = choose_weighted(TREASURE_TABLE, rng).unwrap_or(Treasure::Dust);
        log::debug!("treasure drawn: {treasure}");
        treasure
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crown => "crown",
            Self::Trophy => "trophy",
            Self::Gem => "gem",
            Self::Dust => "dust",
        }
    }

    #[must_use]
    pub const fn is_scoring(self) -> bool {
        !matches!(self, Self::Dust)
    }
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bounded set of distinct collected treasures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureCollection {
    capacity: usize,
    items: Vec<Treasure>,
}

impl TreasureCollection {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn contains(&self, treasure: Treasure) -> bool {
        self.items.contains(&treasure)
    }

    /// Insert a treasure. Returns false when it is already held or the
    /// collection is at capacity.
    pub fn insert(&mut self, treasure: Treasure) -> bool {
        if self.contains(treasure) || self.is_complete() {
            return false;
        }
        self.items.push(treasure);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.items.iter().copied()
    }
}

/// Result of hunting for the treasure hidden in the current town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreasureSearch {
    AlreadySearched,
    FoundDust,
    Duplicate(Treasure),
    Collected(Treasure),
}

impl fmt::Display for TreasureSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySearched => f.write_str("You have already searched this town!"),
            Self::FoundDust => f.write_str("You found dust. Worthless."),
            Self::Duplicate(treasure) => write!(
                f,
                "You found a {treasure}, but you already have one. You leave it behind."
            ),
            Self::Collected(treasure) => write!(f, "You found a {treasure}!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_ignores_repeats() {
        let mut found = TreasureCollection::with_capacity(3);
        assert!(found.insert(Treasure::Gem));
        assert!(!found.insert(Treasure::Gem));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn collection_is_bounded() {
        let mut found = TreasureCollection::with_capacity(2);
        assert!(found.insert(Treasure::Crown));
        assert!(found.insert(Treasure::Trophy));
        assert!(found.is_complete());
        assert!(!found.insert(Treasure::Gem));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn dust_is_the_only_non_scoring_treasure() {
        for (treasure, _) in TREASURE_TABLE {
            assert_eq!(
                treasure.is_scoring(),
                SCORING_TREASURES.contains(treasure)
            );
        }
        assert!(!Treasure::Dust.is_scoring());
    }

    #[test]
    fn search_messages_name_the_treasure() {
        assert!(
            TreasureSearch::Collected(Treasure::Crown)
                .to_string()
                .contains("crown")
        );
        assert!(
            TreasureSearch::Duplicate(Treasure::Trophy)
                .to_string()
                .contains("already have")
        );
    }
}
