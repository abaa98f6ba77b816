//! Terrain surrounding a town and the item needed to cross it.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hunter::Hunter;
use crate::item::Item;
use crate::table::{WeightedTable, choose_weighted};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

/// Every terrain kind is equally likely.
pub const TERRAIN_TABLE: &WeightedTable<TerrainKind> = &[
    (TerrainKind::Mountains, 1),
    (TerrainKind::Ocean, 1),
    (TerrainKind::Plains, 1),
    (TerrainKind::Desert, 1),
    (TerrainKind::Jungle, 1),
    (TerrainKind::Marsh, 1),
];

impl TerrainKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mountains => "Mountains",
            Self::Ocean => "Ocean",
            Self::Plains => "Plains",
            Self::Desert => "Desert",
            Self::Jungle => "Jungle",
            Self::Marsh => "Marsh",
        }
    }

    #[must_use]
    pub const fn needed_item(self) -> Item {
        match self {
            Self::Mountains => Item::Rope,
            Self::Ocean => Item::Boat,
            Self::Plains => Item::Horse,
            Self::Desert => Item::Water,
            Self::Jungle => Item::Machete,
            Self::Marsh => Item::Boot,
        }
    }
}

/// Immutable obstacle between a town and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    kind: TerrainKind,
}

impl Terrain {
    #[must_use]
    pub const fn new(kind: TerrainKind) -> Self {
        Self { kind }
    }

    /// Draw a fresh terrain from [`TERRAIN_TABLE`].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let kind = choose_weighted(TERRAIN_TABLE, rng).unwrap_or(TerrainKind::Mountains);
        log::debug!("terrain drawn: {}", kind.name());
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> TerrainKind {
        self.kind
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub const fn needed_item(&self) -> Item {
        self.kind.needed_item()
    }

    #[must_use]
    pub fn crossable(&self, hunter: &Hunter) -> bool {
        hunter.has_item_in_kit(self.needed_item())
    }

    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "The terrain is {}. You'll need a {} to cross it.",
            self.name(),
            self.needed_item()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn crossable_only_with_the_matching_item() {
        for (kind, _) in TERRAIN_TABLE {
            let terrain = Terrain::new(*kind);
            for item in Item::ALL {
                let mut hunter = Hunter::new("tester", 10, Item::ALL.len());
                hunter.add_item(item).unwrap();
                assert_eq!(
                    terrain.crossable(&hunter),
                    item == kind.needed_item(),
                    "{} with {item}",
                    kind.name()
                );
            }
            assert!(!terrain.crossable(&Hunter::new("empty", 10, 3)));
        }
    }

    #[test]
    fn description_names_the_required_item() {
        let terrain = Terrain::new(TerrainKind::Desert);
        let text = terrain.describe();
        assert!(text.contains("Desert"));
        assert!(text.contains("water"));
    }

    #[test]
    fn random_draws_reach_every_kind() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(Terrain::random(&mut rng).kind());
        }
        assert_eq!(seen.len(), TERRAIN_TABLE.len());
    }
}
