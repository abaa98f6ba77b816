//! Per-visit town simulation: crossing out, shopping, brawls and digging.
//!
//! A town is built with its terrain, shop and difficulty profile, then waits
//! for a hunter to arrive. Every operation after that borrows the hunter
//! mutably for the duration of the call and overwrites the town's latest
//! news with what happened.
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BRAWL_GOLD_MAX, BRAWL_GOLD_MIN, CALM_TOWN_NO_TROUBLE_CHANCE, DIG_GOLD_MAX, DIG_GOLD_MIN,
    DIG_SUCCESS_CHANCE, TOUGH_TOWN_NO_TROUBLE_CHANCE,
};
use crate::difficulty::DifficultyProfile;
use crate::hunter::Hunter;
use crate::item::Item;
use crate::shop::{Shop, ShopRequest};
use crate::terrain::Terrain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TownPhase {
    AwaitingHunter,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TownError {
    #[error("nobody has arrived in town yet")]
    NoHunter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brawl {
    NoTrouble,
    Won { gold: i32 },
    Lost { gold: i32 },
    /// The brawler saw the sword and paid up without a fight.
    Yielded { gold: i32 },
}

impl Brawl {
    /// Gold change applied to the hunter.
    #[must_use]
    pub const fn gold_delta(self) -> i32 {
        match self {
            Self::NoTrouble => 0,
            Self::Won { gold } | Self::Yielded { gold } => gold,
            Self::Lost { gold } => -gold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dig {
    NoShovel,
    AlreadyDug,
    Found { gold: i32 },
    Dirt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    terrain: Terrain,
    shop: Shop,
    profile: DifficultyProfile,
    tough: bool,
    dug_gold: bool,
    phase: TownPhase,
    news: String,
}

impl Town {
    /// Build a town with a freshly drawn terrain. The town is tough with
    /// probability `profile.toughness`.
    pub fn new<R: Rng>(shop: Shop, profile: DifficultyProfile, rng: &mut R) -> Self {
        let terrain = Terrain::random(rng);
        let tough = rng.gen_bool(profile.toughness.clamp(0.0, 1.0));
        Self::with_terrain(terrain, shop, profile, tough)
    }

    #[must_use]
    pub fn with_terrain(
        terrain: Terrain,
        shop: Shop,
        profile: DifficultyProfile,
        tough: bool,
    ) -> Self {
        Self {
            terrain,
            shop,
            profile,
            tough,
            dug_gold: false,
            phase: TownPhase::AwaitingHunter,
            news: String::new(),
        }
    }

    #[must_use]
    pub const fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    #[must_use]
    pub const fn shop(&self) -> &Shop {
        &self.shop
    }

    #[must_use]
    pub const fn is_tough(&self) -> bool {
        self.tough
    }

    #[must_use]
    pub const fn phase(&self) -> TownPhase {
        self.phase
    }

    #[must_use]
    pub const fn dug_gold_already(&self) -> bool {
        self.dug_gold
    }

    #[must_use]
    pub fn latest_news(&self) -> &str {
        &self.news
    }

    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        self.phase = TownPhase::Active;
        self.news = format!("Welcome to town, {}.", hunter.name());
        if self.tough {
            self.news
                .push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            self.news
                .push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        log::info!(
            "{} arrived in a {} town by the {}",
            hunter.name(),
            if self.tough { "tough" } else { "quiet" },
            self.terrain.name()
        );
    }

    const fn require_active(&self) -> Result<(), TownError> {
        match self.phase {
            TownPhase::Active => Ok(()),
            TownPhase::AwaitingHunter => Err(TownError::NoHunter),
        }
    }

    /// Try to cross the surrounding terrain.
    ///
    /// Returns `Ok(false)` with the hunter untouched when the needed item is
    /// missing. On a successful crossing the item may break and one unit is
    /// removed from the kit.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::NoHunter`] before a hunter has arrived.
    pub fn leave_town<R: Rng>(
        &mut self,
        hunter: &mut Hunter,
        rng: &mut R,
    ) -> Result<bool, TownError> {
        self.require_active()?;
        let item = self.terrain.needed_item();
        if !self.terrain.crossable(hunter) {
            self.news = format!(
                "You can't leave town, {}. You don't have a {item}.",
                hunter.name()
            );
            return Ok(false);
        }

        self.news = format!("You used your {item} to cross the {}.", self.terrain.name());
        if self.item_breaks(rng) {
            hunter.remove_item_from_kit(item);
            self.news
                .push_str(&format!("\nUnfortunately, you lost your {item}."));
            log::debug!("{item} broke crossing the {}", self.terrain.name());
        }
        Ok(true)
    }

    fn item_breaks<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen_bool(self.profile.item_break_chance.clamp(0.0, 1.0))
    }

    /// Run a buy or sell at the town shop and record the clerk's reply.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::NoHunter`] before a hunter has arrived.
    pub fn enter_shop(
        &mut self,
        hunter: &mut Hunter,
        request: ShopRequest,
    ) -> Result<(), TownError> {
        self.require_active()?;
        self.news = match self.shop.enter(hunter, request) {
            Ok(receipt) => receipt.to_string(),
            Err(err) => err.to_string(),
        };
        Ok(())
    }

    /// Chance the hunter finds nobody to fight.
    #[must_use]
    pub const fn no_trouble_chance(&self) -> f64 {
        if self.tough {
            TOUGH_TOWN_NO_TROUBLE_CHANCE
        } else {
            CALM_TOWN_NO_TROUBLE_CHANCE
        }
    }

    /// Pick a fight for gold. Tough towns make trouble easier to find.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::NoHunter`] before a hunter has arrived.
    pub fn look_for_trouble<R: Rng>(
        &mut self,
        hunter: &mut Hunter,
        rng: &mut R,
    ) -> Result<Brawl, TownError> {
        self.require_active()?;
        let no_trouble = self.no_trouble_chance();
        if !rng.gen_bool(1.0 - no_trouble) {
            self.news = "You couldn't find any trouble.".to_string();
            return Ok(Brawl::NoTrouble);
        }

        let gold = rng.gen_range(BRAWL_GOLD_MIN..=BRAWL_GOLD_MAX);
        let brawl = if hunter.has_item_in_kit(Item::Sword) {
            Brawl::Yielded { gold }
        } else if rng.gen_bool(1.0 - no_trouble) {
            Brawl::Won { gold }
        } else {
            Brawl::Lost { gold }
        };
        hunter.change_gold(brawl.gold_delta());
        log::debug!("brawl resolved: {brawl:?}");

        let mut news = String::from("You want trouble, stranger! You got it!\nOof! Umph! Ow!\n");
        match brawl {
            Brawl::Yielded { gold } => news.push_str(&format!(
                "The brawler sees your sword, thinks better of it and hands over his gold.\nYou won the brawl and receive {gold} gold."
            )),
            Brawl::Won { gold } => news.push_str(&format!(
                "Okay, stranger! You proved yer mettle. Here, take my gold.\nYou won the brawl and receive {gold} gold."
            )),
            Brawl::Lost { gold } => news.push_str(&format!(
                "That'll teach you to go lookin' fer trouble in MY town! Now pay up!\nYou lost the brawl and pay {gold} gold."
            )),
            Brawl::NoTrouble => {}
        }
        self.news = news;
        Ok(brawl)
    }

    /// Dig once per town with a shovel for a chance at gold.
    ///
    /// # Errors
    ///
    /// Returns [`TownError::NoHunter`] before a hunter has arrived.
    pub fn dig_gold<R: Rng>(
        &mut self,
        hunter: &mut Hunter,
        rng: &mut R,
    ) -> Result<Dig, TownError> {
        self.require_active()?;
        let dig = if !hunter.has_item_in_kit(Item::Shovel) {
            Dig::NoShovel
        } else if self.dug_gold {
            Dig::AlreadyDug
        } else {
            self.dug_gold = true;
            if rng.gen_bool(DIG_SUCCESS_CHANCE) {
                let gold = rng.gen_range(DIG_GOLD_MIN..=DIG_GOLD_MAX);
                hunter.change_gold(gold);
                Dig::Found { gold }
            } else {
                Dig::Dirt
            }
        };

        self.news = match dig {
            Dig::NoShovel => "You can't dig for gold without a shovel.".to_string(),
            Dig::AlreadyDug => "You already dug for gold in this town.".to_string(),
            Dig::Found { gold } => format!("You dug up {gold} gold!"),
            Dig::Dirt => "You dug but only found dirt.".to_string(),
        };
        Ok(dig)
    }

    #[must_use]
    pub fn info_string(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::shop::Catalog;
    use crate::terrain::TerrainKind;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha20Rng;

    fn town(kind: TerrainKind, difficulty: Difficulty, tough: bool) -> Town {
        let profile = difficulty.profile();
        Town::with_terrain(
            Terrain::new(kind),
            Shop::new(profile.markdown, Catalog::default()),
            profile,
            tough,
        )
    }

    fn arrived(kind: TerrainKind, difficulty: Difficulty, tough: bool, hunter: &Hunter) -> Town {
        let mut town = town(kind, difficulty, tough);
        town.hunter_arrives(hunter);
        town
    }

    /// Always rolls zero: every `gen_bool(p > 0)` succeeds and ranges yield their low end.
    fn always_low() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn operations_before_arrival_are_rejected() {
        let mut town = town(TerrainKind::Plains, Difficulty::Normal, false);
        let mut hunter = Hunter::new("a", 20, 3);
        let mut rng = always_low();
        assert_eq!(town.phase(), TownPhase::AwaitingHunter);
        assert_eq!(
            town.leave_town(&mut hunter, &mut rng),
            Err(TownError::NoHunter)
        );
        assert_eq!(
            town.dig_gold(&mut hunter, &mut rng),
            Err(TownError::NoHunter)
        );
        assert_eq!(
            town.look_for_trouble(&mut hunter, &mut rng),
            Err(TownError::NoHunter)
        );
    }

    #[test]
    fn welcome_tone_follows_toughness() {
        let hunter = Hunter::new("Ada", 20, 3);
        let rough = arrived(TerrainKind::Ocean, Difficulty::Hard, true, &hunter);
        let calm = arrived(TerrainKind::Ocean, Difficulty::Hard, false, &hunter);
        assert_eq!(rough.phase(), TownPhase::Active);
        assert!(rough.is_tough() && !calm.is_tough());
        assert!(rough.latest_news().starts_with("Welcome to town, ada."));
        assert!(rough.latest_news().contains("rough"));
        assert!(calm.latest_news().contains("sleepy"));
    }

    #[test]
    fn cannot_leave_without_needed_item() {
        let mut hunter = Hunter::new("a", 20, 3);
        hunter.add_item(Item::Rope).unwrap();
        let before = hunter.clone();
        let mut town = arrived(TerrainKind::Jungle, Difficulty::Normal, false, &hunter);
        let left = town.leave_town(&mut hunter, &mut always_low()).unwrap();
        assert!(!left);
        assert_eq!(hunter, before);
        assert!(town.latest_news().contains("machete"));
    }

    #[test]
    fn crossing_outside_easy_mode_breaks_the_item_on_a_low_roll() {
        let mut hunter = Hunter::new("a", 20, 3);
        hunter.add_item(Item::Boat).unwrap();
        let mut town = arrived(TerrainKind::Ocean, Difficulty::Normal, false, &hunter);
        assert!(town.leave_town(&mut hunter, &mut always_low()).unwrap());
        assert!(!hunter.has_item_in_kit(Item::Boat));
        assert!(town.latest_news().contains("lost your boat"));
    }

    #[test]
    fn crossing_in_easy_mode_never_breaks_the_item() {
        let mut hunter = Hunter::new("a", 20, 3);
        hunter.add_item(Item::Horse).unwrap();
        let mut town = arrived(TerrainKind::Plains, Difficulty::Easy, false, &hunter);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(town.leave_town(&mut hunter, &mut rng).unwrap());
            assert!(hunter.has_item_in_kit(Item::Horse));
        }
        assert!(!town.latest_news().contains("lost"));
    }

    #[test]
    fn break_rate_is_near_certain_in_normal_mode() {
        let mut rng = ChaCha20Rng::seed_from_u64(0x5EED);
        let mut broke = 0;
        for _ in 0..1_000 {
            let mut hunter = Hunter::new("a", 20, 3);
            hunter.add_item(Item::Water).unwrap();
            let mut town = arrived(TerrainKind::Desert, Difficulty::Normal, false, &hunter);
            town.leave_town(&mut hunter, &mut rng).unwrap();
            if !hunter.has_item_in_kit(Item::Water) {
                broke += 1;
            }
        }
        assert!(broke >= 970, "only {broke} of 1000 crossings broke the item");
    }

    #[test]
    fn spare_units_survive_a_break() {
        let mut hunter = Hunter::new("a", 20, 3);
        hunter.kit_mut().add(Item::Boot, 2).unwrap();
        let mut town = arrived(TerrainKind::Marsh, Difficulty::Hard, true, &hunter);
        assert!(town.leave_town(&mut hunter, &mut always_low()).unwrap());
        assert_eq!(hunter.kit().count(Item::Boot), 1);
    }

    #[test]
    fn no_trouble_chance_depends_on_toughness() {
        let hunter = Hunter::new("a", 20, 3);
        let tough = arrived(TerrainKind::Ocean, Difficulty::Normal, true, &hunter);
        let calm = arrived(TerrainKind::Ocean, Difficulty::Normal, false, &hunter);
        assert!((tough.no_trouble_chance() - 0.33).abs() < f64::EPSILON);
        assert!((calm.no_trouble_chance() - 0.66).abs() < f64::EPSILON);
    }

    #[test]
    fn sword_always_wins_brawls() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let mut hunter = Hunter::new("a", 20, 3);
        hunter.add_item(Item::Sword).unwrap();
        let mut town = arrived(TerrainKind::Desert, Difficulty::Hard, true, &hunter);
        for _ in 0..500 {
            let before = hunter.gold();
            let brawl = town.look_for_trouble(&mut hunter, &mut rng).unwrap();
            let delta = hunter.gold() - before;
            match brawl {
                Brawl::NoTrouble => assert_eq!(delta, 0),
                Brawl::Yielded { gold } => {
                    assert!((1..=10).contains(&gold));
                    assert_eq!(delta, gold);
                }
                other => panic!("sword holder got {other:?}"),
            }
        }
    }

    #[test]
    fn unarmed_brawls_move_gold_by_one_to_ten() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let mut hunter = Hunter::new("a", 1_000, 3);
        let mut town = arrived(TerrainKind::Desert, Difficulty::Normal, false, &hunter);
        let mut saw_win = false;
        let mut saw_loss = false;
        for _ in 0..500 {
            let before = hunter.gold();
            let brawl = town.look_for_trouble(&mut hunter, &mut rng).unwrap();
            assert_eq!(hunter.gold() - before, brawl.gold_delta());
            match brawl {
                Brawl::Won { gold } => {
                    saw_win = true;
                    assert!((1..=10).contains(&gold));
                }
                Brawl::Lost { gold } => {
                    saw_loss = true;
                    assert!((1..=10).contains(&gold));
                    assert!(town.latest_news().contains("pay"));
                }
                Brawl::NoTrouble => assert!(town.latest_news().contains("couldn't find")),
                Brawl::Yielded { .. } => panic!("no sword in kit"),
            }
        }
        assert!(saw_win && saw_loss);
    }

    #[test]
    fn low_rolls_find_trouble_and_win() {
        let mut hunter = Hunter::new("a", 5, 3);
        let mut town = arrived(TerrainKind::Desert, Difficulty::Normal, false, &hunter);
        let brawl = town.look_for_trouble(&mut hunter, &mut always_low()).unwrap();
        assert_eq!(brawl, Brawl::Won { gold: 1 });
        assert_eq!(hunter.gold(), 6);
    }

    #[test]
    fn digging_needs_a_shovel() {
        let mut hunter = Hunter::new("a", 20, 3);
        let mut town = arrived(TerrainKind::Desert, Difficulty::Normal, false, &hunter);
        let dig = town.dig_gold(&mut hunter, &mut always_low()).unwrap();
        assert_eq!(dig, Dig::NoShovel);
        assert_eq!(hunter.gold(), 20);
        assert!(!town.dug_gold_already());
        assert!(town.latest_news().contains("without a shovel"));
    }

    #[test]
    fn digging_latches_after_first_attempt() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        for _ in 0..50 {
            let mut hunter = Hunter::new("a", 20, 3);
            hunter.add_item(Item::Shovel).unwrap();
            let mut town = arrived(TerrainKind::Marsh, Difficulty::Normal, false, &hunter);

            match town.dig_gold(&mut hunter, &mut rng).unwrap() {
                Dig::Found { gold } => {
                    assert!((1..=20).contains(&gold));
                    assert_eq!(hunter.gold(), 20 + gold);
                }
                Dig::Dirt => {
                    assert_eq!(hunter.gold(), 20);
                    assert!(town.latest_news().contains("dirt"));
                }
                other => panic!("unexpected first dig {other:?}"),
            }
            assert!((20..=40).contains(&hunter.gold()));

            let after_first = hunter.gold();
            assert_eq!(town.dig_gold(&mut hunter, &mut rng).unwrap(), Dig::AlreadyDug);
            assert_eq!(hunter.gold(), after_first);
            assert!(town.latest_news().contains("already dug"));
        }
    }

    #[test]
    fn shop_replies_become_news() {
        let mut hunter = Hunter::new("a", 1, 3);
        let mut town = arrived(TerrainKind::Ocean, Difficulty::Normal, false, &hunter);
        town.enter_shop(
            &mut hunter,
            ShopRequest::Buy {
                item: Item::Boat,
                quantity: 1,
            },
        )
        .unwrap();
        assert!(town.latest_news().contains("can't afford"));
        assert_eq!(hunter.gold(), 1);
    }

    #[test]
    fn info_string_names_terrain() {
        let town = town(TerrainKind::Jungle, Difficulty::Normal, false);
        assert!(town.info_string().contains("Jungle"));
    }
}
