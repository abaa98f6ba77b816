//! Top-level game controller: setup, travel between towns, treasure
//! tracking and win/loss evaluation.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::hunter::Hunter;
use crate::item::Item;
use crate::shop::{Shop, ShopRequest};
use crate::town::{Brawl, Dig, Town, TownError};
use crate::treasure::{Treasure, TreasureCollection, TreasureSearch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Single-letter main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    Buy,
    Sell,
    Explore,
    Move,
    LookForTrouble,
    Dig,
    Hunt,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 8] = [
        Self::Buy,
        Self::Sell,
        Self::Explore,
        Self::Move,
        Self::LookForTrouble,
        Self::Dig,
        Self::Hunt,
        Self::Exit,
    ];

    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Buy => 'b',
            Self::Sell => 's',
            Self::Explore => 'e',
            Self::Move => 'm',
            Self::LookForTrouble => 'l',
            Self::Dig => 'd',
            Self::Hunt => 'h',
            Self::Exit => 'x',
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "(B)uy something at the shop.",
            Self::Sell => "(S)ell something at the shop.",
            Self::Explore => "(E)xplore surrounding terrain.",
            Self::Move => "(M)ove on to a different town.",
            Self::LookForTrouble => "(L)ook for trouble!",
            Self::Dig => "(D)ig for gold!",
            Self::Hunt => "(H)unt for treasure.",
            Self::Exit => "Give up the hunt and e(X)it.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Yikes! That's an invalid option! Try again.")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::ALL
                .into_iter()
                .find(|choice| choice.key() == key)
                .ok_or(InvalidChoice(input)),
            _ => Err(InvalidChoice(input)),
        }
    }
}

/// A fully specified player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Shop(ShopRequest),
    Explore,
    Move,
    LookForTrouble,
    Dig,
    Hunt,
    Quit,
}

/// Controller owning the hunter, the current town and the treasure tally.
#[derive(Debug, Clone)]
pub struct Game<R: Rng = ChaCha20Rng> {
    config: GameConfig,
    difficulty: Difficulty,
    hunter: Hunter,
    town: Town,
    treasure: Treasure,
    collected: TreasureCollection,
    searched: bool,
    status: GameStatus,
    towns_visited: u32,
    rng: R,
}

impl Game<ChaCha20Rng> {
    /// Start a seeded game.
    #[must_use]
    pub fn new(name: &str, difficulty: Difficulty, config: GameConfig, seed: u64) -> Self {
        log::info!("new game: difficulty {difficulty}, seed {seed}");
        Self::with_rng(name, difficulty, config, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Start a game drawing from the provided random source.
    pub fn with_rng(name: &str, difficulty: Difficulty, config: GameConfig, mut rng: R) -> Self {
        let hunter = Self::create_hunter(name, difficulty, &config);
        let (town, treasure) = Self::build_town(&config, difficulty, &mut rng);
        let collected = TreasureCollection::with_capacity(config.treasure_goal);
        let mut game = Self {
            config,
            difficulty,
            hunter,
            town,
            treasure,
            collected,
            searched: false,
            status: GameStatus::Playing,
            towns_visited: 1,
            rng,
        };
        game.town.hunter_arrives(&game.hunter);
        game.refresh_status();
        game
    }

    fn create_hunter(name: &str, difficulty: Difficulty, config: &GameConfig) -> Hunter {
        let profile = difficulty.profile();
        let starting_kit = difficulty.starting_kit();
        let capacity = if starting_kit.is_empty() {
            config.kit_capacity
        } else {
            config.kit_capacity.max(Item::ALL.len())
        };
        let purse = config.starting_gold.saturating_add(profile.bonus_gold);
        let mut hunter = Hunter::new(name, purse, capacity);
        for item in starting_kit {
            if let Err(err) = hunter.add_item(*item) {
                log::warn!("could not stock starting {item}: {err}");
            }
        }
        hunter
    }

    fn build_town(config: &GameConfig, difficulty: Difficulty, rng: &mut R) -> (Town, Treasure) {
        let profile = difficulty.profile();
        let treasure = Treasure::random(rng);
        let shop = Shop::new(profile.markdown, config.catalog.clone());
        (Town::new(shop, profile, rng), treasure)
    }

    fn enter_town(&mut self) {
        let (town, treasure) = Self::build_town(&self.config, self.difficulty, &mut self.rng);
        self.town = town;
        self.treasure = treasure;
        self.searched = false;
        self.towns_visited += 1;
        self.town.hunter_arrives(&self.hunter);
    }

    /// Win takes priority over loss when both hold.
    fn refresh_status(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if self.collected.len() >= self.config.treasure_goal {
            self.status = GameStatus::Won;
        } else if self.hunter.game_over() {
            self.status = GameStatus::Lost;
        }
        if self.status.is_terminal() {
            log::info!(
                "game ended {:?} after {} towns with {} gold",
                self.status,
                self.towns_visited,
                self.hunter.gold()
            );
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    #[must_use]
    pub const fn town(&self) -> &Town {
        &self.town
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn collected(&self) -> &TreasureCollection {
        &self.collected
    }

    /// Treasure hidden in the current town.
    #[must_use]
    pub const fn town_treasure(&self) -> Treasure {
        self.treasure
    }

    #[must_use]
    pub const fn searched_this_town(&self) -> bool {
        self.searched
    }

    #[must_use]
    pub const fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    #[must_use]
    pub fn latest_news(&self) -> &str {
        self.town.latest_news()
    }

    /// Buy or sell at the current town's shop.
    ///
    /// # Errors
    ///
    /// Propagates [`TownError`] if the town has no hunter.
    pub fn trade(&mut self, request: ShopRequest) -> Result<(), TownError> {
        self.town.enter_shop(&mut self.hunter, request)?;
        self.refresh_status();
        Ok(())
    }

    #[must_use]
    pub fn explore(&self) -> String {
        self.town.terrain().describe()
    }

    /// Leave for the next town. Returns the departing town's news when the
    /// crossing succeeded, `None` when the hunter is stuck.
    ///
    /// # Errors
    ///
    /// Propagates [`TownError`] if the town has no hunter.
    pub fn travel(&mut self) -> Result<Option<String>, TownError> {
        if !self.town.leave_town(&mut self.hunter, &mut self.rng)? {
            return Ok(None);
        }
        let departure = self.town.latest_news().to_string();
        self.enter_town();
        self.refresh_status();
        Ok(Some(departure))
    }

    /// # Errors
    ///
    /// Propagates [`TownError`] if the town has no hunter.
    pub fn look_for_trouble(&mut self) -> Result<Brawl, TownError> {
        let brawl = self.town.look_for_trouble(&mut self.hunter, &mut self.rng)?;
        self.refresh_status();
        Ok(brawl)
    }

    /// # Errors
    ///
    /// Propagates [`TownError`] if the town has no hunter.
    pub fn dig_gold(&mut self) -> Result<Dig, TownError> {
        let dig = self.town.dig_gold(&mut self.hunter, &mut self.rng)?;
        self.refresh_status();
        Ok(dig)
    }

    /// Search the current town once for its treasure.
    pub fn search_for_treasure(&mut self) -> TreasureSearch {
        if self.searched {
            return TreasureSearch::AlreadySearched;
        }
        self.searched = true;
        let treasure = self.treasure;
        let search = if !treasure.is_scoring() {
            TreasureSearch::FoundDust
        } else if self.collected.insert(treasure) {
            TreasureSearch::Collected(treasure)
        } else {
            TreasureSearch::Duplicate(treasure)
        };
        log::debug!("treasure search in town {}: {search:?}", self.towns_visited);
        self.refresh_status();
        search
    }

    pub fn quit(&mut self) {
        if !self.status.is_terminal() {
            self.status = GameStatus::Quit;
        }
    }

    /// Dispatch one action and return lines to show right away. The town's
    /// latest news is read separately through [`Self::latest_news`].
    ///
    /// Actions after the game has ended are ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`TownError`] if the town has no hunter.
    pub fn perform(&mut self, action: Action) -> Result<Vec<String>, TownError> {
        if self.status.is_terminal() {
            return Ok(Vec::new());
        }
        let notices = match action {
            Action::Shop(request) => {
                self.trade(request)?;
                Vec::new()
            }
            Action::Explore => vec![self.explore()],
            Action::Move => self.travel()?.into_iter().collect(),
            Action::LookForTrouble => {
                self.look_for_trouble()?;
                Vec::new()
            }
            Action::Dig => {
                self.dig_gold()?;
                Vec::new()
            }
            Action::Hunt => vec![self.search_for_treasure().to_string()],
            Action::Quit => {
                self.quit();
                Vec::new()
            }
        };
        Ok(notices)
    }

    /// Closing line for a finished game.
    #[must_use]
    pub fn ending_message(&self) -> Option<String> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => {
                let found: Vec<&str> = self.collected.iter().map(Treasure::name).collect();
                Some(format!(
                    "Congratulations, {}! You found the {} and won the hunt!",
                    self.hunter.name(),
                    found.join(", ")
                ))
            }
            GameStatus::Lost => Some("Game Over! You've run out of gold.".to_string()),
            GameStatus::Quit => Some(format!("Fare thee well, {}!", self.hunter.name())),
        }
    }
}
