use std::fmt;
use std::str::FromStr;

use treasure_hunter_game::{Action, Game, Item, ShopRequest};

/// Policy interface for automated play strategies.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Select the next action for the current game state.
    fn next_action(&mut self, game: &Game) -> Action;
}

/// Built-in gameplay strategies for automated runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameplayStrategy {
    Cautious,
    Brawler,
    Digger,
}

impl GameplayStrategy {
    pub const ALL: [Self; 3] = [Self::Cautious, Self::Brawler, Self::Digger];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cautious => "Cautious",
            Self::Brawler => "Brawler",
            Self::Digger => "Digger",
        }
    }

    #[must_use]
    pub fn create_policy(self) -> Box<dyn PlayerPolicy + Send> {
        match self {
            Self::Cautious => Box::new(CautiousPolicy),
            Self::Brawler => Box::new(BrawlerPolicy::default()),
            Self::Digger => Box::new(DiggerPolicy),
        }
    }
}

impl fmt::Display for GameplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameplayStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown strategy: {s}"))
    }
}

/// Hunts, buys the crossing item and moves on. Brawls only when broke.
struct CautiousPolicy;

/// Arms up with a sword and picks one fight per town.
#[derive(Default)]
struct BrawlerPolicy {
    fought_in_town: Option<u32>,
}

/// Carries a shovel and digs every town before leaving.
struct DiggerPolicy;

impl PlayerPolicy for CautiousPolicy {
    fn name(&self) -> &'static str {
        "Cautious"
    }

    fn next_action(&mut self, game: &Game) -> Action {
        if !game.searched_this_town() {
            return Action::Hunt;
        }
        travel_step(game, None)
    }
}

impl PlayerPolicy for BrawlerPolicy {
    fn name(&self) -> &'static str {
        "Brawler"
    }

    fn next_action(&mut self, game: &Game) -> Action {
        if let Some(buy) = stock_up(game, Item::Sword) {
            return buy;
        }
        let town = game.towns_visited();
        if game.hunter().has_item_in_kit(Item::Sword) && self.fought_in_town != Some(town) {
            self.fought_in_town = Some(town);
            return Action::LookForTrouble;
        }
        if !game.searched_this_town() {
            return Action::Hunt;
        }
        travel_step(game, Some(Item::Sword))
    }
}

impl PlayerPolicy for DiggerPolicy {
    fn name(&self) -> &'static str {
        "Digger"
    }

    fn next_action(&mut self, game: &Game) -> Action {
        if let Some(buy) = stock_up(game, Item::Shovel) {
            return buy;
        }
        if game.hunter().has_item_in_kit(Item::Shovel) && !game.town().dug_gold_already() {
            return Action::Dig;
        }
        if !game.searched_this_town() {
            return Action::Hunt;
        }
        travel_step(game, Some(Item::Shovel))
    }
}

/// Buy `item` when it is missing, affordable and fits.
fn stock_up(game: &Game, item: Item) -> Option<Action> {
    let hunter = game.hunter();
    let wanted = !hunter.has_item_in_kit(item)
        && hunter.kit().has_room_for(item)
        && affordable(game, item);
    wanted.then_some(Action::Shop(ShopRequest::Buy { item, quantity: 1 }))
}

/// Spending down to zero gold ends the game, so keep at least one coin.
fn affordable(game: &Game, item: Item) -> bool {
    game.hunter().gold() > game.town().shop().buy_price(item)
}

/// Get across the current terrain: move when equipped, otherwise free a
/// slot or buy the needed item. Brawl for gold when nothing else works.
fn travel_step(game: &Game, keep: Option<Item>) -> Action {
    let needed = game.town().terrain().needed_item();
    let hunter = game.hunter();
    if hunter.has_item_in_kit(needed) {
        return Action::Move;
    }
    if !hunter.kit().has_room_for(needed) {
        let spare = hunter
            .kit()
            .iter()
            .map(|slot| slot.item)
            .find(|item| Some(*item) != keep);
        if let Some(item) = spare {
            return Action::Shop(ShopRequest::Sell { item });
        }
    }
    if affordable(game, needed) {
        return Action::Shop(ShopRequest::Buy {
            item: needed,
            quantity: 1,
        });
    }
    if hunter.has_item_in_kit(Item::Shovel) && !game.town().dug_gold_already() {
        return Action::Dig;
    }
    Action::LookForTrouble
}
