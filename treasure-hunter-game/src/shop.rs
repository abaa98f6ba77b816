//! Shop pricing, buying and selling.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::constants::{
    PRICE_BOAT, PRICE_BOOT, PRICE_HORSE, PRICE_MACHETE, PRICE_ROPE, PRICE_SHOVEL, PRICE_SWORD,
    PRICE_WATER,
};
use crate::hunter::{Hunter, KitError};
use crate::item::Item;

#[must_use]
pub const fn default_price(item: Item) -> i32 {
    match item {
        Item::Water => PRICE_WATER,
        Item::Rope => PRICE_ROPE,
        Item::Machete => PRICE_MACHETE,
        Item::Horse => PRICE_HORSE,
        Item::Boat => PRICE_BOAT,
        Item::Boot => PRICE_BOOT,
        Item::Shovel => PRICE_SHOVEL,
        Item::Sword => PRICE_SWORD,
    }
}

/// Base buy prices. Items missing from `prices` fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub prices: BTreeMap<Item, i32>,
}

impl Catalog {
    #[must_use]
    pub fn base_price(&self, item: Item) -> i32 {
        self.prices
            .get(&item)
            .copied()
            .unwrap_or_else(|| default_price(item))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            prices: Item::ALL
                .into_iter()
                .map(|item| (item, default_price(item)))
                .collect(),
        }
    }
}

/// What the hunter wants to do at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopRequest {
    Buy { item: Item, quantity: u32 },
    Sell { item: Item },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopReceipt {
    Bought { item: Item, quantity: u32, cost: i32 },
    Sold { item: Item, price: i32 },
}

impl fmt::Display for ShopReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bought {
                item,
                quantity: 1,
                cost,
            } => write!(f, "Ye' got yerself a {item}. Come again soon. ({cost} gold)"),
            Self::Bought {
                item,
                quantity,
                cost,
            } => write!(
                f,
                "Ye' got yerself {quantity} {item}. Come again soon. ({cost} gold)"
            ),
            Self::Sold { item, price } => {
                write!(f, "Pleasure doin' business with you. Here's {price} gold for yer {item}.")
            }
        }
    }
}

/// Recoverable shop failures. None of them mutate the hunter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("You can't afford that! {quantity} {item} comes to {cost} gold and you only have {gold}.")]
    InsufficientGold {
        item: Item,
        quantity: u32,
        cost: i64,
        gold: i32,
    },
    #[error("Your kit is too full to carry a {item}. ({capacity} kinds of gear at most)")]
    KitFull { item: Item, capacity: usize },
    #[error("Stop stringin' me along! You don't have a {0} to sell.")]
    NotOwned(Item),
    #[error("Buying zero {0}? Quit wasting my time.")]
    ZeroQuantity(Item),
}

/// A town shop with a difficulty-dependent sell markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    markdown: f64,
    catalog: Catalog,
}

impl Shop {
    #[must_use]
    pub fn new(markdown: f64, catalog: Catalog) -> Self {
        Self { markdown, catalog }
    }

    #[must_use]
    pub const fn markdown(&self) -> f64 {
        self.markdown
    }

    #[must_use]
    pub fn buy_price(&self, item: Item) -> i32 {
        self.catalog.base_price(item)
    }

    /// Sell price after markdown, rounded down.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sell_price(&self, item: Item) -> i32 {
        (f64::from(self.buy_price(item)) * self.markdown).floor() as i32
    }

    /// Handle a buy or sell request at the counter.
    ///
    /// # Errors
    ///
    /// Returns a [`ShopError`] when the trade cannot go through; the hunter
    /// is left untouched in that case.
    pub fn enter(&self, hunter: &mut Hunter, request: ShopRequest) -> Result<ShopReceipt, ShopError> {
        match request {
            ShopRequest::Buy { item, quantity } => self.buy(hunter, item, quantity),
            ShopRequest::Sell { item } => self.sell(hunter, item),
        }
    }

    fn buy(&self, hunter: &mut Hunter, item: Item, quantity: u32) -> Result<ShopReceipt, ShopError> {
        if quantity == 0 {
            return Err(ShopError::ZeroQuantity(item));
        }
        let cost = i64::from(self.buy_price(item)) * i64::from(quantity);
        if cost > i64::from(hunter.gold()) {
            return Err(ShopError::InsufficientGold {
                item,
                quantity,
                cost,
                gold: hunter.gold(),
            });
        }
        hunter
            .kit_mut()
            .add(item, quantity)
            .map_err(|err| match err {
                KitError::Full { capacity } => ShopError::KitFull { item, capacity },
                KitError::ZeroQuantity(item) => ShopError::ZeroQuantity(item),
            })?;
        // cost <= gold, so it fits in i32
        let cost = i32::try_from(cost).unwrap_or(i32::MAX);
        hunter.change_gold(-cost);
        log::debug!("bought {quantity} {item} for {cost} gold");
        Ok(ShopReceipt::Bought {
            item,
            quantity,
            cost,
        })
    }

    fn sell(&self, hunter: &mut Hunter, item: Item) -> Result<ShopReceipt, ShopError> {
        if !hunter.remove_item_from_kit(item) {
            return Err(ShopError::NotOwned(item));
        }
        let price = self.sell_price(item);
        hunter.change_gold(price);
        log::debug!("sold {item} for {price} gold");
        Ok(ShopReceipt::Sold { item, price })
    }

    /// Price list shown before buying (`selling == false`) or selling.
    #[must_use]
    pub fn catalog_lines(&self, selling: bool) -> Vec<String> {
        Item::ALL
            .into_iter()
            .map(|item| {
                let price = if selling {
                    self.sell_price(item)
                } else {
                    self.buy_price(item)
                };
                format!("{item}: {price} gold")
            })
            .collect()
    }
}
