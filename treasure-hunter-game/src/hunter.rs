//! Player state: name, purse and kit.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::item::Item;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KitError {
    #[error("Your kit is full ({capacity} kinds of gear). Sell something first.")]
    Full { capacity: usize },
    #[error("You can't add zero {0}.")]
    ZeroQuantity(Item),
}

/// One kit slot holding a stack of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitSlot {
    pub item: Item,
    pub count: u32,
}

/// Bounded inventory. Capacity limits distinct items; units of the same
/// item stack in one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    capacity: usize,
    slots: SmallVec<[KitSlot; 3]>,
}

impl Kit {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            slots: SmallVec::new(),
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn contains(&self, item: Item) -> bool {
        self.count(item) > 0
    }

    #[must_use]
    pub fn count(&self, item: Item) -> u32 {
        self.slots
            .iter()
            .find(|slot| slot.item == item)
            .map_or(0, |slot| slot.count)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Whether `item` can be added without evicting anything.
    #[must_use]
    pub fn has_room_for(&self, item: Item) -> bool {
        self.contains(item) || !self.is_full()
    }

    /// Add `quantity` units of `item`.
    ///
    /// # Errors
    ///
    /// Fails without mutation when the quantity is zero or a new item would
    /// exceed the slot capacity.
    pub fn add(&mut self, item: Item, quantity: u32) -> Result<u32, KitError> {
        if quantity == 0 {
            return Err(KitError::ZeroQuantity(item));
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.item == item) {
            slot.count = slot.count.saturating_add(quantity);
            return Ok(slot.count);
        }
        if self.is_full() {
            return Err(KitError::Full {
                capacity: self.capacity,
            });
        }
        self.slots.push(KitSlot {
            item,
            count: quantity,
        });
        Ok(quantity)
    }

    /// Remove a single unit. Returns false if the item was not held.
    pub fn remove_one(&mut self, item: Item) -> bool {
        let Some(idx) = self.slots.iter().position(|slot| slot.item == item) else {
            return false;
        };
        self.slots[idx].count -= 1;
        if self.slots[idx].count == 0 {
            self.slots.remove(idx);
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &KitSlot> {
        self.slots.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of distinct items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    fn summary(&self) -> String {
        self.slots
            .iter()
            .map(|slot| {
                if slot.count > 1 {
                    format!("{} x{}", slot.item, slot.count)
                } else {
                    slot.item.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The player-controlled hunter.
///
/// Gold is deliberately unclamped: a lost brawl can push it below zero,
/// which ends the game on the next status check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: i32,
    kit: Kit,
}

impl Hunter {
    #[must_use]
    pub fn new(name: &str, gold: i32, kit_capacity: usize) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            gold,
            kit: Kit::with_capacity(kit_capacity),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn gold(&self) -> i32 {
        self.gold
    }

    #[must_use]
    pub const fn kit(&self) -> &Kit {
        &self.kit
    }

    pub const fn kit_mut(&mut self) -> &mut Kit {
        &mut self.kit
    }

    pub fn change_gold(&mut self, delta: i32) {
        self.gold = self.gold.saturating_add(delta);
    }

    /// Add one unit of `item` to the kit.
    ///
    /// # Errors
    ///
    /// Returns [`KitError::Full`] when the kit has no free slot for it.
    pub fn add_item(&mut self, item: Item) -> Result<(), KitError> {
        self.kit.add(item, 1).map(|_| ())
    }

    pub fn remove_item_from_kit(&mut self, item: Item) -> bool {
        self.kit.remove_one(item)
    }

    #[must_use]
    pub fn has_item_in_kit(&self, item: Item) -> bool {
        self.kit.contains(item)
    }

    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.gold <= 0
    }

    #[must_use]
    pub fn info_string(&self) -> String {
        let mut line = format!("{} has {} gold", self.name, self.gold);
        if self.kit.is_empty() {
            line.push_str(" and an empty kit");
        } else {
            line.push_str(" and ");
            line.push_str(&self.kit.summary());
        }
        line
    }
}
