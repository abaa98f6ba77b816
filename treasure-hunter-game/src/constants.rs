//! Centralized balance and tuning constants for Treasure Hunter game logic.
//!
//! Difficulty profiles, brawl odds and dig rewards all read from here so the
//! game can only be rebalanced through a reviewed code change.

// Hunter --------------------------------------------------------------------
pub const DEFAULT_STARTING_GOLD: i32 = 20;
pub const DEFAULT_KIT_CAPACITY: usize = 3;
pub const DEFAULT_TREASURE_GOAL: usize = 3;

// Difficulty profiles -------------------------------------------------------
pub(crate) const NORMAL_MARKDOWN: f64 = 0.5;
pub(crate) const NORMAL_TOUGHNESS: f64 = 0.4;
pub(crate) const HARD_MARKDOWN: f64 = 0.25;
pub(crate) const HARD_TOUGHNESS: f64 = 0.75;
pub(crate) const EASY_MARKDOWN: f64 = 1.0;
pub(crate) const EASY_TOUGHNESS: f64 = 0.35;
pub(crate) const SAMURAI_MARKDOWN: f64 = 1.0;
pub(crate) const SAMURAI_TOUGHNESS: f64 = 0.0;
pub(crate) const EASY_BONUS_GOLD: i32 = 20;
pub(crate) const SAMURAI_BONUS_GOLD: i32 = 20;
pub(crate) const TEST_BONUS_GOLD: i32 = 80;

// Crossing wear. Near-certain loss outside easy mode is intentional balance.
pub(crate) const ITEM_BREAK_CHANCE: f64 = 0.99;

// Trouble -------------------------------------------------------------------
pub(crate) const TOUGH_TOWN_NO_TROUBLE_CHANCE: f64 = 0.33;
pub(crate) const CALM_TOWN_NO_TROUBLE_CHANCE: f64 = 0.66;
pub(crate) const BRAWL_GOLD_MIN: i32 = 1;
pub(crate) const BRAWL_GOLD_MAX: i32 = 10;

// Digging -------------------------------------------------------------------
pub(crate) const DIG_SUCCESS_CHANCE: f64 = 0.5;
pub(crate) const DIG_GOLD_MIN: i32 = 1;
pub(crate) const DIG_GOLD_MAX: i32 = 20;

// Default shop prices, in gold ----------------------------------------------
pub(crate) const PRICE_WATER: i32 = 2;
pub(crate) const PRICE_ROPE: i32 = 4;
pub(crate) const PRICE_MACHETE: i32 = 6;
pub(crate) const PRICE_HORSE: i32 = 12;
pub(crate) const PRICE_BOAT: i32 = 20;
pub(crate) const PRICE_BOOT: i32 = 8;
pub(crate) const PRICE_SHOVEL: i32 = 8;
pub(crate) const PRICE_SWORD: i32 = 10;
