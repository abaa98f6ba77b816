//! Treasure Hunter Game Engine
//!
//! Platform-agnostic core rules for the Treasure Hunter adventure game: a
//! hunter travels between randomly generated towns, trades at shops, brawls,
//! digs for gold and hunts for three distinct treasures.
//! This crate performs no terminal I/O; drivers feed it [`Action`]s.

pub mod config;
pub mod constants;
pub mod difficulty;
pub mod game;
pub mod hunter;
pub mod item;
pub mod shop;
pub mod table;
pub mod terrain;
pub mod town;
pub mod treasure;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use game::{Action, Game, GameStatus, InvalidChoice, MenuChoice};
pub use hunter::{Hunter, Kit, KitError, KitSlot};
pub use item::{Item, UnknownItem};
pub use shop::{Catalog, Shop, ShopError, ShopReceipt, ShopRequest};
pub use terrain::{Terrain, TerrainKind};
pub use town::{Brawl, Dig, Town, TownError, TownPhase};
pub use treasure::{Treasure, TreasureCollection, TreasureSearch};
