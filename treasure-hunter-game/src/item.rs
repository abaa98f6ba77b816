//! Catalog items a hunter can carry.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    Water,
    Rope,
    Machete,
    Horse,
    Boat,
    Boot,
    Shovel,
    Sword,
}

impl Item {
    pub const ALL: [Self; 8] = [
        Self::Water,
        Self::Rope,
        Self::Machete,
        Self::Horse,
        Self::Boat,
        Self::Boot,
        Self::Shovel,
        Self::Sword,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Rope => "rope",
            Self::Machete => "machete",
            Self::Horse => "horse",
            Self::Boat => "boat",
            Self::Boot => "boot",
            Self::Shovel => "shovel",
            Self::Sword => "sword",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when player input names something the shop never stocks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("We don't sell any {0} around here.")]
pub struct UnknownItem(pub String);

impl FromStr for Item {
    type Err = UnknownItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|item| item.name() == wanted)
            .ok_or(UnknownItem(wanted))
    }
}
