//! Rewards offered after clearing a room.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    Boon,         // god blessing
    Pom,          // upgrades an existing boon
    Gold,         // currency
    CentaurHeart, // max health increase
    Hammer,       // weapon upgrade
    Hermes,
    Darkness,
    Gemstone,
    Nectar,
    Key,
    ErebusGate, // challenge gate, a choice rather than a reward
    ChaosGate,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boon => "Boon",
            Self::Pom => "Pom",
            Self::Gold => "Gold",
            Self::CentaurHeart => "Centaur Heart",
            Self::Hammer => "Hammer",
            Self::Hermes => "Hermes",
            Self::Darkness => "Darkness",
            Self::Gemstone => "Gemstone",
            Self::Nectar => "Nectar",
            Self::Key => "Key",
            Self::ErebusGate => "Erebus Gate",
            Self::ChaosGate => "Chaos Gate",
        }
    }
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reward with optional metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    pub reward_type: RewardType,
    /// Granting god for boons, empty otherwise
    pub god_name: String,
    /// Stack size for currencies
    pub quantity: u32,
}

impl Reward {
    pub fn new(reward_type: RewardType) -> Self {
        Self {
            reward_type,
            god_name: String::new(),
            quantity: 1,
        }
    }

    pub fn boon(god_name: impl Into<String>) -> Self {
        Self {
            god_name: god_name.into(),
            ..Self::new(RewardType::Boon)
        }
    }

    pub fn with_quantity(reward_type: RewardType, quantity: u32) -> Self {
        Self {
            quantity,
            ..Self::new(reward_type)
        }
    }
}

impl From<RewardType> for Reward {
    fn from(reward_type: RewardType) -> Self {
        Self::new(reward_type)
    }
}
