use serde::{Deserialize, Serialize};

/// Biome a room belongs to. Each has its own visual style and enemy roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Tartarus, // first biome, basic enemies
    Asphodel, // lava, ranged enemies
    Elysium,  // elite enemies
    Styx,     // final biome, stealth sections
}

impl Biome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tartarus => "Tartarus",
            Self::Asphodel => "Asphodel",
            Self::Elysium => "Elysium",
            Self::Styx => "Styx",
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
