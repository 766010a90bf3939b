//! Rooms: the leaf entity of a run.
//!
//! A room has an immutable identity (id + type) fixed at construction and a
//! mutable payload owned by whoever holds it: exits, biome, difficulty and
//! reward list. The run graph only ever looks at the type.

pub mod biome;
pub mod reward;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_DIFFICULTY, MAX_EXITS};

pub use biome::Biome;
pub use reward::{Reward, RewardType};

/// Contract violations when building or editing a room
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("Room ID cannot be empty")]
    EmptyId,
    #[error("Room {room_id} already has the maximum of {max} exits")]
    ExitCapacityExceeded { room_id: String, max: usize },
}

/// Encounter type of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Combat,   // standard encounter
    Elite,    // tougher enemies, better rewards
    MiniBoss, // mid-run boss fight
    Treasure, // guaranteed reward
    Shop,
    Fountain, // health restoration
    Story,    // narrative moment
    Boss,     // terminal room of a run
}

impl RoomType {
    /// Every variant in declaration order
    pub const ALL: [RoomType; 8] = [
        RoomType::Combat,
        RoomType::Elite,
        RoomType::MiniBoss,
        RoomType::Treasure,
        RoomType::Shop,
        RoomType::Fountain,
        RoomType::Story,
        RoomType::Boss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combat => "Combat",
            Self::Elite => "Elite",
            Self::MiniBoss => "MiniBoss",
            Self::Treasure => "Treasure",
            Self::Shop => "Shop",
            Self::Fountain => "Fountain",
            Self::Story => "Story",
            Self::Boss => "Boss",
        }
    }

    /// Display name for a raw type id (declaration index).
    /// Out-of-range ids map to `"Unknown"`.
    pub fn name_for_id(id: u32) -> &'static str {
        Self::ALL
            .get(id as usize)
            .map(RoomType::as_str)
            .unwrap_or("Unknown")
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall an exit sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Position in room-local coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExitPosition {
    pub x: f32,
    pub y: f32,
}

impl ExitPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for ExitPosition {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub position: ExitPosition,
    pub direction: Direction,
}

/// A single dungeon encounter
#[derive(Debug)]
pub struct Room {
    id: String,
    room_type: RoomType,
    exits: Vec<Exit>,
    biome: Biome,
    difficulty: f32,
    rewards: Vec<Reward>,
}

impl Room {
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Result<Self, RoomError> {
        let id = id.into();
        if id.is_empty() {
            return Err(RoomError::EmptyId);
        }
        Ok(Self::with_checked_id(id, room_type))
    }

    /// Caller guarantees `id` is non-empty
    pub(crate) fn with_checked_id(id: String, room_type: RoomType) -> Self {
        debug_assert!(!id.is_empty());
        Self {
            id,
            room_type,
            exits: Vec::with_capacity(MAX_EXITS),
            biome: Biome::default(),
            difficulty: DEFAULT_DIFFICULTY,
            rewards: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn is_boss(&self) -> bool {
        self.room_type == RoomType::Boss
    }

    /// Add an exit. Duplicate directions and positions are allowed.
    pub fn add_exit(
        &mut self,
        position: impl Into<ExitPosition>,
        direction: Direction,
    ) -> Result<(), RoomError> {
        if self.exits.len() >= MAX_EXITS {
            return Err(RoomError::ExitCapacityExceeded {
                room_id: self.id.clone(),
                max: MAX_EXITS,
            });
        }
        self.exits.push(Exit {
            position: position.into(),
            direction,
        });
        Ok(())
    }

    pub fn has_exit(&self, direction: Direction) -> bool {
        self.exits.iter().any(|e| e.direction == direction)
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }

    pub fn biome(&self) -> Biome {
        self.biome
    }

    pub fn set_biome(&mut self, biome: Biome) {
        self.biome = biome;
    }

    pub fn difficulty(&self) -> f32 {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: f32) {
        self.difficulty = difficulty;
    }

    pub fn add_reward(&mut self, reward: impl Into<Reward>) {
        self.rewards.push(reward.into());
    }

    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    pub fn clear_rewards(&mut self) {
        self.rewards.clear();
    }
}
