//! Run path generation.
//!
//! Builds a linear chain of rooms from a start Combat room to a terminal Boss
//! room. The random stream is borrowed from the caller and consumed in a fixed
//! order: one draw for the run length, then one draw per room whose type is
//! not forced (first room, last room, MiniBoss depths).

pub mod config;
pub mod room_table;

use rand::Rng;

use crate::constants::{ROOM_ID_PREFIX, ROOM_ROLL_MAX};
use crate::graph::{NodeId, RunGraph};
use crate::room::{Room, RoomType};

pub use config::{ConfigError, PathConfig};
pub use room_table::{room_type_for_roll, ROOM_TYPE_TABLE};

/// Uniform random stream consumed by the generator
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32;

    /// Uniform probability roll in `[0, 1)`
    fn roll(&mut self) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn int_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max)
    }

    fn roll(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Generates run graphs from a borrowed random stream
pub struct PathGenerator<'a, R: RandomSource + ?Sized> {
    rng: &'a mut R,
    config: PathConfig,
}

impl<'a, R: RandomSource + ?Sized> PathGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self {
            rng,
            config: PathConfig::default(),
        }
    }

    pub fn with_config(rng: &'a mut R, config: PathConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Replace the configuration. Invalid ranges are rejected and the
    /// previous configuration is kept.
    pub fn set_config(&mut self, config: PathConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Generate one run. Never fails: the configuration was validated when set.
    pub fn generate_path(&mut self) -> RunGraph {
        let total_rooms = self
            .rng
            .int_inclusive(self.config.min_rooms, self.config.max_rooms);

        let mut graph = RunGraph::new();
        let mut previous: Option<NodeId> = None;

        for depth in 0..total_rooms {
            let room_type = self.select_room_type(depth, total_rooms);
            let node = graph.insert_room(generated_room(depth, room_type));
            if let Some(n) = graph.node_mut(node) {
                n.set_depth(depth);
            }
            tracing::trace!(depth, room_type = room_type.as_str(), "room placed");

            if depth == 0 {
                graph.set_start_node(node);
            }
            if let Some(prev) = previous {
                graph.connect(prev, node);
            }
            previous = Some(node);
        }

        tracing::debug!(
            rooms = total_rooms,
            min = self.config.min_rooms,
            max = self.config.max_rooms,
            "generated run path"
        );

        graph
    }

    /// Forced rules first (boss, first room, MiniBoss stride), then a roll
    fn select_room_type(&mut self, depth: u32, total_rooms: u32) -> RoomType {
        if depth + 1 == total_rooms {
            return RoomType::Boss;
        }
        if depth == 0 {
            return RoomType::Combat;
        }
        let interval = self.config.mini_boss_interval;
        if interval > 0 && depth % interval == 0 {
            return RoomType::MiniBoss;
        }
        room_type_for_roll(self.rng.int_inclusive(0, ROOM_ROLL_MAX))
    }
}

/// `room_1`, `room_2`, ... (1-indexed by depth)
pub fn room_id(depth: u32) -> String {
    format!("{ROOM_ID_PREFIX}{}", depth + 1)
}

fn generated_room(depth: u32, room_type: RoomType) -> Room {
    // room_id() always carries ROOM_ID_PREFIX
    Room::with_checked_id(room_id(depth), room_type)
}
