//! Run Graph - Procedural Dungeon Run Core
//!
//! This crate generates and validates the directed room graph of a single
//! procedurally generated dungeon run:
//! - Rooms (type tag, exits, biome/difficulty/reward payload)
//! - Run graph (arena of nodes, directed edges, one start node)
//! - Path generation (seeded, deterministic linear runs ending in a boss)
//! - Graph validation (cycles, reachability, dead ends, boss presence)
//! - Seed derivation, Monte-Carlo survey and DOT export for tooling

pub mod balance;
pub mod constants;
pub mod generation;
pub mod graph;
pub mod logging;
pub mod room;
pub mod seed;
pub mod visualization;

pub use generation::{ConfigError, PathConfig, PathGenerator, RandomSource};
pub use graph::{Defect, DefectKind, GraphValidator, Node, NodeId, RunGraph, ValidationResult};
pub use room::{
    Biome, Direction, Exit, ExitPosition, Reward, RewardType, Room, RoomError, RoomType,
};
pub use seed::{RunRng, RunSeed};
