//! Centralized constants for the run graph core.
//!
//! Default generation parameters live here so the config layer, the CLI and
//! the tests agree on a single source of truth.

// =====================================================
// Rooms
// =====================================================

/// Maximum exits per room (one per cardinal wall)
pub const MAX_EXITS: usize = 4;

/// Difficulty rating a freshly built room starts with
pub const DEFAULT_DIFFICULTY: f32 = 1.0;

// =====================================================
// Path Generation
// =====================================================

/// Default lower bound (inclusive) for rooms in a run
pub const DEFAULT_MIN_ROOMS: u32 = 40;

/// Default upper bound (inclusive) for rooms in a run
pub const DEFAULT_MAX_ROOMS: u32 = 50;

/// Reserved for branching generation, not read by the linear generator
pub const DEFAULT_BRANCH_PROBABILITY: f32 = 0.3;

/// Every Nth depth past the first becomes a MiniBoss room
pub const DEFAULT_MINI_BOSS_INTERVAL: u32 = 10;

/// Reserved, not enforced by the linear generator
pub const DEFAULT_GUARANTEED_SHOPS: u32 = 2;

/// Reserved, not enforced by the linear generator
pub const DEFAULT_GUARANTEED_FOUNTAINS: u32 = 3;

/// Room-type roll range is `0..=ROOM_ROLL_MAX`
pub const ROOM_ROLL_MAX: u32 = 100;

/// Prefix for generated room ids (`room_1`, `room_2`, ...)
pub const ROOM_ID_PREFIX: &str = "room_";

// =====================================================
// Seeds
// =====================================================

/// Seed used by the CLI and survey when none is given
pub const DEFAULT_RUN_SEED: u64 = 42;
