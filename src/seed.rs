//! Run seeds.
//!
//! A base seed (8 bytes) names a whole family of runs. Each run index is
//! hashed with the base seed so regenerated runs never share a stream.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

use crate::constants::DEFAULT_RUN_SEED;

/// Seeded generator handed to `PathGenerator`
pub type RunRng = Xoshiro256PlusPlus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSeed {
    pub seed: u64,
}

impl Default for RunSeed {
    fn default() -> Self {
        Self {
            seed: DEFAULT_RUN_SEED,
        }
    }
}

impl RunSeed {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Deterministic run hash from base seed and run index
    pub fn run_hash(&self, run_index: u64) -> u64 {
        let mut hasher = Sha3_256::new();
        hasher.update(self.seed.to_le_bytes());
        hasher.update(run_index.to_le_bytes());
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Stream seeded directly from the base seed
    pub fn rng(&self) -> RunRng {
        RunRng::seed_from_u64(self.seed)
    }

    /// Stream for the `run_index`-th run of this family
    pub fn rng_for_run(&self, run_index: u64) -> RunRng {
        RunRng::seed_from_u64(self.run_hash(run_index))
    }
}
