use serde::{Deserialize, Serialize};

use crate::common::types::{DEFAULT_RANDOM_SEED, PAGE_OFFSET_BITS};
use crate::mmu::ReplacementPolicy;

/// Configuration for one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of physical frames
    pub frame_count: usize,
    pub policy: ReplacementPolicy,
    /// Address bits below the page number
    pub page_offset_bits: u32,
    /// Seed for the random replacement policy
    pub seed: u64,
}

impl SimulationConfig {
    pub fn new(frame_count: usize, policy: ReplacementPolicy) -> Self {
        Self {
            frame_count,
            policy,
            ..Self::default()
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_count: 16,
            policy: ReplacementPolicy::Lru,
            page_offset_bits: PAGE_OFFSET_BITS,
            seed: DEFAULT_RANDOM_SEED,
        }
    }
}
