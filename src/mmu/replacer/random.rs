use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::types::FrameId;

/// Random replacement drawing from a seeded generator, so runs are repeatable
pub struct RandomReplacer {
    rng: StdRng,
    frame_count: usize,
}

impl RandomReplacer {
    pub fn new(frame_count: usize, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            frame_count,
        }
    }

    pub fn victim(&mut self) -> FrameId {
        self.rng.gen_range(0..self.frame_count)
    }
}
