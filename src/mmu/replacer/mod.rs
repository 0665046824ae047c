mod clock;
mod fifo;
mod lru;
mod random;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::types::{Frame, FrameId};
use crate::mmu::error::MmuError;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use random::RandomReplacer;

/// Page replacement policy used once every frame is occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReplacementPolicy {
    #[serde(rename = "rand")]
    #[value(name = "rand")]
    Random,
    Fifo,
    Lru,
    Clock,
}

impl ReplacementPolicy {
    pub const ALL: [ReplacementPolicy; 4] = [
        ReplacementPolicy::Random,
        ReplacementPolicy::Fifo,
        ReplacementPolicy::Lru,
        ReplacementPolicy::Clock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReplacementPolicy::Random => "rand",
            ReplacementPolicy::Fifo => "fifo",
            ReplacementPolicy::Lru => "lru",
            ReplacementPolicy::Clock => "clock",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = MmuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rand" => Ok(ReplacementPolicy::Random),
            "fifo" => Ok(ReplacementPolicy::Fifo),
            "lru" => Ok(ReplacementPolicy::Lru),
            "clock" => Ok(ReplacementPolicy::Clock),
            other => Err(MmuError::InvalidOperation(format!(
                "Replacement algorithm must be rand/fifo/lru/clock, got '{}'",
                other
            ))),
        }
    }
}

/// Cursor and generator state for every policy.
///
/// All policies keep their state for the whole run so that switching the
/// policy between calls does not reset another policy's cursor.
pub struct Replacer {
    random: RandomReplacer,
    fifo: FifoReplacer,
    clock: ClockReplacer,
}

impl Replacer {
    pub fn new(frame_count: usize, seed: u64) -> Self {
        Self {
            random: RandomReplacer::new(frame_count, seed),
            fifo: FifoReplacer::new(frame_count),
            clock: ClockReplacer::new(),
        }
    }

    /// Pick the frame to evict under `policy`
    pub fn victim(&mut self, policy: ReplacementPolicy, frames: &mut [Frame]) -> FrameId {
        match policy {
            ReplacementPolicy::Random => self.random.victim(),
            ReplacementPolicy::Fifo => self.fifo.victim(),
            ReplacementPolicy::Lru => lru::victim(frames),
            ReplacementPolicy::Clock => self.clock.victim(frames),
        }
    }

    pub fn fifo_hand(&self) -> FrameId {
        self.fifo.hand()
    }

    pub fn clock_hand(&self) -> FrameId {
        self.clock.hand()
    }
}
