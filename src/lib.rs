// Memsim: page replacement simulator

pub mod common;
pub mod mmu;
pub mod simulator;
pub mod trace;

// Re-export key items for convenient access
pub use common::types::{Frame, FrameId, PageNumber, VictimRecord};
pub use mmu::{FrameTable, MmuError, ReplacementPolicy};
pub use simulator::{AccessEvent, AccessOutcome, SimulationConfig, SimulationStats, Simulator};
pub use trace::{AccessKind, TraceError, TraceReader, TraceRecord};
