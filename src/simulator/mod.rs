pub mod config;
pub mod error;
pub mod stats;

use log::{debug, info};

use crate::common::types::{FrameId, PageNumber, VictimRecord};
use crate::mmu::{FrameTable, MmuError};
use crate::trace::{page_number, AccessKind, TraceError, TraceRecord};

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use stats::SimulationStats;

/// What the frame table did to serve an access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Page already resident
    Hit(FrameId),
    /// Page fault served by an empty frame
    Allocated(FrameId),
    /// Page fault served by evicting another page
    Evicted(VictimRecord),
}

impl AccessOutcome {
    pub fn is_fault(&self) -> bool {
        !matches!(self, AccessOutcome::Hit(_))
    }

    pub fn frame_id(&self) -> FrameId {
        match self {
            AccessOutcome::Hit(frame_id) | AccessOutcome::Allocated(frame_id) => *frame_id,
            AccessOutcome::Evicted(victim) => victim.frame_id,
        }
    }
}

/// A single processed trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessEvent {
    pub page_number: PageNumber,
    pub kind: AccessKind,
    pub outcome: AccessOutcome,
}

/// Replays memory accesses against a frame table and counts disk traffic
pub struct Simulator {
    config: SimulationConfig,
    frame_table: FrameTable,
    stats: SimulationStats,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let frame_table = FrameTable::with_seed(config.frame_count, config.seed)?;
        let stats = SimulationStats::new(config.frame_count);

        Ok(Self {
            config,
            frame_table,
            stats,
        })
    }

    /// Process one access to `page_number`
    pub fn access(&mut self, page_number: PageNumber, kind: AccessKind) -> Result<AccessEvent, MmuError> {
        let outcome = match self.frame_table.lookup(page_number) {
            Some(frame_id) => AccessOutcome::Hit(frame_id),
            None => {
                self.stats.disk_reads += 1;
                debug!("Page fault {}", page_number);

                if self.frame_table.has_free_frame() {
                    AccessOutcome::Allocated(self.frame_table.allocate(page_number)?)
                } else {
                    let victim = self.frame_table.select_victim(page_number, self.config.policy)?;
                    if victim.dirty {
                        self.stats.disk_writes += 1;
                    }
                    AccessOutcome::Evicted(victim)
                }
            }
        };

        if kind.is_write() {
            self.frame_table.mark_modified(page_number);
        }
        self.stats.events += 1;

        Ok(AccessEvent {
            page_number,
            kind,
            outcome,
        })
    }

    /// Process one access to a raw address
    pub fn access_address(&mut self, address: u32, kind: AccessKind) -> Result<AccessEvent, MmuError> {
        self.access(page_number(address, self.config.page_offset_bits), kind)
    }

    /// Replay a whole trace, returning the final counters
    pub fn run<I>(&mut self, records: I) -> Result<SimulationStats, SimulationError>
    where
        I: IntoIterator<Item = Result<TraceRecord, TraceError>>,
    {
        self.run_with(records, |_| {})
    }

    /// Replay a whole trace, handing every event to `on_event`
    pub fn run_with<I, F>(&mut self, records: I, mut on_event: F) -> Result<SimulationStats, SimulationError>
    where
        I: IntoIterator<Item = Result<TraceRecord, TraceError>>,
        F: FnMut(&AccessEvent),
    {
        info!(
            "Starting simulation: {} frames, policy {}",
            self.config.frame_count, self.config.policy
        );

        for record in records {
            let record = record?;
            let event = self.access_address(record.address, record.kind)?;
            on_event(&event);
        }

        info!(
            "Simulation complete: {} events, {} disk reads, {} disk writes",
            self.stats.events, self.stats.disk_reads, self.stats.disk_writes
        );
        Ok(self.stats.clone())
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn frame_table(&self) -> &FrameTable {
        &self.frame_table
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
