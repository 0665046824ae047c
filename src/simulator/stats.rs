use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate counters for a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub frames: usize,
    pub events: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
}

impl SimulationStats {
    pub fn new(frames: usize) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// Page faults per event, 0.0 for an empty trace
    pub fn fault_rate(&self) -> f64 {
        if self.events == 0 {
            return 0.0;
        }
        self.disk_reads as f64 / self.events as f64
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total memory frames:  {}", self.frames)?;
        writeln!(f, "events in trace:      {}", self.events)?;
        writeln!(f, "total disk reads:     {}", self.disk_reads)?;
        writeln!(f, "total disk writes:    {}", self.disk_writes)?;
        write!(f, "page fault rate:      {:.4}", self.fault_rate())
    }
}
