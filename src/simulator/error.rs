use thiserror::Error;

use crate::mmu::MmuError;
use crate::trace::TraceError;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Frame table error: {0}")]
    MmuError(#[from] MmuError),
    #[error("Trace error: {0}")]
    TraceError(#[from] TraceError),
}
