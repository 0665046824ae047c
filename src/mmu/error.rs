use thiserror::Error;
use crate::common::types::PageNumber;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MmuError {
    #[error("Cannot create frame table with {0} frames")]
    AllocationError(usize),
    #[error("No free frame available for page {0}")]
    NoFreeFrame(PageNumber),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}
