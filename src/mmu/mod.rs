pub mod error;
pub mod frame_table;
pub mod replacer;

pub use error::MmuError;
pub use frame_table::FrameTable;
pub use replacer::ReplacementPolicy;
