pub mod error;
pub mod reader;

pub use error::TraceError;
pub use reader::{page_number, AccessKind, TraceReader, TraceRecord};
