use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Badly formatted file. Error on line {line}")]
    BadAccessKind { line: usize },
    #[error("Bad address on line {line}")]
    BadAddress { line: usize },
    #[error("Missing field on line {line}")]
    MissingField { line: usize },
}
