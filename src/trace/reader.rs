use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::types::PageNumber;
use crate::trace::error::TraceError;

/// Kind of memory access recorded in a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessKind {
    Read,
    Write,
}

impl AccessKind {
    pub fn is_write(&self) -> bool {
        matches!(self, AccessKind::Write)
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Read => f.write_str("R"),
            AccessKind::Write => f.write_str("W"),
        }
    }
}

/// One `<hex address> <R|W>` trace entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    pub address: u32,
    pub kind: AccessKind,
}

impl TraceRecord {
    pub fn page_number(&self, offset_bits: u32) -> PageNumber {
        page_number(self.address, offset_bits)
    }
}

/// Strip the page offset from an address
pub fn page_number(address: u32, offset_bits: u32) -> PageNumber {
    address.checked_shr(offset_bits).unwrap_or(0)
}

/// Iterator over the records of a trace
pub struct TraceReader<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn parse_line(line: &str, line_no: usize) -> Result<TraceRecord, TraceError> {
        let mut fields = line.split_whitespace();

        let address = fields.next().ok_or(TraceError::MissingField { line: line_no })?;
        let kind = fields.next().ok_or(TraceError::MissingField { line: line_no })?;

        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .unwrap_or(address);
        let address = u32::from_str_radix(digits, 16)
            .map_err(|_| TraceError::BadAddress { line: line_no })?;

        let kind = match kind {
            "R" => AccessKind::Read,
            "W" => AccessKind::Write,
            _ => return Err(TraceError::BadAccessKind { line: line_no }),
        };

        Ok(TraceRecord { address, kind })
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(TraceError::IoError(e))),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            return Some(Self::parse_line(&line, self.line_no));
        }
    }
}
