//! Errors reported by table construction, table stores, and the listing
//! loader.
//!
//! A failed lookup is not an error. Fetches return `Option`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("table capacity must be at least one slot")]
  InvalidCapacity,
  #[error("no free slot on the probe sequence of key {key:?}")]
  TableFull { key: String },
  #[error("failed to read listing: {0}")]
  Io(#[from] std::io::Error),
  #[error("listing has no header line")]
  MissingHeader,
  #[error("malformed record on line {line}: {reason}")]
  MalformedRecord { line: usize, reason: &'static str },
}
