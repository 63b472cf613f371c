use crate::domain::status::StatusBatch;
use crate::error::{PostProcessingError, Result};
use std::io::{BufRead, BufReader, Read};

/// Reads poll ticks from a JSON-lines source.
///
/// Each non-blank line holds one tick: a JSON array of status records.
/// A line that fails to parse yields an error for that tick only; reading
/// carries on with the next line. An I/O error is yielded once and ends the
/// stream.
pub struct StatusReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> StatusReader<R> {
    /// Creates a new `StatusReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes one batch per line.
    pub fn batches(self) -> impl Iterator<Item = Result<StatusBatch>> {
        let mut failed = false;
        self.reader
            .lines()
            .filter(|line| !matches!(line, Ok(line) if line.trim().is_empty()))
            .map_while(move |line| {
                if failed {
                    return None;
                }
                match line {
                    Ok(line) => {
                        Some(serde_json::from_str(&line).map_err(PostProcessingError::from))
                    }
                    Err(e) => {
                        failed = true;
                        Some(Err(PostProcessingError::from(e)))
                    }
                }
            })
            .fuse()
    }
}
