// crates/infra/src/counter.rs
use std::{io::BufRead, path::Path};

use srcsweep_domain::is_non_blank;
use srcsweep_ports::processing::LineCounter;
use srcsweep_shared_kernel::{InfrastructureError, LineCount, Result};

use crate::persistence::FileReader;

/// Streams a file line by line and counts the non-blank ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamingLineCounter;

impl StreamingLineCounter {
    pub fn new() -> Self {
        Self
    }

    /// Count non-blank lines until `read_line` reports end of input.
    pub fn count_reader<R: BufRead>(mut reader: R) -> std::io::Result<usize> {
        let mut count = 0;
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            if is_non_blank(&line) {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl LineCounter for StreamingLineCounter {
    fn count_file(&self, path: &Path) -> Result<LineCount> {
        let reader = FileReader::open_buffered(path).map_err(|e| InfrastructureError::from_read(path, e))?;
        let count = Self::count_reader(reader).map_err(|e| InfrastructureError::from_read(path, e))?;
        Ok(LineCount::new(count))
    }
}
