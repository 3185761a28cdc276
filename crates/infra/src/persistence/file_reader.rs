// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the entire file as UTF-8 text.
    ///
    /// Undecodable content surfaces as `ErrorKind::InvalidData`.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
