// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically replace the contents of `path` via a sibling temp file and rename.
    ///
    /// The original permissions are carried over to the replacement. An
    /// existing file must itself be writable: a read-only file, or one the
    /// caller cannot open for writing, fails with `PermissionDenied` even
    /// when its directory would allow the rename. On any error before the
    /// rename the original file is left untouched and the temp file is
    /// removed.
    pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let permissions = match fs::metadata(path) {
            Ok(meta) => {
                ensure_writable(path, &meta)?;
                Some(meta.permissions())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err),
        };

        let mut tmp = tempfile::Builder::new().prefix(".srcsweep.").suffix(".tmp").tempfile_in(parent)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        let _ = tmp.as_file().sync_all();
        if let Some(permissions) = permissions {
            tmp.as_file().set_permissions(permissions)?;
        }

        tmp.persist(path).map_err(|err| err.error)?;

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

fn ensure_writable(path: &Path, meta: &fs::Metadata) -> io::Result<()> {
    if meta.permissions().readonly() {
        return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"));
    }
    // Opening without truncation leaves the contents alone.
    OpenOptions::new().write(true).open(path).map(drop)
}
