// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    fs,
    io,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use srcsweep_domain::ExtensionFilter;
use srcsweep_ports::filesystem::{Failure, TreeVisitor, TreeWalker, WalkReport};
use srcsweep_shared_kernel::{InfrastructureError, Result, SweepError};

/// Depth-first walker over the local filesystem.
///
/// Symbolic links are never followed: a link, like any other entry that is
/// neither a directory nor a regular file, is counted as skipped. Each
/// directory is entered at most once per walk, keyed by device and inode
/// on Unix and by canonical path elsewhere.
#[derive(Debug, Clone, Default)]
pub struct FsTreeWalker {
    filter: ExtensionFilter,
}

impl FsTreeWalker {
    pub fn new(filter: ExtensionFilter) -> Self {
        Self { filter }
    }
}

impl TreeWalker for FsTreeWalker {
    fn walk<V>(&self, root: &Path, visitor: &mut V) -> Result<WalkReport<V::Output>>
    where
        V: TreeVisitor + ?Sized,
    {
        check_root(root)?;

        let mut walk = Walk { filter: &self.filter, visited: HashSet::new(), report: WalkReport::default() };
        let total = walk.dir(root, visitor)?;
        walk.report.total = total;
        Ok(walk.report)
    }
}

fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InfrastructureError::PathNotFound { path: root.to_path_buf() },
        _ => InfrastructureError::DirectoryRead { path: root.to_path_buf(), source },
    })?;
    if !metadata.is_dir() {
        return Err(InfrastructureError::NotADirectory { path: root.to_path_buf() }.into());
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum DirKey {
    #[cfg_attr(not(unix), allow(dead_code))]
    Inode(u64, u64),
    Path(PathBuf),
}

fn dir_key(dir: &Path) -> DirKey {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        if let Ok(meta) = fs::metadata(dir) {
            return DirKey::Inode(meta.dev(), meta.ino());
        }
    }
    DirKey::Path(fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()))
}

struct Walk<'a, T> {
    filter: &'a ExtensionFilter,
    visited: HashSet<DirKey>,
    report: WalkReport<T>,
}

impl<T> Walk<'_, T> {
    fn dir<V>(&mut self, dir: &Path, visitor: &mut V) -> Result<T>
    where
        V: TreeVisitor<Output = T> + ?Sized,
        T: Default + std::ops::Add<Output = T>,
    {
        let mut total = T::default();

        if !self.first_visit(dir) {
            self.absorb(dir, InfrastructureError::Cycle { path: dir.to_path_buf() }.into())?;
            return Ok(total);
        }
        self.report.dirs += 1;

        if let Err(err) = visitor.enter_dir(dir) {
            self.absorb(dir, err)?;
        }

        // List the directory up front: visitors may rename files inside it.
        let entries = match fs::read_dir(dir).and_then(|listing| listing.collect::<io::Result<Vec<_>>>()) {
            Ok(entries) => entries,
            Err(source) => {
                self.absorb(dir, InfrastructureError::DirectoryRead { path: dir.to_path_buf(), source }.into())?;
                return Ok(total);
            }
        };

        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    self.absorb(&path, InfrastructureError::DirectoryRead { path: path.clone(), source }.into())?;
                    continue;
                }
            };

            if file_type.is_dir() {
                total = total + self.dir(&path, visitor)?;
            } else if file_type.is_file() {
                if !self.filter.matches(&entry.file_name()) {
                    continue;
                }
                self.report.files += 1;
                match visitor.visit_file(&path) {
                    Ok(output) => total = total + output,
                    Err(err) => self.absorb(&path, err)?,
                }
            } else {
                self.report.skipped += 1;
                debug!("skipping {}: not a regular file or directory", path.display());
            }
        }

        Ok(total)
    }

    fn first_visit(&mut self, dir: &Path) -> bool {
        self.visited.insert(dir_key(dir))
    }

    /// Record a non-fatal failure and keep walking; fatal ones end the walk.
    fn absorb(&mut self, path: &Path, error: SweepError) -> Result<()> {
        if error.is_fatal() {
            return Err(error);
        }
        warn!("{error}");
        self.report.failures.push(Failure::new(path, error));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use srcsweep_shared_kernel::LineCount;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        dirs: Vec<PathBuf>,
        files: BTreeSet<PathBuf>,
        fail_on: Option<&'static str>,
    }

    impl TreeVisitor for Recorder {
        type Output = LineCount;

        fn enter_dir(&mut self, path: &Path) -> Result<()> {
            self.dirs.push(path.to_path_buf());
            Ok(())
        }

        fn visit_file(&mut self, path: &Path) -> Result<LineCount> {
            if self.fail_on.is_some_and(|name| path.ends_with(name)) {
                return Err(InfrastructureError::Encoding { path: path.to_path_buf() }.into());
            }
            self.files.insert(path.to_path_buf());
            Ok(LineCount::new(1))
        }
    }

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("a.rs"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "n").unwrap();
        fs::write(dir.path().join("sub/b.rs"), "b").unwrap();
        fs::write(dir.path().join("sub/b.rs.bak"), "b").unwrap();
        fs::write(dir.path().join("sub/deeper/c.rs"), "c").unwrap();
        dir
    }

    #[test]
    fn visits_matching_files_once_and_every_directory() {
        let dir = tree();
        let walker = FsTreeWalker::default();
        let mut recorder = Recorder::default();

        let report = walker.walk(dir.path(), &mut recorder).unwrap();

        assert_eq!(report.total, LineCount::new(3));
        assert_eq!(report.files, 3);
        assert_eq!(report.dirs, 4);
        assert!(report.is_clean());
        assert_eq!(recorder.dirs.first().map(PathBuf::as_path), Some(dir.path()));
        assert_eq!(recorder.files.len(), 3);
        assert!(!recorder.files.iter().any(|p| p.ends_with("b.rs.bak")));
    }

    #[test]
    fn file_failures_are_recorded_and_walk_continues() {
        let dir = tree();
        let mut recorder = Recorder { fail_on: Some("b.rs"), ..Recorder::default() };

        let report = FsTreeWalker::default().walk(dir.path(), &mut recorder).unwrap();

        assert_eq!(report.total, LineCount::new(2));
        assert_eq!(report.files, 3);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].path.ends_with("sub/b.rs"));
    }

    #[test]
    fn fatal_visitor_errors_stop_the_walk() {
        struct Broken;
        impl TreeVisitor for Broken {
            type Output = LineCount;

            fn enter_dir(&mut self, _path: &Path) -> Result<()> {
                Err(InfrastructureError::ReportWrite { source: io::Error::from(io::ErrorKind::BrokenPipe) }.into())
            }

            fn visit_file(&mut self, _path: &Path) -> Result<LineCount> {
                Ok(LineCount::zero())
            }
        }

        let dir = tree();
        let err = FsTreeWalker::default().walk(dir.path(), &mut Broken).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn missing_root_is_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsTreeWalker::default().walk(&dir.path().join("nl"), &mut Recorder::default()).unwrap_err();
        assert!(matches!(err, SweepError::Infrastructure(InfrastructureError::PathNotFound { .. })));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let dir = tree();
        let err = FsTreeWalker::default().walk(&dir.path().join("a.rs"), &mut Recorder::default()).unwrap_err();
        assert!(matches!(err, SweepError::Infrastructure(InfrastructureError::NotADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_skipped_not_followed() {
        let dir = tree();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("a.rs"), dir.path().join("link.rs")).unwrap();

        let report = FsTreeWalker::default().walk(dir.path(), &mut Recorder::default()).unwrap();

        assert_eq!(report.total, LineCount::new(3));
        assert_eq!(report.skipped, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn directories_are_entered_once() {
        let dir = tree();
        let filter = ExtensionFilter::default();
        let mut walk = Walk::<LineCount> { filter: &filter, visited: HashSet::new(), report: WalkReport::default() };
        let mut recorder = Recorder::default();

        assert_eq!(walk.dir(dir.path(), &mut recorder).unwrap(), LineCount::new(3));
        assert_eq!(walk.dir(&dir.path().join("sub"), &mut recorder).unwrap(), LineCount::zero());
        assert!(matches!(
            walk.report.failures[0].error,
            SweepError::Infrastructure(InfrastructureError::Cycle { .. })
        ));
    }
}
