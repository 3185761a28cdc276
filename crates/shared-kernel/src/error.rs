// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SweepError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, SweepError>;

impl SweepError {
    /// Errors that must stop the whole run instead of being recorded per entry.
    ///
    /// Only a broken report stream qualifies: once stdout is gone every
    /// further report line would be lost as well.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_fatal(),
            Self::Infrastructure(InfrastructureError::ReportWrite { .. }) => true,
            _ => false,
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid tab width {value}: must be between {min} and {max}")]
    InvalidTabWidth { value: usize, min: usize, max: usize },

    #[error("Extension suffix must not be empty")]
    EmptySuffix,
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Root '{root}' could not be processed: {source}")]
    RootFailed {
        root: PathBuf,
        #[source]
        source: Box<SweepError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Path not found: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 text")]
    Encoding { path: PathBuf },

    #[error("Directory '{path}' was already visited (filesystem cycle)")]
    Cycle { path: PathBuf },

    #[error("Failed to write report: {source}")]
    ReportWrite {
        #[source]
        source: std::io::Error,
    },
}

impl InfrastructureError {
    /// Classify a read failure, separating undecodable content from plain I/O.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::Encoding { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SweepError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SweepError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SweepError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
