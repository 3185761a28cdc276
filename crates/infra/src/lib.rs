// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod filesystem;
pub mod normalizer;
pub mod persistence;
pub mod report;

pub use counter::StreamingLineCounter;
pub use filesystem::FsTreeWalker;
pub use normalizer::TabNormalizer;
pub use report::LineReport;
