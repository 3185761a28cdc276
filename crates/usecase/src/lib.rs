//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate drives a [`TreeWalker`](srcsweep_ports::filesystem::TreeWalker)
//! with the per-file operations of each sweep:
//!
//! - [`normalize`]: Expand tabs in every matching file of every member root
//! - [`count`]: Count non-blank lines of one tree and report them per directory
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod count;
pub mod dto;
pub mod normalize;

pub use count::CountTree;
pub use dto::RunOutcome;
pub use normalize::NormalizeMembers;
