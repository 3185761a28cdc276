//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Recursive directory traversal and its per-entry failures
//! - [`processing`]: The per-file operations a traversal drives
//! - [`report`]: The line-oriented report stream
//!
//! These ports allow the application layer to remain independent of
//! the concrete filesystem and output adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod processing;
pub mod report;
