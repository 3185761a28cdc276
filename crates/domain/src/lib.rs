//! # Domain
//!
//! Pure rules for the two sweeps: which files are selected
//! ([`config::ExtensionFilter`]), how tabs are expanded and which lines
//! count ([`text`]), and the run configuration handed to the use cases.
//!
//! Nothing in this crate touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod text;

pub use config::{CountConfig, ExtensionFilter, NormalizeConfig, RootSet, TabWidth};
pub use text::{count_tabs, expand_tabs, is_non_blank};
