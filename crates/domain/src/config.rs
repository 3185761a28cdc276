pub mod aggregates;
pub mod value_objects;

pub use aggregates::{CountConfig, NormalizeConfig};
pub use value_objects::{ExtensionFilter, RootSet, TabWidth};

/// Members of the source tree rewritten by `indent`.
pub const DEFAULT_MEMBERS: &[&str] =
    &["nl/", "ir/", "ir2triple/", "ir2wasm/", "ir2x86/", "ofile/", "syntax/", "wasm/", "x86/"];

/// Suffix selecting the files both sweeps act on.
pub const DEFAULT_SUFFIX: &str = ".rs";

/// Number of spaces a tab expands to.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Root the counting sweep starts from.
pub const DEFAULT_COUNT_ROOT: &str = ".";
