pub mod extension_filter;
pub mod root_set;
pub mod tab_width;

pub use extension_filter::ExtensionFilter;
pub use root_set::RootSet;
pub use tab_width::TabWidth;
