pub mod config;

pub use config::{CountConfig, NormalizeConfig};
