#[cfg(feature = "cli")]
pub mod cli;
pub mod json_config;

pub use json_config::{load_config, parse_config, ConfigMap};
