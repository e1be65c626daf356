pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::ConfigMap;
pub use core::directory::{Directory, API_VERSION, MAX_RECORDS};
pub use domain::{model::Record, ports::RecordSource};
pub use utils::error::{DirectoryError, Result};
