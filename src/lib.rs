pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::BatchConfig;
pub use crate::core::builder::build_profile;
pub use crate::core::engine::ProfileEngine;
pub use domain::model::{LookupTables, Profile, Subject};
pub use utils::error::{ProfileError, Result};
