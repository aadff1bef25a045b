pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{toml_config::FileConfig, Settings};

pub use crate::adapters::{PromptConfirmer, SystemRunner};
pub use crate::core::broadcast::BroadcastEngine;
pub use crate::domain::model::{LaunchCommand, LaunchOutcome, RunOutcome, Tool};
pub use crate::utils::error::{BcastError, Result};
