pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::age::{FixedAgeSource, ScriptedAgeSource};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{engine::FareEngine, pricing::compute_price};
pub use crate::utils::error::{FareError, Result};
