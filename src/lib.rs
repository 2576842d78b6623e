pub mod adapters;
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::HttpRecordSource;
pub use crate::core::engine::{IntegrationEngine, IntegrationReport};
pub use crate::utils::error::{IntegrationError, Result};
