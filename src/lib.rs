pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ConfigProvider, MenuConfig, ModelConfig};
pub use crate::core::{
    cook_agent::CookAgent,
    flow::{FlowOutcome, OrderFlow},
    menu_agent::{ImageFailurePolicy, Lookup, MenuAgent},
};
pub use domain::catalog::Catalog;
pub use utils::error::{OrderError, Result};
