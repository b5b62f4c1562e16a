#[cfg(feature = "cli")]
pub mod cli;
pub mod menu_config;
pub mod model;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use menu_config::MenuConfig;
pub use model::ModelConfig;

use crate::core::menu_agent::ImageFailurePolicy;

pub trait ConfigProvider: Send + Sync {
    fn item(&self) -> &str;
    fn preview_dir(&self) -> Option<&str>;
    fn image_failure_policy(&self) -> ImageFailurePolicy;
    fn transcript_path(&self) -> Option<&str>;
    fn model(&self) -> &ModelConfig;
}
