use crate::config::menu_config::MenuConfig;
use crate::config::model::ModelConfig;
use crate::config::ConfigProvider;
use crate::core::menu_agent::ImageFailurePolicy;
use crate::domain::catalog::Catalog;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-order")]
#[command(about = "Walks a customer through ordering from the pizza menu")]
pub struct CliConfig {
    /// Menu item the customer asks for
    #[arg(default_value = "pepperoni")]
    pub item: String,

    /// TOML file replacing the built-in menu
    #[arg(long)]
    pub menu_file: Option<String>,

    /// Directory where resized menu pictures are saved
    #[arg(long)]
    pub preview_dir: Option<String>,

    /// What to do when a menu picture cannot be downloaded or decoded
    #[arg(long, value_enum, default_value_t = ImageFailurePolicy::Abort)]
    pub on_image_error: ImageFailurePolicy,

    /// Write the conversation as JSON to this file
    #[arg(long)]
    pub transcript_path: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(flatten)]
    pub model: ModelConfig,
}

impl CliConfig {
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.menu_file {
            Some(path) => {
                tracing::info!("📁 Loading menu from: {}", path);
                MenuConfig::from_file(path)?.into_catalog()
            }
            None => Ok(Catalog::default()),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn item(&self) -> &str {
        &self.item
    }

    fn preview_dir(&self) -> Option<&str> {
        self.preview_dir.as_deref()
    }

    fn image_failure_policy(&self) -> ImageFailurePolicy {
        self.on_image_error
    }

    fn transcript_path(&self) -> Option<&str> {
        self.transcript_path.as_deref()
    }

    fn model(&self) -> &ModelConfig {
        &self.model
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.menu_file {
            validate_path("menu_file", path)?;
        }
        if let Some(dir) = &self.preview_dir {
            validate_path("preview_dir", dir)?;
        }
        if let Some(path) = &self.transcript_path {
            validate_path("transcript_path", path)?;
        }
        self.model.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::config::model::{API_KEY_ENV, API_VERSION_ENV, ENDPOINT_ENV, MODEL_ENV};

    /// Parses without picking up model settings from the developer's shell.
    fn parse(args: &[&str]) -> CliConfig {
        for var in [MODEL_ENV, API_KEY_ENV, ENDPOINT_ENV, API_VERSION_ENV] {
            std::env::remove_var(var);
        }
        CliConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["restaurant-order"]);
        assert_eq!(config.item, "pepperoni");
        assert_eq!(config.on_image_error, ImageFailurePolicy::Abort);
        assert!(config.preview_dir.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.load_catalog().unwrap().len(), 2);
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "restaurant-order",
            "margherita",
            "--on-image-error",
            "text-only",
            "--preview-dir",
            "previews",
            "--model-endpoint",
            "https://example.openai.azure.com/",
        ]);

        assert_eq!(config.item(), "margherita");
        assert_eq!(config.image_failure_policy(), ImageFailurePolicy::TextOnly);
        assert_eq!(config.preview_dir(), Some("previews"));
        assert_eq!(
            config.model().endpoint.as_deref(),
            Some("https://example.openai.azure.com/")
        );
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_blank_item_is_answered_with_the_menu() {
        let config = parse(&["restaurant-order", " "]);
        assert!(config.validate().is_ok());

        let mut out = Vec::new();
        let outcome = app::run_order(&config, config.load_catalog().unwrap(), &mut out)
            .await
            .unwrap();

        assert!(!outcome.is_completed());
        assert_eq!(
            outcome.transcript[1].text,
            "Sorry,   is not available. Here's our menu: margherita, pepperoni"
        );
    }

    #[test]
    fn test_missing_menu_file() {
        let config = parse(&["restaurant-order", "--menu-file", "/nonexistent/menu.toml"]);
        assert!(config.load_catalog().is_err());
    }
}
