use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::fmt;
use url::Url;

pub const MODEL_ENV: &str = "AZURE_CHATGPT_MODEL";
pub const API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
pub const ENDPOINT_ENV: &str = "AZURE_OPENAI_ENDPOINT";
pub const API_VERSION_ENV: &str = "AZURE_OPENAI_API_VERSION";

/// Chat-completion service settings. Read once at startup and handed to
/// whoever talks to the model service; the order flow itself never does.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct ModelConfig {
    /// Model deployment name
    #[cfg_attr(feature = "cli", arg(long = "model", env = "AZURE_CHATGPT_MODEL"))]
    pub model: Option<String>,

    /// Model service API key
    #[cfg_attr(feature = "cli", arg(long = "api-key", env = "AZURE_OPENAI_API_KEY", hide_env_values = true))]
    pub api_key: Option<String>,

    /// Model service endpoint
    #[cfg_attr(feature = "cli", arg(long = "model-endpoint", env = "AZURE_OPENAI_ENDPOINT"))]
    pub endpoint: Option<String>,

    /// Model service API version
    #[cfg_attr(feature = "cli", arg(long = "api-version", env = "AZURE_OPENAI_API_VERSION"))]
    pub api_version: Option<String>,
}

impl ModelConfig {
    pub fn is_configured(&self) -> bool {
        self.model.is_some() && self.api_key.is_some() && self.endpoint.is_some()
    }

    /// Azure-style deployment URL for chat completions.
    pub fn chat_completions_url(&self) -> Result<Url> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| OrderError::MissingConfigError {
                field: ENDPOINT_ENV.to_string(),
            })?;
        let model = self
            .model
            .as_deref()
            .ok_or_else(|| OrderError::MissingConfigError {
                field: MODEL_ENV.to_string(),
            })?;

        let base = Url::parse(endpoint).map_err(|e| OrderError::InvalidConfigValueError {
            field: ENDPOINT_ENV.to_string(),
            value: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        let mut url = base
            .join(&format!("openai/deployments/{}/chat/completions", model))
            .map_err(|e| OrderError::InvalidConfigValueError {
                field: MODEL_ENV.to_string(),
                value: model.to_string(),
                reason: e.to_string(),
            })?;

        if let Some(version) = &self.api_version {
            url.query_pairs_mut().append_pair("api-version", version);
        }
        Ok(url)
    }
}

impl Validate for ModelConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url(ENDPOINT_ENV, endpoint)?;
        }
        if let Some(model) = &self.model {
            validate_non_empty_string(MODEL_ENV, model)?;
        }
        if let Some(version) = &self.api_version {
            validate_non_empty_string(API_VERSION_ENV, version)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .finish()
    }
}
