use crate::domain::catalog::Catalog;
use crate::domain::model::MenuItem;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const MAX_PRICE: f64 = 10_000.0;

/// Menu file layout:
///
/// ```toml
/// [[items]]
/// key = "margherita"
/// id = "pizza_001"
/// name = "Margherita Pizza"
/// description = "Classic pizza with tomato sauce, mozzarella, and basil"
/// price = 12.99
/// image_url = "${IMAGE_HOST}/photo-1513104890138-7c749659a591"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub items: Vec<MenuItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub key: String,
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl MenuItemConfig {
    fn price_cents(&self) -> u32 {
        (self.price * 100.0).round() as u32
    }
}

impl MenuConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OrderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_catalog(self) -> Result<Catalog> {
        self.validate()?;
        let items = self
            .items
            .into_iter()
            .map(|item| MenuItem {
                price_cents: item.price_cents(),
                key: item.key,
                id: item.id,
                name: item.name,
                description: item.description,
                image_url: item.image_url,
            })
            .collect();
        Catalog::new(items)
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(OrderError::ConfigValidationError {
                field: "items".to_string(),
                message: "menu must contain at least one item".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (index, item) in self.items.iter().enumerate() {
            let field = |name: &str| format!("items[{}].{}", index, name);

            validate_non_empty_string(&field("key"), &item.key)?;
            // keys name the preview files
            validate_file_name(&field("key"), &item.key)?;
            validate_non_empty_string(&field("name"), &item.name)?;
            validate_url(&field("image_url"), &item.image_url)?;
            validate_range(&field("price"), item.price, 0.0, MAX_PRICE)?;

            if !seen.insert(item.key.to_lowercase()) {
                return Err(OrderError::DuplicateMenuKey {
                    key: item.key.to_lowercase(),
                });
            }
        }

        tracing::debug!("Menu configuration validated ({} items)", self.items.len());
        Ok(())
    }
}
