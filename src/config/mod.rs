#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::Cli;

use crate::domain::model::Category;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Immutable settings shared by the fetch client and the request handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub allowed_categories: Vec<Category>,
    /// `false` gives a JSON-only deployment: a missing category is a 400.
    pub serve_page: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            allowed_categories: Category::ALL.to_vec(),
            serve_page: true,
        }
    }
}

impl ProxyConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_allowed(&self, category: Category) -> bool {
        self.allowed_categories.contains(&category)
    }

    pub fn allowed_names(&self) -> Vec<&'static str> {
        self.allowed_categories.iter().map(Category::as_str).collect()
    }
}

impl Validate for ProxyConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 60)?;
        validate_non_empty_list("allowed_categories", &self.allowed_categories)?;

        tracing::debug!("Proxy configuration validation passed");
        Ok(())
    }
}
