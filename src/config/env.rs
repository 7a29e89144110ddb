use crate::config::ProxyConfig;
use crate::domain::model::Category;
use crate::utils::error::{ProxyError, Result};

pub const ENV_BASE_URL: &str = "SWAPI_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "SWAPI_TIMEOUT_SECS";
pub const ENV_SERVE_PAGE: &str = "SWAPI_SERVE_PAGE";
pub const ENV_ALLOWED_CATEGORIES: &str = "SWAPI_ALLOWED_CATEGORIES";

impl ProxyConfig {
    /// 預設值 + 環境變數覆寫 (Lambda 部署用)
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs =
                raw.trim()
                    .parse()
                    .map_err(|_| ProxyError::InvalidConfigValueError {
                        field: ENV_TIMEOUT_SECS.to_string(),
                        value: raw.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
        }

        if let Some(raw) = lookup(ENV_SERVE_PAGE) {
            self.serve_page = parse_bool(ENV_SERVE_PAGE, &raw)?;
        }

        if let Some(raw) = lookup(ENV_ALLOWED_CATEGORIES) {
            self.allowed_categories = parse_category_list(ENV_ALLOWED_CATEGORIES, &raw)?;
        }

        Ok(self)
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProxyError::InvalidConfigValueError {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Expected true or false".to_string(),
        }),
    }
}

pub fn parse_category_list(field: &str, raw: &str) -> Result<Vec<Category>> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<Category>()
                .map_err(|_| ProxyError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: name.to_string(),
                    reason: "Unknown category".to_string(),
                })
        })
        .collect()
}
