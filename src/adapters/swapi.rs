use crate::config::ProxyConfig;
use crate::domain::model::{CatalogPage, Category};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{ProxyError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetch client for the SWAPI list endpoints. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl SwapiClient {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// `<base>/<category>/`, plus `?search=` when the term is non-empty.
    pub fn endpoint(&self, category: Category, search: Option<&str>) -> Result<Url> {
        let raw = format!("{}/{}/", self.base_url, category.as_str());
        let mut url = Url::parse(&raw).map_err(|e| ProxyError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: self.base_url.clone(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if let Some(term) = search.filter(|term| !term.is_empty()) {
            url.query_pairs_mut().append_pair("search", term);
        }

        Ok(url)
    }

    async fn request(&self, url: &Url) -> Result<CatalogPage> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::UpstreamTimeout {
                    url: url.to_string(),
                    seconds: self.timeout_secs,
                }
            } else {
                ProxyError::UpstreamRequest(e)
            }
        })?;

        let status = response.status();
        tracing::debug!("SWAPI response status: {}", status);

        if !status.is_success() {
            return Err(ProxyError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::UpstreamTimeout {
                    url: url.to_string(),
                    seconds: self.timeout_secs,
                }
            } else {
                ProxyError::UpstreamRequest(e)
            }
        })?;

        let malformed = |message: String| ProxyError::MalformedBody {
            url: url.to_string(),
            message,
        };

        // 上游必須回傳 JSON 物件；陣列、null、純量都視為格式錯誤
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(malformed(format!("expected a JSON object, got {}", value)));
        }

        serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for SwapiClient {
    async fn fetch(&self, category: Category, search: Option<&str>) -> Result<CatalogPage> {
        let url = self.endpoint(category, search)?;
        tracing::debug!("Making SWAPI request to: {}", url);

        let result = self.request(&url).await;
        match &result {
            Ok(page) => tracing::debug!(
                count = ?page.count,
                next = ?page.next,
                previous = ?page.previous,
                "SWAPI returned {} records",
                page.results.len()
            ),
            Err(e) => tracing::error!("SWAPI error: {}", e),
        }
        result
    }
}
