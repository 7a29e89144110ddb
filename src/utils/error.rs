use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("Upstream request to {url} timed out after {seconds}s")]
    UpstreamTimeout { url: String, seconds: u64 },

    #[error("Upstream {url} returned status {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Malformed upstream body from {url}: {message}")]
    MalformedBody { url: String, message: String },

    #[error("Invalid category: {value}")]
    InvalidCategory { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProxyError {
    /// 上游 (SWAPI) 相關的失敗，對呼叫端一律回 502
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ProxyError::UpstreamRequest(_)
                | ProxyError::UpstreamTimeout { .. }
                | ProxyError::UpstreamStatus { .. }
                | ProxyError::MalformedBody { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_classification() {
        let timeout = ProxyError::UpstreamTimeout {
            url: "https://swapi.dev/api/people/".to_string(),
            seconds: 10,
        };
        assert!(timeout.is_upstream());
        assert!(timeout.to_string().contains("10s"));

        let config = ProxyError::ConfigError {
            message: "missing".to_string(),
        };
        assert!(!config.is_upstream());
        assert!(!ProxyError::InvalidCategory {
            value: "wookiee".to_string()
        }
        .is_upstream());
    }
}
