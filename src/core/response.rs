use crate::domain::model::Record;
use serde::Serialize;

/// Front-end served when no category is requested.
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const MAX_AGE: &str = "Access-Control-Max-Age";

pub const MSG_INVALID_CATEGORY: &str = "Categoria obrigatória ou inválida.";
pub const MSG_UPSTREAM_FAILURE: &str = "Falha ao obter dados da SWAPI";
pub const MSG_SUCCESS: &str = "Dados recuperados com sucesso";
pub const USAGE_EXAMPLE: &str = "?category=people&search=luke";

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub count: usize,
    pub results: Vec<Record>,
}

/// Transport-neutral response produced by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    pub fn preflight() -> Self {
        Self {
            status: 204,
            headers: vec![
                (ALLOW_ORIGIN.to_string(), "*".to_string()),
                (ALLOW_METHODS.to_string(), "GET".to_string()),
                (ALLOW_HEADERS.to_string(), "Content-Type".to_string()),
                (MAX_AGE.to_string(), "3600".to_string()),
            ],
            body: String::new(),
        }
    }

    pub fn html(page: &str) -> Self {
        Self::with_cors(200, CONTENT_TYPE_HTML, page.to_string())
    }

    pub fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self::with_cors(status, CONTENT_TYPE_JSON, body),
            Err(e) => {
                // 仍需回應合法 JSON
                tracing::error!("Failed to serialize response body: {}", e);
                Self::with_cors(
                    500,
                    CONTENT_TYPE_JSON,
                    r#"{"error":"Internal serialization error"}"#.to_string(),
                )
            }
        }
    }

    fn with_cors(status: u16, content_type: &str, body: String) -> Self {
        Self {
            status,
            headers: vec![
                (ALLOW_ORIGIN.to_string(), "*".to_string()),
                ("Content-Type".to_string(), content_type.to_string()),
            ],
            body,
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
