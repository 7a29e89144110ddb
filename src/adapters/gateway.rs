//! API Gateway / Lambda function URL proxy event shapes.
//!
//! REST APIs (payload v1) send `httpMethod` and `queryStringParameters`;
//! HTTP APIs and function URLs (payload v2) send `requestContext.http.method`
//! and `rawQueryString`. Both are accepted.

use crate::core::{ApiRequest, ApiResponse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub raw_query_string: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpContext {
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    pub fn method(&self) -> &str {
        self.http_method
            .as_deref()
            .or_else(|| {
                self.request_context
                    .as_ref()
                    .and_then(|ctx| ctx.http.as_ref())
                    .map(|http| http.method.as_str())
            })
            .unwrap_or("GET")
    }
}

impl From<GatewayRequest> for ApiRequest {
    fn from(event: GatewayRequest) -> Self {
        let method = event.method().to_string();

        let query = match (&event.raw_query_string, event.query_string_parameters) {
            (Some(raw), _) if !raw.is_empty() => url::form_urlencoded::parse(raw.as_bytes())
                .into_owned()
                .collect(),
            (_, Some(params)) => params.into_iter().collect(),
            _ => Vec::new(),
        };

        ApiRequest { method, query }
    }
}

impl From<ApiResponse> for GatewayResponse {
    fn from(response: ApiResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response.headers.into_iter().collect(),
            body: response.body,
            is_base64_encoded: false,
        }
    }
}
