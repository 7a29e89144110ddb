use crate::config::ProxyConfig;
use crate::core::response::{
    ApiResponse, ErrorBody, SuccessBody, INDEX_HTML, MSG_INVALID_CATEGORY, MSG_SUCCESS,
    MSG_UPSTREAM_FAILURE, USAGE_EXAMPLE,
};
use crate::core::sort::sort_records;
use crate::domain::model::{Category, Query};
use crate::domain::ports::CatalogSource;

/// Transport-neutral request: the method and the raw query pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: String,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn get<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            method: "GET".to_string(),
            query: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn options() -> Self {
        Self {
            method: "OPTIONS".to_string(),
            query: Vec::new(),
        }
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case("OPTIONS")
    }
}

pub struct RequestHandler<S: CatalogSource> {
    source: S,
    config: ProxyConfig,
}

impl<S: CatalogSource> RequestHandler<S> {
    pub fn new(source: S, config: ProxyConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Always produces a response; upstream failures become 502.
    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        if request.is_preflight() {
            return ApiResponse::preflight();
        }

        let query = Query::from_pairs(request.query.iter().map(|(k, v)| (k, v.clone())));
        tracing::debug!("Handling {} {:?}", request.method, query);

        let category = match query.category.as_deref() {
            None if self.config.serve_page => return ApiResponse::html(INDEX_HTML),
            None => return self.invalid_category(),
            Some(raw) => match raw.parse::<Category>() {
                Ok(category) if self.config.is_allowed(category) => category,
                _ => {
                    tracing::info!("Rejected category '{}'", raw);
                    return self.invalid_category();
                }
            },
        };

        let page = match self.source.fetch(category, query.search.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Upstream fetch for {} failed: {}", category, e);
                return ApiResponse::json(
                    502,
                    &ErrorBody {
                        error: MSG_UPSTREAM_FAILURE.to_string(),
                        options: None,
                        example: None,
                    },
                );
            }
        };

        let mut results = page.results;
        if query.sort && !results.is_empty() {
            sort_records(&mut results, category.sort_key());
        }

        tracing::info!("Returning {} {} records", results.len(), category);
        ApiResponse::json(
            200,
            &SuccessBody {
                message: MSG_SUCCESS.to_string(),
                category: Some(category.to_string()),
                count: results.len(),
                results,
            },
        )
    }

    fn invalid_category(&self) -> ApiResponse {
        ApiResponse::json(
            400,
            &ErrorBody {
                error: MSG_INVALID_CATEGORY.to_string(),
                options: Some(self.config.allowed_names()),
                example: Some(USAGE_EXAMPLE.to_string()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CatalogPage, Record};
    use crate::utils::error::{ProxyError, Result};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockSource {
        results: Vec<Record>,
        fail: bool,
        calls: Arc<Mutex<Vec<(Category, Option<String>)>>>,
    }

    impl MockSource {
        fn with_results(results: Value) -> Self {
            Self {
                results: serde_json::from_value(results).unwrap(),
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(Category, Option<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CatalogSource for MockSource {
        async fn fetch(&self, category: Category, search: Option<&str>) -> Result<CatalogPage> {
            self.calls
                .lock()
                .unwrap()
                .push((category, search.map(str::to_string)));
            if self.fail {
                return Err(ProxyError::UpstreamStatus {
                    url: "http://mock".to_string(),
                    status: 500,
                });
            }
            Ok(CatalogPage {
                results: self.results.clone(),
                ..CatalogPage::default()
            })
        }
    }

    fn body(response: &ApiResponse) -> Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[tokio::test]
    async fn test_preflight_skips_everything() {
        let source = MockSource::default();
        let handler = RequestHandler::new(source.clone(), ProxyConfig::default());

        let response = handler.handle(&ApiRequest::options()).await;

        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_category_serves_page() {
        let handler = RequestHandler::new(MockSource::default(), ProxyConfig::default());

        let response = handler.handle(&ApiRequest::get(Vec::<(String, String)>::new())).await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body, INDEX_HTML);
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
    }

    #[tokio::test]
    async fn test_missing_category_json_only_is_400() {
        let config = ProxyConfig {
            serve_page: false,
            ..ProxyConfig::default()
        };
        let handler = RequestHandler::new(MockSource::default(), config);

        let response = handler.handle(&ApiRequest::get([("search", "luke")])).await;

        assert_eq!(response.status, 400);
        assert_eq!(body(&response)["error"], MSG_INVALID_CATEGORY);
    }

    #[tokio::test]
    async fn test_invalid_category_lists_options() {
        let source = MockSource::default();
        let handler = RequestHandler::new(source.clone(), ProxyConfig::default());

        let response = handler.handle(&ApiRequest::get([("category", "wookiee")])).await;

        assert_eq!(response.status, 400);
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        let body = body(&response);
        assert_eq!(
            body["options"],
            json!(["people", "films", "starships", "planets", "species", "vehicles"])
        );
        assert_eq!(body["example"], USAGE_EXAMPLE);
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_category_outside_configured_allow_list() {
        let source = MockSource::default();
        let config = ProxyConfig {
            allowed_categories: vec![Category::Films],
            ..ProxyConfig::default()
        };
        let handler = RequestHandler::new(source.clone(), config);

        let response = handler.handle(&ApiRequest::get([("category", "people")])).await;

        assert_eq!(response.status, 400);
        assert_eq!(body(&response)["options"], json!(["films"]));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_502() {
        let handler = RequestHandler::new(MockSource::failing(), ProxyConfig::default());

        let response = handler.handle(&ApiRequest::get([("category", "people")])).await;

        assert_eq!(response.status, 502);
        assert_eq!(body(&response), json!({"error": MSG_UPSTREAM_FAILURE}));
    }

    #[tokio::test]
    async fn test_search_is_forwarded() {
        let source = MockSource::with_results(json!([{"name": "Luke Skywalker"}]));
        let handler = RequestHandler::new(source.clone(), ProxyConfig::default());

        let response = handler
            .handle(&ApiRequest::get([("category", "people"), ("search", "luke")]))
            .await;

        assert_eq!(response.status, 200);
        assert_eq!(
            source.calls(),
            vec![(Category::People, Some("luke".to_string()))]
        );
        let body = body(&response);
        assert_eq!(body["message"], MSG_SUCCESS);
        assert_eq!(body["category"], "people");
        assert_eq!(body["count"], 1);
    }

    #[tokio::test]
    async fn test_films_sorted_by_title() {
        let source = MockSource::with_results(json!([
            {"title": "Return of the Jedi"},
            {"title": "A New Hope"},
            {"title": "The Empire Strikes Back"}
        ]));
        let handler = RequestHandler::new(source, ProxyConfig::default());

        let response = handler
            .handle(&ApiRequest::get([("category", "films"), ("sort", "")]))
            .await;

        let body = body(&response);
        let titles: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["title"].as_str().unwrap())
            .collect();
        assert_eq!(
            titles,
            vec!["A New Hope", "Return of the Jedi", "The Empire Strikes Back"]
        );
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn test_unsorted_without_flag() {
        let source = MockSource::with_results(json!([{"name": "Zeta"}, {"name": "Alpha"}]));
        let handler = RequestHandler::new(source, ProxyConfig::default());

        let response = handler.handle(&ApiRequest::get([("category", "species")])).await;

        let body = body(&response);
        assert_eq!(body["results"][0]["name"], "Zeta");
        assert_eq!(body["results"][1]["name"], "Alpha");
    }

    #[tokio::test]
    async fn test_repeated_requests_identical() {
        let source = MockSource::with_results(json!([{"name": "X-wing"}, {"name": "A-wing"}]));
        let handler = RequestHandler::new(source, ProxyConfig::default());
        let request = ApiRequest::get([("category", "starships"), ("sort", "1")]);

        let first = handler.handle(&request).await;
        let second = handler.handle(&request).await;

        assert_eq!(first, second);
    }
}
