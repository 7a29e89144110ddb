// 本機開發用 HTTP 伺服器
// 每個連線一個 task，所有路徑都交給同一個 handler

use crate::core::{ApiRequest, ApiResponse, CatalogSource, RequestHandler};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bind `addr` and serve until the process is stopped.
pub async fn serve<S>(addr: SocketAddr, handler: Arc<RequestHandler<S>>) -> std::io::Result<()>
where
    S: CatalogSource + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    run(listener, handler).await
}

/// Accept loop over an already-bound listener.
pub async fn run<S>(listener: TcpListener, handler: Arc<RequestHandler<S>>) -> std::io::Result<()>
where
    S: CatalogSource + 'static,
{
    loop {
        let (stream, peer_addr) = listener.accept().await?;
        tracing::debug!("Accepting connection from {}", peer_addr);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let io = TokioIo::new(stream);
            let service = service_fn(move |req| {
                let handler = Arc::clone(&handler);
                async move { Ok::<_, Infallible>(handle_hyper_request(&handler, req).await) }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                tracing::warn!("Connection error from {}: {}", peer_addr, err);
            }
        });
    }
}

async fn handle_hyper_request<S: CatalogSource>(
    handler: &RequestHandler<S>,
    req: Request<Incoming>,
) -> Response<Full<Bytes>> {
    let request = to_api_request(&req);
    tracing::info!("{} {}", req.method(), req.uri());
    to_hyper_response(handler.handle(&request).await)
}

fn to_api_request<B>(req: &Request<B>) -> ApiRequest {
    let query = req
        .uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();

    ApiRequest {
        method: req.method().as_str().to_string(),
        query,
    }
}

fn to_hyper_response(response: ApiResponse) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
        .body(Full::new(Bytes::from(response.body)))
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build response: {}", e);
            let mut fallback = Response::new(Full::new(Bytes::new()));
            *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
