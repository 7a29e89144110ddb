#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use swapi_proxy::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use swapi_proxy::{
    ApiRequest, GatewayRequest, GatewayResponse, ProxyConfig, RequestHandler, SwapiClient,
};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &RequestHandler<SwapiClient>,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    let request = ApiRequest::from(event.payload);
    tracing::info!(
        request_id = %event.context.request_id,
        method = %request.method,
        "Handling request"
    );

    let response = handler.handle(&request).await;

    tracing::info!(status = response.status, "Request completed");
    Ok(GatewayResponse::from(response))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 配置來自環境變數，冷啟動時建立一次
    let config = ProxyConfig::from_env()?;
    config.validate()?;

    let client = SwapiClient::new(&config)?;
    let handler = RequestHandler::new(client, config);

    run(service_fn(|event: LambdaEvent<GatewayRequest>| {
        function_handler(&handler, event)
    }))
    .await
}
