use clap::Parser;
use std::sync::Arc;
use swapi_proxy::adapters::server;
use swapi_proxy::config::cli::Command;
use swapi_proxy::utils::{logger, validation::Validate};
use swapi_proxy::{ApiRequest, Cli, RequestHandler, SwapiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting swapi-proxy CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    // 組合並驗證配置
    let config = cli.proxy_config()?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = SwapiClient::new(&config)?;
    let handler = RequestHandler::new(client, config);

    match cli.command {
        Command::Serve { addr } => {
            server::serve(addr, Arc::new(handler)).await?;
        }
        Command::Invoke {
            category,
            search,
            sort,
        } => {
            let mut query = Vec::new();
            if let Some(category) = category {
                query.push(("category", category));
            }
            if let Some(search) = search {
                query.push(("search", search));
            }
            if sort {
                query.push(("sort", String::new()));
            }

            let response = handler.handle(&ApiRequest::get(query)).await;
            println!("HTTP {}", response.status);
            for (name, value) in &response.headers {
                println!("{}: {}", name, value);
            }
            println!();
            println!("{}", response.body);
        }
    }

    Ok(())
}
