use crate::config::env::parse_category_list;
use crate::config::ProxyConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "swapi-proxy")]
#[command(about = "Star Wars API proxy with optional sorting and a bundled front-end")]
pub struct Cli {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Upstream SWAPI base URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Upstream request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(
        long,
        global = true,
        help = "Comma-separated category allow-list (default: all)"
    )]
    pub categories: Option<String>,

    #[arg(long, global = true, help = "Answer requests without a category with 400")]
    pub json_only: bool,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a local HTTP server that answers like the deployed function
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        addr: SocketAddr,
    },
    /// Handle a single request and print the response
    Invoke {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long)]
        sort: bool,
    },
}

impl Cli {
    /// 組合配置：預設值 → TOML 檔案 → 環境變數 → 命令列參數
    pub fn proxy_config(&self) -> Result<ProxyConfig> {
        let base = match &self.config {
            Some(path) => ProxyConfig::from_file(path)?,
            None => ProxyConfig::default(),
        };

        let mut config = base.with_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
        if let Some(categories) = &self.categories {
            config.allowed_categories = parse_category_list("categories", categories)?;
        }
        if self.json_only {
            config.serve_page = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;

    #[test]
    fn test_parse_invoke() {
        let cli = Cli::parse_from([
            "swapi-proxy",
            "invoke",
            "--category",
            "films",
            "--sort",
            "--timeout-secs",
            "3",
        ]);

        match &cli.command {
            Command::Invoke {
                category,
                search,
                sort,
            } => {
                assert_eq!(category.as_deref(), Some("films"));
                assert!(search.is_none());
                assert!(*sort);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.timeout_secs, Some(3));
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "swapi-proxy",
            "--base-url",
            "http://localhost:7000/api",
            "--categories",
            "people,planets",
            "--json-only",
            "serve",
        ]);

        let config = cli.proxy_config().unwrap();
        assert_eq!(config.base_url, "http://localhost:7000/api");
        assert_eq!(
            config.allowed_categories,
            vec![Category::People, Category::Planets]
        );
        assert!(!config.serve_page);
        assert!(matches!(cli.command, Command::Serve { .. }));
    }
}
