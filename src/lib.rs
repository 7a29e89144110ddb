pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::Cli;

pub use adapters::gateway::{GatewayRequest, GatewayResponse};
pub use adapters::swapi::SwapiClient;
pub use config::ProxyConfig;
pub use crate::core::{ApiRequest, ApiResponse, RequestHandler};
pub use domain::model::{CatalogPage, Category, Record};
pub use domain::ports::CatalogSource;
pub use utils::error::{ProxyError, Result};
