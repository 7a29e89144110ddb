pub mod handler;
pub mod response;
pub mod sort;

pub use crate::domain::model::{CatalogPage, Category, Query, Record};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
pub use handler::{ApiRequest, RequestHandler};
pub use response::ApiResponse;
