use crate::domain::model::{CatalogPage, Category};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the handler gets its data from. The production implementation is
/// [`crate::adapters::swapi::SwapiClient`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, category: Category, search: Option<&str>) -> Result<CatalogPage>;
}
