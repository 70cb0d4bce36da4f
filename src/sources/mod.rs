mod file;
mod http;

pub use file::FileRecipeSource;
pub use http::HttpRecipeSource;

use async_trait::async_trait;

use crate::error::CartError;
use crate::model::{CatalogResponse, Recipe};

/// Anything that can hand out the full recipe catalog
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Short name used in log lines (e.g., "http", "file")
    fn source_name(&self) -> &str;

    /// Retrieve every recipe in the catalog
    async fn fetch_all(&self) -> Result<Vec<Recipe>, CartError>;
}

/// Parse a `{ "meals": [...] }` catalog payload
pub fn parse_catalog(json: &str) -> Result<Vec<Recipe>, CartError> {
    let response: CatalogResponse = serde_json::from_str(json)?;
    Ok(response.into_recipes())
}
