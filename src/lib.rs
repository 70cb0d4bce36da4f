pub mod aggregate;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod screen;
pub mod selection;
pub mod sources;

pub use aggregate::{aggregate, format_quantity, parse_quantity, IngredientTotals};
pub use builder::{CatalogLocation, RecipeSourceBuilder};
pub use config::CartConfig;
pub use error::CartError;
pub use model::{Ingredient, Recipe};
pub use screen::{spawn_catalog_fetch, CatalogState, CatalogTask, RecipeScreen};
pub use selection::Selection;
pub use sources::{parse_catalog, FileRecipeSource, HttpRecipeSource, RecipeSource};

/// Fetch the full catalog from `url` with default settings
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes =
///     recipe_cart::fetch_catalog("https://www.themealdb.com/api/json/v1/1/search.php?s=").await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_catalog(url: &str) -> Result<Vec<Recipe>, CartError> {
    HttpRecipeSource::new(url, None, None)?.fetch_all().await
}
