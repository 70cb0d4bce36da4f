//! Recipe selection screen: catalog load state, the user's selection and
//! a plain text rendering of both.

use log::{error, info};
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

use crate::aggregate::format_quantity;
use crate::error::CartError;
use crate::model::Recipe;
use crate::selection::Selection;
use crate::sources::RecipeSource;

/// Message shown in place of the catalog when the fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching recipes";

/// Where the catalog load stands
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Failed(String),
    Ready(Vec<Recipe>),
}

/// Owns the catalog and the selection built from it
#[derive(Debug)]
pub struct RecipeScreen {
    catalog: CatalogState,
    selection: Selection,
}

impl Default for RecipeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeScreen {
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::Loading,
            selection: Selection::new(),
        }
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Fetch the catalog once and apply the outcome
    pub async fn load(&mut self, source: &dyn RecipeSource) -> bool {
        info!("Loading catalog from {} source", source.source_name());
        let result = source.fetch_all().await;
        self.apply_catalog(result)
    }

    /// Record the outcome of the catalog fetch.
    ///
    /// Only the first result is applied; later ones return `false`.
    pub fn apply_catalog(&mut self, result: Result<Vec<Recipe>, CartError>) -> bool {
        if !matches!(self.catalog, CatalogState::Loading) {
            return false;
        }

        self.catalog = match result {
            Ok(recipes) => {
                info!("Catalog loaded with {} recipes", recipes.len());
                CatalogState::Ready(recipes)
            }
            Err(e) => {
                error!("Catalog fetch failed: {}", e);
                CatalogState::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// Add the catalog recipe with `id` to the selection.
    ///
    /// Returns `Ok(false)` when it was already selected.
    pub fn select(&mut self, id: &str) -> Result<bool, CartError> {
        let recipes = match &self.catalog {
            CatalogState::Ready(recipes) => recipes,
            _ => return Err(CartError::NotReady),
        };

        let recipe = recipes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CartError::UnknownRecipe(id.to_string()))?;

        Ok(self.selection.add(recipe.clone()))
    }

    /// Plain text rendering of the current state
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecipeScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipes = match &self.catalog {
            CatalogState::Loading => return writeln!(f, "Loading recipes..."),
            CatalogState::Failed(message) => return writeln!(f, "{}", message),
            CatalogState::Ready(recipes) => recipes,
        };

        writeln!(f, "All Recipes")?;
        if recipes.is_empty() {
            writeln!(f, "No recipes available")?;
        }
        for recipe in recipes {
            writeln!(f, "- [{}] {}", recipe.id, recipe.name)?;
            if !recipe.thumbnail.is_empty() {
                writeln!(f, "  {}", recipe.thumbnail)?;
            }
        }

        writeln!(f, "\nSelected Recipes")?;
        if self.selection.is_empty() {
            return writeln!(f, "No recipes selected");
        }

        for recipe in &self.selection {
            writeln!(f, "{}", recipe.name)?;
            if !recipe.instructions.is_empty() {
                writeln!(f, "{}", recipe.instructions)?;
            }
            writeln!(f, "Ingredients:")?;
            for ingredient in &recipe.ingredients {
                writeln!(f, "  {}: {}", ingredient.name, ingredient.quantity)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Combined Ingredients for Selected Recipes")?;
        for (name, total) in self.selection.aggregate().iter() {
            writeln!(f, "  {}: {}", name, format_quantity(total))?;
        }
        Ok(())
    }
}

/// Catalog fetch running in the background
pub struct CatalogTask {
    receiver: oneshot::Receiver<Result<Vec<Recipe>, CartError>>,
}

impl CatalogTask {
    /// Wait for the fetch to finish
    pub async fn wait(self) -> Result<Vec<Recipe>, CartError> {
        self.receiver
            .await
            .unwrap_or(Err(CartError::TaskAborted))
    }
}

/// Start fetching the catalog on the tokio runtime.
///
/// Dropping the returned task leaves the fetch running, but its result is never observed.
pub fn spawn_catalog_fetch(source: Arc<dyn RecipeSource>) -> CatalogTask {
    let (sender, receiver) = oneshot::channel();
    tokio::spawn(async move {
        let result = source.fetch_all().await;
        let _ = sender.send(result);
    });
    CatalogTask { receiver }
}
