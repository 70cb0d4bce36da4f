use std::path::PathBuf;
use std::time::Duration;

use crate::config::CartConfig;
use crate::sources::{FileRecipeSource, HttpRecipeSource, RecipeSource};
use crate::CartError;

/// Where the catalog comes from
#[derive(Debug, Clone)]
pub enum CatalogLocation {
    /// Fetch over HTTP
    Url(String),
    /// Read a local JSON file
    File(PathBuf),
}

/// Builder for configuring a recipe source
#[derive(Debug, Default)]
pub struct RecipeSourceBuilder {
    location: Option<CatalogLocation>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl RecipeSourceBuilder {
    /// Start from loaded configuration. The configured URL becomes the location.
    pub fn from_config(config: &CartConfig) -> Self {
        Self {
            location: Some(CatalogLocation::Url(config.source_url.clone())),
            timeout: Some(config.timeout_duration()),
            user_agent: Some(config.user_agent.clone()),
        }
    }

    /// Fetch the catalog from a URL
    ///
    /// # Example
    /// ```
    /// use recipe_cart::RecipeSourceBuilder;
    ///
    /// let builder = RecipeSourceBuilder::default()
    ///     .url("https://www.themealdb.com/api/json/v1/1/search.php?s=");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.location = Some(CatalogLocation::Url(url.into()));
        self
    }

    /// Read the catalog from a local JSON file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(CatalogLocation::File(path.into()));
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_cart::RecipeSourceBuilder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSourceBuilder::default()
    ///     .url("https://example.com/meals")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configured source
    ///
    /// # Errors
    /// Returns `CartError::BuilderError` if no location was given, or
    /// `CartError::FetchError` if the HTTP client cannot be created.
    pub fn build(self) -> Result<Box<dyn RecipeSource>, CartError> {
        let location = self.location.ok_or_else(|| {
            CartError::BuilderError(
                "No catalog location specified. Use .url() or .file()".to_string(),
            )
        })?;

        match location {
            CatalogLocation::Url(url) => Ok(Box::new(HttpRecipeSource::new(
                url,
                self.timeout,
                self.user_agent,
            )?)),
            CatalogLocation::File(path) => Ok(Box::new(FileRecipeSource::new(path))),
        }
    }
}
