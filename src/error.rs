use thiserror::Error;

/// Errors that can occur while loading a catalog or working with a selection
#[derive(Error, Debug)]
pub enum CartError {
    /// Failed to reach the recipe source
    #[error("Failed to fetch catalog: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe source answered with a non-success status
    #[error("Recipe source returned HTTP {0}")]
    HttpStatus(u16),

    /// The catalog payload was not valid JSON in the expected shape
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Failed to read a local catalog file
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A selection was attempted before the catalog finished loading
    #[error("Catalog is not loaded")]
    NotReady,

    /// The background catalog fetch stopped before producing a result
    #[error("Catalog fetch ended without a result")]
    TaskAborted,

    /// The requested recipe id is not part of the catalog
    #[error("No recipe with id '{0}' in the catalog")]
    UnknownRecipe(String),
}
