use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

use super::{parse_catalog, RecipeSource};
use crate::error::CartError;
use crate::model::Recipe;

/// Catalog stored in a local JSON file, same shape as the HTTP payload
pub struct FileRecipeSource {
    path: PathBuf,
}

impl FileRecipeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecipeSource for FileRecipeSource {
    fn source_name(&self) -> &str {
        "file"
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, CartError> {
        debug!("Reading catalog from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"meals": [{{"idMeal": "1", "strMeal": "Soup", "ingredients": []}}]}}"#
        )
        .unwrap();

        let source = FileRecipeSource::new(file.path());
        let recipes = source.fetch_all().await.unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Soup");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRecipeSource::new(dir.path().join("nope.json"));

        let result = source.fetch_all().await;
        assert!(matches!(result, Err(CartError::IoError(_))));
    }
}
