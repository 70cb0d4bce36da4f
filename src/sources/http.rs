use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::{parse_catalog, RecipeSource};
use crate::config::default_user_agent;
use crate::error::CartError;
use crate::model::Recipe;

/// Catalog served over HTTP as a `{ "meals": [...] }` document
pub struct HttpRecipeSource {
    client: Client,
    url: String,
}

impl HttpRecipeSource {
    pub fn new(
        url: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<Self, CartError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or_else(default_user_agent))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn source_name(&self) -> &str {
        "http"
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>, CartError> {
        debug!("Requesting catalog from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CartError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let recipes = parse_catalog(&body)?;
        debug!("Catalog from {} has {} recipes", self.url, recipes.len());
        Ok(recipes)
    }
}
