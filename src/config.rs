use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Runtime configuration for the catalog source
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CartConfig {
    /// Catalog endpoint returning `{ "meals": [...] }`
    #[serde(default = "default_source_url")]
    pub source_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with catalog requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_source_url() -> String {
    "https://www.themealdb.com/api/json/v1/1/search.php?s=".to_string()
}

fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeCart/1.0)".to_string()
}

impl CartConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CART__ prefix
    /// 2. recipe-cart.toml file in current directory
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe-cart")
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from the named file (extension optional) and the environment
///
/// Environment variable format: RECIPE_CART__SOURCE_URL, RECIPE_CART__TIMEOUT
pub fn load_config(file_name: &str) -> Result<CartConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CART")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        let config = CartConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.source_url.starts_with("https://www.themealdb.com/"));
        assert_eq!(config.timeout_duration(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "source_url = \"http://localhost:9000/meals\"").unwrap();
        writeln!(file, "timeout = 5").unwrap();

        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config.source_url, "http://localhost:9000/meals");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.user_agent, default_user_agent());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist");

        let result = load_config(path.to_str().unwrap());

        // Environment overrides may be present on the host; it must not fail either way
        assert!(result.is_ok());
    }
}
