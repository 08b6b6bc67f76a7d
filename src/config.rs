use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::render::OutputFormat;

/// Browser configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Path to the recipe CSV file
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Format used to print recipe cards
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            format: OutputFormat::default(),
        }
    }
}

fn default_dataset() -> String {
    "IndianFoodDataset.csv".to_string()
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSER__ prefix
    /// 2. recipe-browser.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSER__DATASET
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe-browser")
    }
}

/// Load configuration from `<name>.toml` (optional) and the environment
pub fn load_config(name: &str) -> Result<BrowserConfig, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name(name).required(false))
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
