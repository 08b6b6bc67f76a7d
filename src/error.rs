use std::path::PathBuf;

use thiserror::Error;

use crate::model::Direction;

/// Errors that can occur while browsing recipes
#[derive(Error, Debug)]
pub enum BrowserError {
    /// No recipe matches the current filters
    #[error("No recipes match the current filters")]
    EmptySelection,

    /// Navigation was requested past either end of the sorted subset
    #[error("No {direction} recipe from '{name}'")]
    NoAdjacentRecipe { name: String, direction: Direction },

    /// The named recipe is not among the rows matching the current filters
    #[error("Recipe '{0}' does not match the current filters")]
    RecipeNotFound(String),

    /// The recipe dataset could not be loaded
    #[error("Failed to load recipe data: {0}")]
    DataLoad(#[from] DataLoadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Errors raised while reading the recipe dataset at startup
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The dataset file could not be opened
    #[error("Cannot open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid CSV or a row has a bad field
    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

impl From<csv::Error> for BrowserError {
    fn from(err: csv::Error) -> Self {
        BrowserError::DataLoad(DataLoadError::Csv(err))
    }
}

impl BrowserError {
    /// Whether the error must halt startup rather than be shown to the user
    pub fn is_fatal(&self) -> bool {
        matches!(self, BrowserError::DataLoad(_) | BrowserError::Config(_))
    }
}
