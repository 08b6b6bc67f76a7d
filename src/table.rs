//! Loading the recipe dataset.
//!
//! The table is read once at startup and never mutated afterwards.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::{BrowserError, DataLoadError};
use crate::model::{split_ingredients, Category, Recipe};

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "RecipeName",
    "Cuisine",
    "Course",
    "Diet",
    "Ingredients",
    "CookTimeInMins",
    "PrepTimeInMins",
    "URL",
];

#[derive(Debug, Deserialize)]
struct RecipeRecord {
    #[serde(rename = "RecipeName")]
    name: String,
    #[serde(rename = "Cuisine")]
    cuisine: String,
    #[serde(rename = "Course")]
    course: String,
    #[serde(rename = "Diet")]
    diet: String,
    #[serde(rename = "Ingredients")]
    ingredients: String,
    #[serde(rename = "CookTimeInMins")]
    cook_time_mins: u32,
    #[serde(rename = "PrepTimeInMins")]
    prep_time_mins: u32,
    #[serde(rename = "URL")]
    url: String,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            name: record.name,
            cuisine: record.cuisine,
            course: record.course,
            diet: record.diet,
            ingredients: split_ingredients(&record.ingredients),
            cook_time_mins: record.cook_time_mins,
            prep_time_mins: record.prep_time_mins,
            url: record.url,
        }
    }
}

/// The full, immutable recipe table
#[derive(Debug, Clone, Default)]
pub struct RecipeTable {
    recipes: Vec<Recipe>,
}

impl RecipeTable {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load the table from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BrowserError> {
        let path = path.as_ref();
        info!("Loading recipes from {}", path.display());
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load the table from any CSV source.
    ///
    /// Extra columns are ignored; a missing required column or a row that
    /// does not parse fails the whole load.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BrowserError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn(column.to_string()).into());
            }
        }

        let recipes = reader
            .deserialize::<RecipeRecord>()
            .map(|row| row.map(Recipe::from))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Loaded {} recipes", recipes.len());
        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// First recipe with the given name
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Distinct values of a category column, in order of first appearance
    pub fn categories(&self, category: Category) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .map(|r| r.category(category))
            .filter(|value| seen.insert(*value))
            .collect()
    }
}
