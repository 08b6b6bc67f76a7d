use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single row of the recipe dataset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recipe {
    pub name: String,
    pub cuisine: String,
    pub course: String,
    pub diet: String,
    pub ingredients: Vec<String>,
    pub cook_time_mins: u32,
    pub prep_time_mins: u32,
    pub url: String,
}

impl Recipe {
    /// Value of one of the category columns
    pub fn category(&self, category: Category) -> &str {
        match category {
            Category::Cuisine => &self.cuisine,
            Category::Course => &self.course,
            Category::Diet => &self.diet,
        }
    }
}

/// Splits a comma-delimited ingredient field into trimmed items.
///
/// Empty items (e.g. from a trailing comma) are dropped.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// One of the columns recipes are filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cuisine,
    Course,
    Diet,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cuisine, Category::Course, Category::Diet];

    /// Header of the column in the dataset
    pub fn column(&self) -> &'static str {
        match self {
            Category::Cuisine => "Cuisine",
            Category::Course => "Course",
            Category::Diet => "Diet",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive column name, e.g. `cuisine` or `Diet`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.column().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Navigation direction in sorted name order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Previous => f.write_str("previous"),
            Direction::Next => f.write_str("next"),
        }
    }
}
