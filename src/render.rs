//! Turning a recipe into something a user can read.

use std::fmt;
use std::str::FromStr;

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

use crate::model::Recipe;

/// Shown in place of a recipe when the filters match nothing
pub const EMPTY_SELECTION_NOTICE: &str =
    "No recipes match the current filters. Adjust your selection.";

/// Output format of a recipe card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown format '{}', expected text, html or json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

pub fn render(recipe: &Recipe, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(to_text(recipe)),
        OutputFormat::Html => Ok(to_html(recipe)),
        OutputFormat::Json => serde_json::to_string_pretty(recipe),
    }
}

/// Plain text card with one ingredient per line
pub fn to_text(recipe: &Recipe) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}\n", recipe.name));
    result.push_str(&format!("{}\n", "=".repeat(recipe.name.chars().count())));

    result.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        result.push_str(&format!("- {}\n", ingredient));
    }

    result.push_str("\nDetails\n");
    result.push_str(&format!("Diet: {}\n", recipe.diet));
    result.push_str(&format!("Cook Time (mins): {}\n", recipe.cook_time_mins));
    result.push_str(&format!("Prep Time (mins): {}\n", recipe.prep_time_mins));

    result.push_str(&format!("\nView recipe source: {}\n", recipe.url));
    result
}

pub fn to_html(recipe: &Recipe) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "<h2 style='font-weight: bold;'>{}</h2>\n",
        encode_text(&recipe.name)
    ));

    result.push_str("<h3>Ingredients</h3>\n<ul>\n");
    for ingredient in &recipe.ingredients {
        result.push_str(&format!("  <li>{}</li>\n", encode_text(ingredient)));
    }
    result.push_str("</ul>\n");

    result.push_str("<h3>Details</h3>\n<div class=\"details\">\n");
    for (title, value) in [
        ("Diet", recipe.diet.clone()),
        ("Cook Time (mins)", recipe.cook_time_mins.to_string()),
        ("Prep Time (mins)", recipe.prep_time_mins.to_string()),
    ] {
        result.push_str(&format!(
            "  <div class=\"detail\"><span class=\"detail-title\">{}</span><span>{}</span></div>\n",
            title,
            encode_text(&value)
        ));
    }
    result.push_str("</div>\n");

    result.push_str(&format!(
        "<a href=\"{}\">View recipe source</a>\n",
        encode_double_quoted_attribute(&recipe.url)
    ));
    result
}
