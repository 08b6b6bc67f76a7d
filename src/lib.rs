//! # recipe-browser
//!
//! Browse a recipe dataset by cuisine, course and diet.
//!
//! The table is loaded once from CSV and never changes. A [`Selection`] of
//! allowed values per category narrows it to a subset, from which a random
//! recipe is shown; "previous" and "next" walk the subset in name order.
//!
//! ```rust,no_run
//! use recipe_browser::{BrowserState, Event, RecipeTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = RecipeTable::from_path("IndianFoodDataset.csv")?;
//! let mut rng = rand::rng();
//! let state = BrowserState::new(&table, &mut rng);
//! let state = state.handle(&table, Event::Next, &mut rng)?;
//! println!("{}", state.current_recipe(&table)?.name);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod selector;
pub mod session;
pub mod table;

pub use config::BrowserConfig;
pub use error::{BrowserError, DataLoadError};
pub use model::{Category, Direction, Recipe};
pub use render::OutputFormat;
pub use selector::{filter, pick_adjacent, pick_random, pick_random_with, Selection};
pub use session::{BrowserState, Event};
pub use table::RecipeTable;
