//! Filtering and picking recipes out of the table.
//!
//! A subset is a `Vec<&Recipe>` borrowed from the table, kept in table order.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BrowserError;
use crate::model::{Category, Direction, Recipe};
use crate::table::RecipeTable;

/// The option sets chosen in the three pickers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub cuisines: BTreeSet<String>,
    pub courses: BTreeSet<String>,
    pub diets: BTreeSet<String>,
}

impl Selection {
    /// Every distinct value of every category column
    pub fn all(table: &RecipeTable) -> Self {
        let mut selection = Self::default();
        for category in Category::ALL {
            selection.set(category, table.categories(category));
        }
        selection
    }

    /// Replace the chosen values for one category
    pub fn set<I, S>(&mut self, category: Category, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        match category {
            Category::Cuisine => self.cuisines = values,
            Category::Course => self.courses = values,
            Category::Diet => self.diets = values,
        }
    }

    pub fn with<I, S>(mut self, category: Category, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(category, values);
        self
    }

    pub fn apply<'a>(&self, table: &'a RecipeTable) -> Vec<&'a Recipe> {
        filter(table.recipes(), &self.cuisines, &self.courses, &self.diets)
    }
}

/// Rows whose cuisine, course and diet are all in the given sets.
///
/// An empty set matches nothing, so any empty set yields an empty subset.
pub fn filter<'a>(
    recipes: &'a [Recipe],
    cuisines: &BTreeSet<String>,
    courses: &BTreeSet<String>,
    diets: &BTreeSet<String>,
) -> Vec<&'a Recipe> {
    let subset: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| {
            cuisines.contains(r.cuisine.as_str())
                && courses.contains(r.course.as_str())
                && diets.contains(r.diet.as_str())
        })
        .collect();
    debug!("Filter matched {} of {} recipes", subset.len(), recipes.len());
    subset
}

/// Uniformly random recipe from the subset, using the thread-local RNG
pub fn pick_random<'a>(subset: &[&'a Recipe]) -> Result<&'a Recipe, BrowserError> {
    pick_random_with(subset, &mut rand::rng())
}

pub fn pick_random_with<'a, R>(
    subset: &[&'a Recipe],
    rng: &mut R,
) -> Result<&'a Recipe, BrowserError>
where
    R: Rng + ?Sized,
{
    if subset.is_empty() {
        return Err(BrowserError::EmptySelection);
    }
    Ok(subset[rng.random_range(0..subset.len())])
}

/// The recipe whose name immediately precedes or follows `current` in
/// lexicographic order among the subset's names.
///
/// `current` does not have to be in the subset. When several rows share the
/// adjacent name, the first one in table order is returned.
pub fn pick_adjacent<'a>(
    subset: &[&'a Recipe],
    current: &str,
    direction: Direction,
) -> Result<&'a Recipe, BrowserError> {
    let mut names: Vec<&str> = subset.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();

    let target = match direction {
        Direction::Previous => names
            .partition_point(|name| *name < current)
            .checked_sub(1)
            .map(|idx| names[idx]),
        Direction::Next => names
            .get(names.partition_point(|name| *name <= current))
            .copied(),
    };

    target
        .and_then(|name| subset.iter().copied().find(|r| r.name == name))
        .ok_or_else(|| BrowserError::NoAdjacentRecipe {
            name: current.to_string(),
            direction,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn recipe(name: &str) -> Recipe {
        Recipe {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pick_adjacent_between_names() {
        let rows = vec![recipe("Upma"), recipe("Dosa"), recipe("Kheer")];
        let subset: Vec<&Recipe> = rows.iter().collect();

        let next = pick_adjacent(&subset, "Dosa", Direction::Next).unwrap();
        assert_eq!(next.name, "Kheer");
        let prev = pick_adjacent(&subset, "Upma", Direction::Previous).unwrap();
        assert_eq!(prev.name, "Kheer");
    }

    #[test]
    fn test_pick_adjacent_with_name_outside_subset() {
        let rows = vec![recipe("Dosa"), recipe("Upma")];
        let subset: Vec<&Recipe> = rows.iter().collect();

        let next = pick_adjacent(&subset, "Idli", Direction::Next).unwrap();
        assert_eq!(next.name, "Upma");
        let prev = pick_adjacent(&subset, "Idli", Direction::Previous).unwrap();
        assert_eq!(prev.name, "Dosa");
    }

    #[test]
    fn test_pick_adjacent_single_distinct_name() {
        let rows = vec![recipe("Dosa"), recipe("Dosa")];
        let subset: Vec<&Recipe> = rows.iter().collect();

        for direction in [Direction::Previous, Direction::Next] {
            let err = pick_adjacent(&subset, "Dosa", direction).unwrap_err();
            assert!(matches!(err, BrowserError::NoAdjacentRecipe { .. }));
        }
    }

    #[test]
    fn test_pick_adjacent_returns_first_duplicate_in_table_order() {
        let mut first = recipe("Kheer");
        first.url = "first".to_string();
        let mut second = recipe("Kheer");
        second.url = "second".to_string();
        let rows = vec![recipe("Dosa"), first, second];
        let subset: Vec<&Recipe> = rows.iter().collect();

        let next = pick_adjacent(&subset, "Dosa", Direction::Next).unwrap();
        assert_eq!(next.url, "first");
    }

    #[test]
    fn test_pick_random_seeded_stays_in_subset() {
        let rows = vec![recipe("Dosa"), recipe("Idli"), recipe("Upma")];
        let subset: Vec<&Recipe> = rows.iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = pick_random_with(&subset, &mut rng).unwrap();
            assert!(subset.iter().any(|r| r.name == picked.name));
        }
    }

    #[test]
    fn test_selection_all_matches_every_row() {
        let mut dal = recipe("Dal");
        dal.cuisine = "North Indian".to_string();
        dal.course = "Main Course".to_string();
        dal.diet = "Vegetarian".to_string();
        let table = RecipeTable::new(vec![dal]);

        let selection = Selection::all(&table);
        assert_eq!(selection.apply(&table).len(), 1);
        assert!(selection.cuisines.contains("North Indian"));
    }
}
