//! Browser state and the handlers that move it between interactions.
//!
//! Each handler takes the current state and returns a new one; nothing is
//! kept between calls except what the caller holds on to.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BrowserError;
use crate::model::{Direction, Recipe};
use crate::selector::{pick_adjacent, pick_random_with, Selection};
use crate::table::RecipeTable;

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FiltersChanged(Selection),
    Previous,
    Next,
}

/// What the presentation layer needs to redraw
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrowserState {
    pub selection: Selection,
    /// Name of the displayed recipe, `None` when nothing matches
    pub current: Option<String>,
}

impl BrowserState {
    /// Initial state: every value selected, random recipe shown
    pub fn new<R: Rng + ?Sized>(table: &RecipeTable, rng: &mut R) -> Self {
        Self::default().on_filters_changed(table, Selection::all(table), rng)
    }

    /// Dispatch an event to its handler.
    ///
    /// On error the caller should keep its existing state.
    pub fn handle<R: Rng + ?Sized>(
        &self,
        table: &RecipeTable,
        event: Event,
        rng: &mut R,
    ) -> Result<Self, BrowserError> {
        match event {
            Event::FiltersChanged(selection) => Ok(self.on_filters_changed(table, selection, rng)),
            Event::Previous => self.on_navigate(table, Direction::Previous),
            Event::Next => self.on_navigate(table, Direction::Next),
        }
    }

    /// Re-filter and show a random match. An empty subset clears `current`.
    pub fn on_filters_changed<R: Rng + ?Sized>(
        &self,
        table: &RecipeTable,
        selection: Selection,
        rng: &mut R,
    ) -> Self {
        let subset = selection.apply(table);
        let current = pick_random_with(&subset, rng)
            .ok()
            .map(|recipe| recipe.name.clone());
        debug!("Filters changed, showing {:?}", current);
        Self { selection, current }
    }

    pub fn on_previous(&self, table: &RecipeTable) -> Result<Self, BrowserError> {
        self.on_navigate(table, Direction::Previous)
    }

    pub fn on_next(&self, table: &RecipeTable) -> Result<Self, BrowserError> {
        self.on_navigate(table, Direction::Next)
    }

    fn on_navigate(
        &self,
        table: &RecipeTable,
        direction: Direction,
    ) -> Result<Self, BrowserError> {
        let current = self.current.as_deref().ok_or(BrowserError::EmptySelection)?;
        let subset = self.selection.apply(table);
        let recipe = pick_adjacent(&subset, current, direction)?;
        debug!("Moved {} from '{}' to '{}'", direction, current, recipe.name);
        Ok(Self {
            selection: self.selection.clone(),
            current: Some(recipe.name.clone()),
        })
    }

    /// Whether the button for `direction` should be enabled
    pub fn can_navigate(&self, table: &RecipeTable, direction: Direction) -> bool {
        self.current.as_deref().is_some_and(|current| {
            pick_adjacent(&self.selection.apply(table), current, direction).is_ok()
        })
    }

    /// The recipe to display, looked up among the selected rows.
    ///
    /// Fails with `EmptySelection` only when no row matches the filters; a
    /// name absent from a non-empty subset is `RecipeNotFound`.
    pub fn current_recipe<'a>(&self, table: &'a RecipeTable) -> Result<&'a Recipe, BrowserError> {
        let subset = self.selection.apply(table);
        if subset.is_empty() {
            return Err(BrowserError::EmptySelection);
        }
        let name = self.current.as_deref().ok_or(BrowserError::EmptySelection)?;
        subset
            .into_iter()
            .find(|recipe| recipe.name == name)
            .ok_or_else(|| BrowserError::RecipeNotFound(name.to_string()))
    }
}
