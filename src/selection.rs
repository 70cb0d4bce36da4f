use crate::aggregate::{aggregate, IngredientTotals};
use crate::model::Recipe;

/// Recipes picked by the user, unique by id, in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    recipes: Vec<Recipe>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `recipe` unless a recipe with the same id is already selected.
    ///
    /// Returns `true` when the selection changed.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Combined ingredient totals for the current selection, computed on each call
    pub fn aggregate(&self) -> IngredientTotals {
        aggregate(&self.recipes)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
