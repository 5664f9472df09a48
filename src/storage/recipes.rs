use super::blob::BlobStore;
use crate::error::{LarderError, Result};
use crate::matching;
use crate::model::{NewRecipe, Recipe, RecipePatch};
use chrono::Utc;

/// Stateful provider for the recipe collection.
///
/// Same contract as [`super::InventoryStore`]: in-memory collection as the
/// session's source of truth, full write-back on every mutation, persistence
/// failures logged and swallowed.
pub struct RecipeStore<S: BlobStore> {
    blobs: S,
    key: String,
    recipes: Vec<Recipe>,
}

impl<S: BlobStore> RecipeStore<S> {
    pub fn open(blobs: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let recipes = match Self::load(&blobs, &key) {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to load recipes, starting empty");
                Vec::new()
            }
        };
        Self {
            blobs,
            key,
            recipes,
        }
    }

    fn load(blobs: &S, key: &str) -> Result<Vec<Recipe>> {
        match blobs.get(key)? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn add(&mut self, new: NewRecipe) -> &Recipe {
        let id = self.next_id();
        tracing::info!(id, name = %new.name, "Adding recipe");
        self.recipes.push(Recipe::new(id, new));
        self.persist();
        self.recipes.last().expect("just pushed")
    }

    /// Merge the present fields of `patch` into the recipe with `id`.
    /// No-op when the id is absent.
    pub fn update(&mut self, id: i64, patch: &RecipePatch) {
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                tracing::info!(id, "Updating recipe");
                patch.apply(recipe);
                self.persist();
            }
            None => tracing::debug!(id, "Update ignored, no such recipe"),
        }
    }

    /// Remove the recipe with `id`. No-op when absent.
    pub fn delete(&mut self, id: i64) {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() != before {
            tracing::info!(id, "Deleted recipe");
            self.persist();
        } else {
            tracing::debug!(id, "Delete ignored, no such recipe");
        }
    }

    pub fn get(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Percentage of the recipe's ingredients available among `food_names`.
    pub fn match_score(&self, id: i64, food_names: &[String]) -> Result<u8> {
        let recipe = self
            .get(id)
            .ok_or_else(|| LarderError::NotFound(format!("Recipe id: {}", id)))?;
        Ok(matching::match_score(&recipe.ingredients, food_names))
    }

    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.recipes.iter().map(|r| r.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.recipes) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize recipes");
                return;
            }
        };
        if let Err(e) = self.blobs.set(&self.key, &payload) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist recipes");
        }
    }
}
