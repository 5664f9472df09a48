use super::blob::BlobStore;
use crate::error::Result;
use crate::model::{Food, FoodPatch, NewFood};
use chrono::Utc;

/// Stateful provider for the food collection.
///
/// The in-memory `Vec` is the source of truth for the session; every mutation
/// writes the whole collection back to the blob store. Persistence failures
/// are logged and swallowed so the app degrades to non-persistent operation
/// instead of failing the mutation.
pub struct InventoryStore<S: BlobStore> {
    blobs: S,
    key: String,
    foods: Vec<Food>,
}

impl<S: BlobStore> InventoryStore<S> {
    /// Open the store, loading the persisted collection. A missing blob means
    /// a fresh start; an unreadable or unparseable blob is logged and treated
    /// the same way.
    pub fn open(blobs: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let foods = match Self::load(&blobs, &key) {
            Ok(foods) => foods,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to load foods, starting empty");
                Vec::new()
            }
        };
        Self { blobs, key, foods }
    }

    fn load(blobs: &S, key: &str) -> Result<Vec<Food>> {
        match blobs.get(key)? {
            Some(content) => Ok(serde_json::from_str(&content)?),
            None => Ok(Vec::new()),
        }
    }

    /// Add a food, assigning it a fresh id, and persist.
    pub fn add(&mut self, new: NewFood) -> &Food {
        let id = self.next_id();
        tracing::info!(id, name = %new.name, "Adding food");
        self.foods.push(Food::new(id, new));
        self.persist();
        self.foods.last().expect("just pushed")
    }

    /// Merge the present fields of `patch` into the food with `id`.
    /// No-op when the id is absent.
    pub fn update(&mut self, id: i64, patch: &FoodPatch) {
        match self.foods.iter_mut().find(|f| f.id == id) {
            Some(food) => {
                tracing::info!(id, "Updating food");
                patch.apply(food);
                self.persist();
            }
            None => tracing::debug!(id, "Update ignored, no such food"),
        }
    }

    /// Remove the food with `id`. No-op when absent, so deletes are idempotent.
    pub fn delete(&mut self, id: i64) {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        if self.foods.len() != before {
            tracing::info!(id, "Deleted food");
            self.persist();
        } else {
            tracing::debug!(id, "Delete ignored, no such food");
        }
    }

    pub fn get(&self, id: i64) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// The collection in insertion order.
    pub fn as_slice(&self) -> &[Food] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Current food names, for ingredient matching.
    pub fn names(&self) -> Vec<String> {
        self.foods.iter().map(|f| f.name.clone()).collect()
    }

    // Ids are epoch milliseconds, bumped past the current maximum so a rapid
    // sequence of adds still yields strictly increasing ids.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.foods.iter().map(|f| f.id).max() {
            Some(max) if now <= max => max + 1,
            _ => now,
        }
    }

    // Full-collection write-back. Fire-and-forget: failures are logged, the
    // in-memory state stays authoritative and the next successful write
    // self-heals durability.
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.foods) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to serialize foods");
                return;
            }
        };
        if let Err(e) = self.blobs.set(&self.key, &payload) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist foods");
        }
    }
}
