//! Persistence layer for the food and recipe collections.
//!
//! Each collection is persisted as a single JSON blob under its own key in a
//! [`BlobStore`]. The default [`FileBlobStore`] keeps one `<key>.json` file
//! per key inside the data directory, written atomically.
//!
//! ## Persisted layout
//!
//! ```json
//! // foods.json
//! [{"id":1771234567890,"name":"Milk","quantity":1.0,"unit":"liters",
//!   "category":"Dairy","expiry_date":"2026-09-04"}]
//! ```
//!
//! ## Components
//!
//! - [`InventoryStore`]: CRUD over the food collection
//! - [`RecipeStore`]: CRUD over the recipe collection, plus match scoring
//! - [`FileBlobStore`]: file-backed key-value blob storage

mod blob;
mod inventory;
mod recipes;

pub use blob::{BlobStore, FileBlobStore};
pub use inventory::InventoryStore;
pub use recipes::RecipeStore;
