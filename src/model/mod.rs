//! Data models for foods and recipes.

mod food;
mod recipe;
mod types;

pub use food::{Food, FoodPatch, NewFood};
pub use recipe::{NewRecipe, Recipe, RecipePatch};
pub use types::{Difficulty, Unit};
