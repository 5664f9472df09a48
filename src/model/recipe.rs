use super::types::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,

    /// Image URL or URI supplied by the user. Stored verbatim, never fetched.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub level: Difficulty,

    pub time_minutes: u32,

    #[serde(default)]
    pub ingredients: Vec<String>,

    #[serde(default)]
    pub instructions: Vec<String>,
}

/// A recipe as entered by the user, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub image: String,
    pub level: Difficulty,
    pub time_minutes: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Partial update for a recipe; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Difficulty>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.level.is_none()
            && self.time_minutes.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
    }

    pub fn apply(&self, recipe: &mut Recipe) {
        if let Some(ref name) = self.name {
            recipe.name = name.clone();
        }
        if let Some(ref image) = self.image {
            recipe.image = image.clone();
        }
        if let Some(level) = self.level {
            recipe.level = level;
        }
        if let Some(time_minutes) = self.time_minutes {
            recipe.time_minutes = time_minutes;
        }
        if let Some(ref ingredients) = self.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(ref instructions) = self.instructions {
            recipe.instructions = instructions.clone();
        }
    }
}

impl Recipe {
    pub fn new(id: i64, new: NewRecipe) -> Self {
        Self {
            id,
            name: new.name,
            image: new.image,
            level: new.level,
            time_minutes: new.time_minutes,
            ingredients: new.ingredients,
            instructions: new.instructions,
        }
    }
}

impl NewRecipe {
    pub fn new(name: String, level: Difficulty, time_minutes: u32) -> Self {
        Self {
            name,
            image: String::new(),
            level,
            time_minutes,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = image;
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }
}
