use crate::model::{Food, Recipe};
use regex::Regex;

/// Search query with optional field-specific and regex support
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Simple substring search (case-insensitive)
    Simple(String),
    /// Regex search
    Regex(Regex),
    /// Field-specific search
    Field {
        field: SearchField,
        pattern: Box<SearchQuery>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Category,
    Ingredient,
    Step,
}

impl SearchQuery {
    /// Parse a search query string
    /// Supports:
    /// - Simple: "milk" -> searches all fields
    /// - Field-specific: "name:milk" -> searches name only
    /// - Regex: "regex:mil.*" -> regex search
    /// - Combined: "ingredient:regex:egg.*" -> regex in ingredient field
    pub fn parse(query: &str) -> Result<Self, String> {
        if query.is_empty() {
            return Err("Empty query".to_string());
        }

        if let Some((field_str, pattern)) = query.split_once(':') {
            if let Ok(field) = field_str.parse::<SearchField>() {
                let sub_query = Self::parse(pattern)?;
                return Ok(SearchQuery::Field {
                    field,
                    pattern: Box::new(sub_query),
                });
            }

            if field_str == "regex" {
                let regex = Regex::new(pattern).map_err(|e| format!("Invalid regex: {}", e))?;
                return Ok(SearchQuery::Regex(regex));
            }
        }

        Ok(SearchQuery::Simple(query.to_string()))
    }

    /// Match against a Food
    pub fn matches_food(&self, food: &Food) -> bool {
        match self {
            SearchQuery::Simple(pattern) => {
                let pattern_lower = pattern.to_lowercase();
                food.name.to_lowercase().contains(&pattern_lower)
                    || food.category.to_lowercase().contains(&pattern_lower)
            }
            SearchQuery::Regex(regex) => {
                regex.is_match(&food.name) || regex.is_match(&food.category)
            }
            SearchQuery::Field { field, pattern } => match field {
                SearchField::Name => match pattern.as_ref() {
                    SearchQuery::Simple(p) => food.name.to_lowercase().contains(&p.to_lowercase()),
                    SearchQuery::Regex(r) => r.is_match(&food.name),
                    _ => false,
                },
                SearchField::Category => match pattern.as_ref() {
                    SearchQuery::Simple(p) => {
                        food.category.to_lowercase().contains(&p.to_lowercase())
                    }
                    SearchQuery::Regex(r) => r.is_match(&food.category),
                    _ => false,
                },
                // Ingredient and step fields don't apply to foods
                _ => false,
            },
        }
    }

    /// Match against a Recipe
    pub fn matches_recipe(&self, recipe: &Recipe) -> bool {
        match self {
            SearchQuery::Simple(pattern) => {
                let pattern_lower = pattern.to_lowercase();
                recipe.name.to_lowercase().contains(&pattern_lower)
                    || recipe
                        .ingredients
                        .iter()
                        .any(|i| i.to_lowercase().contains(&pattern_lower))
                    || recipe
                        .instructions
                        .iter()
                        .any(|s| s.to_lowercase().contains(&pattern_lower))
            }
            SearchQuery::Regex(regex) => {
                regex.is_match(&recipe.name)
                    || recipe.ingredients.iter().any(|i| regex.is_match(i))
                    || recipe.instructions.iter().any(|s| regex.is_match(s))
            }
            SearchQuery::Field { field, pattern } => match field {
                SearchField::Name => match pattern.as_ref() {
                    SearchQuery::Simple(p) => {
                        recipe.name.to_lowercase().contains(&p.to_lowercase())
                    }
                    SearchQuery::Regex(r) => r.is_match(&recipe.name),
                    _ => false,
                },
                SearchField::Ingredient => match pattern.as_ref() {
                    SearchQuery::Simple(p) => recipe
                        .ingredients
                        .iter()
                        .any(|i| i.to_lowercase().contains(&p.to_lowercase())),
                    SearchQuery::Regex(r) => recipe.ingredients.iter().any(|i| r.is_match(i)),
                    _ => false,
                },
                SearchField::Step => match pattern.as_ref() {
                    SearchQuery::Simple(p) => recipe
                        .instructions
                        .iter()
                        .any(|s| s.to_lowercase().contains(&p.to_lowercase())),
                    SearchQuery::Regex(r) => recipe.instructions.iter().any(|s| r.is_match(s)),
                    _ => false,
                },
                // Category doesn't apply to recipes
                SearchField::Category => false,
            },
        }
    }
}

impl std::str::FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "category" => Ok(SearchField::Category),
            "ingredient" | "ingredients" => Ok(SearchField::Ingredient),
            "step" | "steps" | "instruction" | "instructions" => Ok(SearchField::Step),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, NewFood, NewRecipe, Unit};
    use chrono::NaiveDate;

    fn create_test_food() -> Food {
        Food::new(
            1,
            NewFood::new(
                "Whole Milk".to_string(),
                1.0,
                Unit::Liters,
                NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
            )
            .with_category("Dairy".to_string()),
        )
    }

    fn create_test_recipe() -> Recipe {
        Recipe::new(
            2,
            NewRecipe::new("Pancakes".to_string(), Difficulty::Easy, 20)
                .with_ingredients(vec![
                    "Flour".to_string(),
                    "Eggs".to_string(),
                    "Milk".to_string(),
                ])
                .with_instructions(vec![
                    "Whisk everything together".to_string(),
                    "Fry in a hot pan".to_string(),
                ]),
        )
    }

    #[test]
    fn test_simple_search_food() {
        let food = create_test_food();

        let query = SearchQuery::parse("milk").unwrap();
        assert!(query.matches_food(&food));

        let query = SearchQuery::parse("dairy").unwrap();
        assert!(query.matches_food(&food));

        let query = SearchQuery::parse("nonexistent").unwrap();
        assert!(!query.matches_food(&food));
    }

    #[test]
    fn test_simple_search_recipe() {
        let recipe = create_test_recipe();

        let query = SearchQuery::parse("pancakes").unwrap();
        assert!(query.matches_recipe(&recipe));

        let query = SearchQuery::parse("whisk").unwrap();
        assert!(query.matches_recipe(&recipe));

        let query = SearchQuery::parse("chocolate").unwrap();
        assert!(!query.matches_recipe(&recipe));
    }

    #[test]
    fn test_field_specific_search() {
        let recipe = create_test_recipe();

        let query = SearchQuery::parse("name:pancakes").unwrap();
        assert!(query.matches_recipe(&recipe));

        let query = SearchQuery::parse("ingredient:eggs").unwrap();
        assert!(query.matches_recipe(&recipe));

        let query = SearchQuery::parse("step:fry").unwrap();
        assert!(query.matches_recipe(&recipe));

        // "flour" is an ingredient, not part of the name
        let query = SearchQuery::parse("name:flour").unwrap();
        assert!(!query.matches_recipe(&recipe));
    }

    #[test]
    fn test_category_field_only_matches_foods() {
        let food = create_test_food();
        let recipe = create_test_recipe();

        let query = SearchQuery::parse("category:dairy").unwrap();
        assert!(query.matches_food(&food));
        assert!(!query.matches_recipe(&recipe));
    }

    #[test]
    fn test_regex_search() {
        let recipe = create_test_recipe();

        let query = SearchQuery::parse("regex:(Flour|Butter)").unwrap();
        assert!(query.matches_recipe(&recipe));

        let query = SearchQuery::parse("regex:Pan\\w+").unwrap();
        assert!(query.matches_recipe(&recipe));

        let result = SearchQuery::parse("regex:[invalid");
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_field_and_regex() {
        let recipe = create_test_recipe();

        let query = SearchQuery::parse("ingredient:regex:Egg.?").unwrap();
        assert!(query.matches_recipe(&recipe));

        let query = SearchQuery::parse("step:regex:hot pan").unwrap();
        assert!(query.matches_recipe(&recipe));
    }

    #[test]
    fn test_case_insensitive_search() {
        let food = create_test_food();

        let query = SearchQuery::parse("MILK").unwrap();
        assert!(query.matches_food(&food));

        let query = SearchQuery::parse("NAME:whole").unwrap();
        assert!(query.matches_food(&food));
    }
}
