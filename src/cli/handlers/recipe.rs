use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::cli::commands::RecipeCommands;
use crate::error::LarderError;
use crate::matching;
use crate::model::{NewRecipe, Recipe, RecipePatch};
use crate::search::SearchQuery;
use crate::validation;

pub fn handle_recipe(ctx: &mut CommandContext, command: RecipeCommands) -> Result<()> {
    match command {
        RecipeCommands::Add {
            name,
            image,
            level,
            time,
            ingredients,
            steps,
            json,
        } => {
            validation::validate_name(&name)?;
            validation::validate_time_minutes(time)?;
            let ingredients = validation::clean_entries(&ingredients, "ingredient")?;
            let steps = validation::clean_entries(&steps, "instruction")?;

            let mut new = NewRecipe::new(name.trim().to_string(), level.into(), time)
                .with_ingredients(ingredients)
                .with_instructions(steps);
            if let Some(image) = image {
                new = new.with_image(image.trim().to_string());
            }
            let recipe = ctx.recipes.add(new);

            if json {
                println!("{}", serde_json::to_string_pretty(recipe)?);
            } else {
                println!(
                    "{} {} {}",
                    "Added".green(),
                    recipe.id.to_string().cyan(),
                    recipe.name
                );
            }
            Ok(())
        }

        RecipeCommands::List { level, json } => {
            let food_names = ctx.foods.names();
            let filter_level = level.map(Into::into);

            let recipes: Vec<&Recipe> = ctx
                .recipes
                .as_slice()
                .iter()
                .filter(|r| filter_level.is_none_or(|l| r.level == l))
                .collect();

            if json {
                let rows: Vec<serde_json::Value> = recipes
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "recipe": r,
                            "match_score": matching::match_score(&r.ingredients, &food_names),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if recipes.is_empty() {
                println!("No recipes. Add one with 'larder recipe add'.");
            } else {
                for recipe in recipes {
                    let score = matching::match_score(&recipe.ingredients, &food_names);
                    print_recipe_line(recipe, score);
                }
            }
            Ok(())
        }

        RecipeCommands::Show { id, json } => {
            let recipe = ctx
                .recipes
                .get(id)
                .ok_or_else(|| LarderError::NotFound(format!("Recipe id: {}", id)))?;
            let food_names = ctx.foods.names();
            let availability =
                matching::ingredient_availability(&recipe.ingredients, &food_names);
            let score = ctx.recipes.match_score(id, &food_names)?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "recipe": recipe,
                        "match_score": score,
                        "available": availability,
                    }))?
                );
            } else {
                print_recipe(recipe, score, &availability);
            }
            Ok(())
        }

        RecipeCommands::Update {
            id,
            name,
            image,
            level,
            time,
            ingredients,
            steps,
            add_ingredient,
            remove_ingredient,
            json,
        } => {
            let Some(original) = ctx.recipes.get(id).cloned() else {
                println!("{} no recipe with id {}", "Skipped:".yellow(), id);
                return Ok(());
            };

            if let Some(ref n) = name {
                validation::validate_name(n)?;
            }
            if let Some(t) = time {
                validation::validate_time_minutes(t)?;
            }

            let mut new_ingredients = if ingredients.is_empty() {
                None
            } else {
                Some(validation::clean_entries(&ingredients, "ingredient")?)
            };
            if !add_ingredient.is_empty() || !remove_ingredient.is_empty() {
                let mut list = new_ingredients
                    .take()
                    .unwrap_or_else(|| original.ingredients.clone());
                for i in add_ingredient {
                    let i = i.trim().to_string();
                    if !i.is_empty() && !list.contains(&i) {
                        list.push(i);
                    }
                }
                for i in remove_ingredient {
                    list.retain(|x| x != &i);
                }
                new_ingredients = Some(validation::clean_entries(&list, "ingredient")?);
            }

            let new_steps = if steps.is_empty() {
                None
            } else {
                Some(validation::clean_entries(&steps, "instruction")?)
            };

            let patch = RecipePatch {
                name: name.map(|n| n.trim().to_string()),
                image: image.map(|i| i.trim().to_string()),
                level: level.map(Into::into),
                time_minutes: time,
                ingredients: new_ingredients,
                instructions: new_steps,
            };

            if patch.is_empty() {
                println!("{} {} (no changes)", "Unchanged".yellow(), id);
                return Ok(());
            }

            ctx.recipes.update(id, &patch);
            let recipe = ctx.recipes.get(id).expect("updated recipe exists");

            if json {
                println!("{}", serde_json::to_string_pretty(recipe)?);
            } else {
                println!(
                    "{} {} {}",
                    "Updated".green(),
                    id.to_string().cyan(),
                    recipe.name
                );
            }
            Ok(())
        }

        RecipeCommands::Delete { id } => {
            match ctx.recipes.get(id).map(|r| r.name.clone()) {
                Some(name) => {
                    ctx.recipes.delete(id);
                    println!("{} {} {}", "Deleted".green(), id.to_string().cyan(), name);
                }
                None => println!("{} no recipe with id {}", "Skipped:".yellow(), id),
            }
            Ok(())
        }

        RecipeCommands::Match { id, json } => match id {
            Some(id) => {
                let recipe = ctx
                    .recipes
                    .get(id)
                    .ok_or_else(|| LarderError::NotFound(format!("Recipe id: {}", id)))?;
                let food_names = ctx.foods.names();
                let availability =
                    matching::ingredient_availability(&recipe.ingredients, &food_names);
                let score = matching::match_score(&recipe.ingredients, &food_names);

                if json {
                    let rows: Vec<serde_json::Value> = recipe
                        .ingredients
                        .iter()
                        .zip(&availability)
                        .map(|(name, available)| {
                            serde_json::json!({ "ingredient": name, "available": available })
                        })
                        .collect();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({
                            "id": recipe.id,
                            "name": recipe.name,
                            "match_score": score,
                            "ingredients": rows,
                        }))?
                    );
                } else {
                    print_recipe(recipe, score, &availability);
                }
                Ok(())
            }
            None => {
                let food_names = ctx.foods.names();
                let mut scored: Vec<(&Recipe, u8)> = ctx
                    .recipes
                    .as_slice()
                    .iter()
                    .map(|r| (r, matching::match_score(&r.ingredients, &food_names)))
                    .collect();
                scored.sort_by(|a, b| b.1.cmp(&a.1));

                if json {
                    let rows: Vec<serde_json::Value> = scored
                        .iter()
                        .map(|(r, score)| {
                            serde_json::json!({
                                "id": r.id,
                                "name": r.name,
                                "match_score": score,
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else if scored.is_empty() {
                    println!("No recipes. Add one with 'larder recipe add'.");
                } else {
                    for (recipe, score) in scored {
                        print_recipe_line(recipe, score);
                    }
                }
                Ok(())
            }
        },

        RecipeCommands::Search { query, json } => {
            let query = SearchQuery::parse(&query).map_err(LarderError::Parse)?;
            let matches: Vec<&Recipe> = ctx
                .recipes
                .as_slice()
                .iter()
                .filter(|r| query.matches_recipe(r))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No matching recipes.");
            } else {
                let food_names = ctx.foods.names();
                for recipe in matches {
                    let score = matching::match_score(&recipe.ingredients, &food_names);
                    print_recipe_line(recipe, score);
                }
            }
            Ok(())
        }
    }
}

fn score_badge(score: u8) -> String {
    let text = format!("{:>3}%", score);
    if score == 100 {
        text.green().to_string()
    } else if score >= 50 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

fn print_recipe_line(recipe: &Recipe, score: u8) {
    println!(
        "{:<15} {:<28} {:<7} {:>4}min  {}",
        recipe.id.to_string().cyan(),
        recipe.name,
        recipe.level.to_string(),
        recipe.time_minutes,
        score_badge(score)
    );
}

fn print_recipe(recipe: &Recipe, score: u8, availability: &[bool]) {
    println!("{}  {}", recipe.id.to_string().cyan(), recipe.name.bold());
    if !recipe.image.is_empty() {
        println!("  Image: {}", recipe.image);
    }
    println!("  Level: {}, {} minutes", recipe.level, recipe.time_minutes);
    println!("  Ingredients available: {}", score_badge(score));
    for (ingredient, available) in recipe.ingredients.iter().zip(availability) {
        let mark = if *available {
            "+".green()
        } else {
            "-".red()
        };
        println!("    {} {}", mark, ingredient);
    }
    println!("  Instructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("    {}. {}", i + 1, step);
    }
}
