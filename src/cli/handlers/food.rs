use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Colorize;

use super::CommandContext;
use crate::cli::commands::FoodCommands;
use crate::error::LarderError;
use crate::model::{Food, FoodPatch, NewFood};
use crate::search::SearchQuery;
use crate::validation;

pub fn handle_food(ctx: &mut CommandContext, command: FoodCommands) -> Result<()> {
    match command {
        FoodCommands::Add {
            name,
            quantity,
            unit,
            category,
            expires,
            json,
        } => {
            validation::validate_name(&name)?;
            validation::validate_category(&category)?;
            validation::validate_quantity(quantity)?;

            let new = NewFood::new(name.trim().to_string(), quantity, unit.into(), expires)
                .with_category(category.trim().to_string());
            let food = ctx.foods.add(new);

            if json {
                println!("{}", serde_json::to_string_pretty(food)?);
            } else {
                println!("{} {} {}", "Added".green(), food.id.to_string().cyan(), food.name);
            }
            Ok(())
        }

        FoodCommands::List {
            category,
            expiring,
            json,
        } => {
            let today = Local::now().date_naive();
            let threshold = ctx.config.larder.expiring_within_days;

            let mut foods: Vec<&Food> = ctx.foods.as_slice().iter().collect();
            if let Some(ref c) = category {
                let c = c.to_lowercase();
                foods.retain(|f| f.category.to_lowercase() == c);
            }
            if expiring {
                foods.retain(|f| f.is_expiring_soon(today, threshold));
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&foods)?);
            } else if foods.is_empty() {
                println!("No foods. Add one with 'larder food add'.");
            } else {
                for food in foods {
                    print_food_line(food, today, threshold);
                }
            }
            Ok(())
        }

        FoodCommands::Show { id, json } => {
            let food = ctx
                .foods
                .get(id)
                .ok_or_else(|| LarderError::NotFound(format!("Food id: {}", id)))?;

            if json {
                println!("{}", serde_json::to_string_pretty(food)?);
            } else {
                print_food(food, Local::now().date_naive());
            }
            Ok(())
        }

        FoodCommands::Update {
            id,
            name,
            quantity,
            unit,
            category,
            expires,
            json,
        } => {
            if let Some(ref n) = name {
                validation::validate_name(n)?;
            }
            if let Some(ref c) = category {
                validation::validate_category(c)?;
            }
            if let Some(q) = quantity {
                validation::validate_quantity(q)?;
            }

            let patch = FoodPatch {
                name: name.map(|n| n.trim().to_string()),
                quantity,
                unit: unit.map(Into::into),
                category: category.map(|c| c.trim().to_string()),
                expiry_date: expires,
            };

            if ctx.foods.get(id).is_none() {
                println!("{} no food with id {}", "Skipped:".yellow(), id);
                return Ok(());
            }
            if patch.is_empty() {
                println!("{} {} (no changes)", "Unchanged".yellow(), id);
                return Ok(());
            }

            ctx.foods.update(id, &patch);
            let food = ctx.foods.get(id).expect("updated food exists");

            if json {
                println!("{}", serde_json::to_string_pretty(food)?);
            } else {
                println!("{} {} {}", "Updated".green(), id.to_string().cyan(), food.name);
            }
            Ok(())
        }

        FoodCommands::Delete { id } => {
            match ctx.foods.get(id).map(|f| f.name.clone()) {
                Some(name) => {
                    ctx.foods.delete(id);
                    println!("{} {} {}", "Deleted".green(), id.to_string().cyan(), name);
                }
                // Deleting something already gone is fine
                None => println!("{} no food with id {}", "Skipped:".yellow(), id),
            }
            Ok(())
        }

        FoodCommands::Search { query, json } => {
            let query = SearchQuery::parse(&query).map_err(LarderError::Parse)?;
            let matches: Vec<&Food> = ctx
                .foods
                .as_slice()
                .iter()
                .filter(|f| query.matches_food(f))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No matching foods.");
            } else {
                let today = Local::now().date_naive();
                let threshold = ctx.config.larder.expiring_within_days;
                for food in matches {
                    print_food_line(food, today, threshold);
                }
            }
            Ok(())
        }
    }
}

fn print_food_line(food: &Food, today: NaiveDate, threshold: i64) {
    let days = food.days_remaining(today);
    let badge = if days < 0 {
        format!("expired {}d ago", -days).red().to_string()
    } else if food.is_expiring_soon(today, threshold) {
        format!("{}d left", days).red().to_string()
    } else {
        format!("{}d left", days).green().to_string()
    };
    println!(
        "{:<15} {:<24} {:>6} {:<6} {:<14} {}",
        food.id.to_string().cyan(),
        food.name,
        food.quantity,
        food.unit.to_string(),
        food.category.dimmed(),
        badge
    );
}

fn print_food(food: &Food, today: NaiveDate) {
    println!("{}  {}", food.id.to_string().cyan(), food.name.bold());
    println!("  Quantity: {} {}", food.quantity, food.unit);
    println!("  Category: {}", food.category);
    println!(
        "  Expires:  {} ({} days)",
        food.expiry_date,
        food.days_remaining(today)
    );
}
