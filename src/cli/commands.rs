use crate::model::{Difficulty, Unit};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larder")]
#[command(
    author,
    version,
    about = "A CLI food inventory and recipe matcher for your kitchen"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new larder in the current directory
    Init,

    /// Manage the food inventory
    #[command(visible_alias = "f")]
    Food {
        #[command(subcommand)]
        command: FoodCommands,
    },

    /// Manage the recipe collection
    #[command(visible_alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
}

#[derive(Subcommand)]
pub enum FoodCommands {
    /// Add a food to the inventory
    #[command(visible_alias = "a", visible_alias = "new")]
    Add {
        /// Name of the food
        name: String,

        /// Quantity on hand
        #[arg(short, long, default_value_t = 1.0)]
        quantity: f64,

        /// Measurement unit
        #[arg(short, long, value_enum, default_value = "pieces")]
        unit: UnitArg,

        /// Category (e.g. Dairy, Vegetables)
        #[arg(short, long)]
        category: String,

        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expires: NaiveDate,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List foods in the inventory
    #[command(visible_alias = "ls")]
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,

        /// Only show foods expiring soon
        #[arg(long)]
        expiring: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single food
    Show {
        /// Food id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of a food
    Update {
        /// Food id
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long)]
        quantity: Option<f64>,

        /// New unit
        #[arg(short, long, value_enum)]
        unit: Option<UnitArg>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expires: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a food from the inventory
    #[command(visible_alias = "rm")]
    Delete {
        /// Food id
        id: i64,
    },

    /// Search foods by name or category
    Search {
        /// Query: substring, "regex:PATTERN", or "field:pattern"
        /// (fields: name, category)
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a recipe to the collection
    #[command(visible_alias = "a", visible_alias = "new")]
    Add {
        /// Name of the recipe
        name: String,

        /// Image URL (stored, never fetched)
        #[arg(long)]
        image: Option<String>,

        /// Difficulty level
        #[arg(short, long, value_enum, default_value = "easy")]
        level: DifficultyArg,

        /// Preparation time in minutes
        #[arg(short, long)]
        time: u32,

        /// Ingredient (repeatable, in order)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,

        /// Instruction step (repeatable, in order)
        #[arg(short = 's', long = "step")]
        steps: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recipes with their inventory match scores
    #[command(visible_alias = "ls")]
    List {
        /// Filter by difficulty level
        #[arg(short, long, value_enum)]
        level: Option<DifficultyArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a recipe with per-ingredient availability
    Show {
        /// Recipe id
        id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update fields of a recipe
    Update {
        /// Recipe id
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New image URL
        #[arg(long)]
        image: Option<String>,

        /// New difficulty level
        #[arg(short, long, value_enum)]
        level: Option<DifficultyArg>,

        /// New preparation time in minutes
        #[arg(short, long)]
        time: Option<u32>,

        /// Replace the ingredient list (repeatable, in order)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,

        /// Replace the instruction list (repeatable, in order)
        #[arg(short = 's', long = "step")]
        steps: Vec<String>,

        /// Append an ingredient
        #[arg(long)]
        add_ingredient: Vec<String>,

        /// Remove an ingredient by exact name
        #[arg(long)]
        remove_ingredient: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a recipe from the collection
    #[command(visible_alias = "rm")]
    Delete {
        /// Recipe id
        id: i64,
    },

    /// Rank recipes by match score, or break down one recipe's ingredients
    Match {
        /// Recipe id (omit to rank all recipes)
        id: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search recipes by name, ingredient, or step
    Search {
        /// Query: substring, "regex:PATTERN", or "field:pattern"
        /// (fields: name, ingredient, step)
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum UnitArg {
    Pieces,
    #[value(alias = "kilograms")]
    Kg,
    #[value(alias = "liters")]
    L,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Pieces => Unit::Pieces,
            UnitArg::Kg => Unit::Kilograms,
            UnitArg::L => Unit::Liters,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}
