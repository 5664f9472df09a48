//! # Larder - a CLI food inventory and recipe matcher
//!
//! Larder tracks perishable foods with expiry dates and a recipe collection,
//! and scores each recipe by how many of its ingredients are currently in
//! your inventory. Both collections persist as JSON blobs in a local data
//! directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a larder in the current directory
//! larder init
//!
//! # Record a food
//! larder food add "Milk" --quantity 1 --unit l --category Dairy --expires 2026-09-04
//!
//! # Record a recipe
//! larder recipe add "Pancakes" --level easy --time 20 -i Flour -i Eggs -i Milk \
//!     -s "Whisk everything together" -s "Fry in a hot pan"
//!
//! # See what you can cook
//! larder recipe match
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`matching`]: Ingredient-to-inventory match scoring
//! - [`model`]: Data models (Food, Recipe, Unit, Difficulty)
//! - [`storage`]: Blob-backed collection stores
//! - [`search`]: Query parsing for food and recipe search
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.larder.toml` configuration files and data-directory discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `LarderError` enum and `Result<T>` type alias.
pub mod error;

/// Ingredient-to-inventory matching.
///
/// Text normalization and the heuristic match score.
pub mod matching;

/// Data models for foods and recipes.
///
/// Includes `Food`, `Recipe`, `Unit`, and `Difficulty`.
pub mod model;

/// Blob-backed storage layer.
///
/// Handles loading and persisting the food and recipe collections.
pub mod storage;

/// Input validation utilities.
///
/// Validates names, quantities, times, and list entries before mutations.
pub mod validation;

pub mod logging;
pub mod search;
