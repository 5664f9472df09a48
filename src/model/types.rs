use crate::error::{LarderError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Measurement unit for a food quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pieces,
    Kilograms,
    Liters,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Pieces => write!(f, "pieces"),
            Unit::Kilograms => write!(f, "kg"),
            Unit::Liters => write!(f, "l"),
        }
    }
}

impl FromStr for Unit {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pieces" | "piece" | "pcs" | "units" => Ok(Unit::Pieces),
            "kilograms" | "kilogram" | "kg" => Ok(Unit::Kilograms),
            "liters" | "liter" | "litres" | "litre" | "l" => Ok(Unit::Liters),
            _ => Err(LarderError::Parse(format!("Invalid unit: {}", s))),
        }
    }
}

/// Difficulty level of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = LarderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" | "difficult" => Ok(Difficulty::Hard),
            _ => Err(LarderError::Parse(format!("Invalid difficulty: {}", s))),
        }
    }
}
