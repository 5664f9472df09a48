use super::types::Unit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,

    pub quantity: f64,

    #[serde(default)]
    pub unit: Unit,

    #[serde(default)]
    pub category: String,

    pub expiry_date: NaiveDate,
}

/// A food as entered by the user, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub category: String,
    pub expiry_date: NaiveDate,
}

/// Partial update for a food; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl FoodPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
            && self.category.is_none()
            && self.expiry_date.is_none()
    }

    pub fn apply(&self, food: &mut Food) {
        if let Some(ref name) = self.name {
            food.name = name.clone();
        }
        if let Some(quantity) = self.quantity {
            food.quantity = quantity;
        }
        if let Some(unit) = self.unit {
            food.unit = unit;
        }
        if let Some(ref category) = self.category {
            food.category = category.clone();
        }
        if let Some(expiry_date) = self.expiry_date {
            food.expiry_date = expiry_date;
        }
    }
}

impl Food {
    pub fn new(id: i64, new: NewFood) -> Self {
        Self {
            id,
            name: new.name,
            quantity: new.quantity,
            unit: new.unit,
            category: new.category,
            expiry_date: new.expiry_date,
        }
    }

    /// Calendar days from `today` until the expiry date. Negative once expired.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn is_expiring_soon(&self, today: NaiveDate, threshold_days: i64) -> bool {
        self.days_remaining(today) <= threshold_days
    }
}

impl NewFood {
    pub fn new(name: String, quantity: f64, unit: Unit, expiry_date: NaiveDate) -> Self {
        Self {
            name,
            quantity,
            unit,
            category: String::new(),
            expiry_date,
        }
    }

    pub fn with_category(mut self, category: String) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_remaining() {
        let food = Food::new(
            1,
            NewFood::new("Milk".to_string(), 1.0, Unit::Liters, date(2026, 3, 10)),
        );
        assert_eq!(food.days_remaining(date(2026, 3, 7)), 3);
        assert_eq!(food.days_remaining(date(2026, 3, 10)), 0);
        assert_eq!(food.days_remaining(date(2026, 3, 12)), -2);
    }

    #[test]
    fn test_expiring_soon_threshold() {
        let food = Food::new(
            1,
            NewFood::new("Yogurt".to_string(), 4.0, Unit::Pieces, date(2026, 3, 10)),
        );
        assert!(food.is_expiring_soon(date(2026, 3, 7), 3));
        assert!(!food.is_expiring_soon(date(2026, 3, 1), 3));
        assert!(food.is_expiring_soon(date(2026, 3, 20), 3)); // already expired
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut food = Food::new(
            7,
            NewFood::new("Eggs".to_string(), 12.0, Unit::Pieces, date(2026, 4, 1))
                .with_category("Dairy".to_string()),
        );
        let patch = FoodPatch {
            quantity: Some(6.0),
            ..Default::default()
        };
        patch.apply(&mut food);
        assert_eq!(food.quantity, 6.0);
        assert_eq!(food.name, "Eggs");
        assert_eq!(food.category, "Dairy");
        assert_eq!(food.expiry_date, date(2026, 4, 1));
    }
}
