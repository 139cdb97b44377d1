//! UnitPrice value object for the price of a single item.

use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use crate::value_objects::value_object_trait::json_type_name;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A validated price per unit.
///
/// ## Validation Rules
///
/// - Must be a finite number
/// - Must be strictly positive
/// - Must not exceed [`UnitPrice::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UnitPrice(f64);

impl UnitPrice {
    /// Largest accepted price per unit
    pub const MAX: u32 = 10_000;

    /// Create a new UnitPrice with validation.
    pub fn new(value: f64) -> ValidationResult<Self> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!("must be a finite number, got {}", value),
            ));
        }

        if value <= 0.0 {
            return Err(ValidationError::non_positive(Self::ATTRIBUTE, value));
        }

        if value > f64::from(Self::MAX) {
            return Err(ValidationError::limit_exceeded(
                Self::ATTRIBUTE,
                value,
                i64::from(Self::MAX),
            ));
        }

        Ok(Self(value))
    }

    /// Get the price as a float.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl ValueObject for UnitPrice {
    type Raw = f64;

    const ATTRIBUTE: &'static str = "pricePerUnit";

    fn construct(raw: f64) -> ValidationResult<Self> {
        Self::new(raw)
    }

    fn into_raw(self) -> f64 {
        self.0
    }

    fn from_json_value(value: &Value) -> ValidationResult<Self> {
        let price = value.as_f64().ok_or_else(|| {
            ValidationError::invalid_type(Self::ATTRIBUTE, "number", json_type_name(value))
        })?;
        Self::new(price)
    }
}

impl Serialize for UnitPrice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UnitPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
