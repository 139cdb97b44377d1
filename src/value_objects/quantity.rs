//! Quantity value object for order line quantities.
//!
//! A raw number lets an order ask for zero, negative, fractional or absurd
//! amounts. Quantity only exists for whole numbers between one and the
//! per-order business limit.

use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use crate::value_objects::value_object_trait::json_type_name;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A validated order quantity.
///
/// ## Validation Rules
///
/// Checked in this order, the first failure is reported:
///
/// - Must be a whole number
/// - Must be positive
/// - Must not exceed [`Quantity::MAX`] units per order
///
/// ## Examples
///
/// ```rust
/// use validated_values::value_objects::Quantity;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let quantity = Quantity::new(5)?;
///     assert_eq!(quantity.value(), 5);
///
///     assert!(Quantity::new(-3).is_err());
///     assert!(Quantity::new(50_000).is_err());
///     assert!(Quantity::from_f64(2.5).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity an order may hold
    pub const MIN: i64 = 1;

    /// Largest quantity a single order may hold
    pub const MAX: i64 = 100;

    /// Create a new Quantity from an integer.
    ///
    /// # Returns
    ///
    /// * `Ok(Quantity)` - If `value` is within `MIN..=MAX`
    /// * `Err(ValidationError::NonPositive)` - If `value <= 0`
    /// * `Err(ValidationError::LimitExceeded)` - If `value > MAX`
    pub fn new(value: i64) -> ValidationResult<Self> {
        if value <= 0 {
            return Err(ValidationError::non_positive(Self::ATTRIBUTE, value));
        }

        if value > Self::MAX {
            return Err(ValidationError::limit_exceeded(
                Self::ATTRIBUTE,
                value,
                Self::MAX,
            ));
        }

        u32::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::limit_exceeded(Self::ATTRIBUTE, value, Self::MAX))
    }

    /// Create a new Quantity from a floating point number.
    ///
    /// Rejects fractional and non-finite input before applying the same
    /// bounds as [`Quantity::new`].
    pub fn from_f64(value: f64) -> ValidationResult<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(ValidationError::not_integer(Self::ATTRIBUTE, value));
        }

        if value <= 0.0 {
            return Err(ValidationError::non_positive(Self::ATTRIBUTE, value));
        }

        if value > Self::MAX as f64 {
            return Err(ValidationError::limit_exceeded(
                Self::ATTRIBUTE,
                value,
                Self::MAX,
            ));
        }

        Self::new(value as i64)
    }

    /// Get the number of units.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: i64) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: f64) -> ValidationResult<Self> {
        Self::from_f64(value)
    }
}

impl ValueObject for Quantity {
    type Raw = i64;

    const ATTRIBUTE: &'static str = "quantity";

    fn construct(raw: i64) -> ValidationResult<Self> {
        Self::new(raw)
    }

    fn into_raw(self) -> i64 {
        i64::from(self.0)
    }

    fn from_json_value(value: &Value) -> ValidationResult<Self> {
        let Value::Number(number) = value else {
            return Err(ValidationError::invalid_type(
                Self::ATTRIBUTE,
                "integer",
                json_type_name(value),
            ));
        };

        if let Some(integer) = number.as_i64() {
            Self::new(integer)
        } else if let Some(unsigned) = number.as_u64() {
            // Only reachable above i64::MAX
            Err(ValidationError::limit_exceeded(
                Self::ATTRIBUTE,
                unsigned,
                Self::MAX,
            ))
        } else {
            // Every JSON number has a lossy f64 view
            Self::from_f64(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64(value).map_err(serde::de::Error::custom)
    }
}
