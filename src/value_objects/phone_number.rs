//! PhoneNumber value object for French mobile numbers.
//!
//! This module provides a type-safe wrapper around a ten digit national
//! mobile number. Only the approved mobile prefixes are accepted.

use super::value_object_trait::impl_text_value_object;
use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated mobile phone number.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must be exactly [`PhoneNumber::LENGTH`] ASCII digits, no separators
/// - Must start with one of [`PhoneNumber::ALLOWED_PREFIXES`]
///
/// ## Examples
///
/// ```rust
/// use validated_values::value_objects::PhoneNumber;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let phone = PhoneNumber::new("0612345678".to_string())?;
///     assert_eq!(phone.prefix(), "06");
///
///     assert!(PhoneNumber::new("123".to_string()).is_err());
///     assert!(PhoneNumber::new("0512345678".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Number of digits in a national number
    pub const LENGTH: usize = 10;

    /// Approved leading digit pairs
    pub const ALLOWED_PREFIXES: [&'static str; 2] = ["06", "07"];

    /// Create a new PhoneNumber with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(PhoneNumber)` - If the number has ten digits and an approved prefix
    /// * `Err(ValidationError)` - If the number violates validation rules
    pub fn new(value: String) -> ValidationResult<Self> {
        let trimmed = value.trim();
        Self::validate_phone_value(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string representation of the number.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two leading digits.
    pub fn prefix(&self) -> &str {
        &self.0[..2]
    }

    /// Format in international E.164 form, e.g. `+33612345678`.
    pub fn to_international(&self) -> String {
        format!("+33{}", &self.0[1..])
    }

    fn validate_phone_value(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty(Self::ATTRIBUTE));
        }

        if value.len() != Self::LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!("'{}' must contain exactly {} digits", value, Self::LENGTH),
            ));
        }

        if !Self::ALLOWED_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
        {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!(
                    "'{}' must start with one of {:?}",
                    value,
                    Self::ALLOWED_PREFIXES
                ),
            ));
        }

        Ok(())
    }
}

impl_text_value_object!(PhoneNumber, "phone");

impl fmt::Display for PhoneNumber {
    /// Groups digits in pairs, e.g. `06 12 34 56 78`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for start in (0..self.0.len()).step_by(2) {
            if start > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", &self.0[start..start + 2])?;
        }
        Ok(())
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
