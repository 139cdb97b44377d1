//! PersonName value object for a registered user's name.
//!
//! This module provides a type-safe wrapper around a person's display name.
//! Names are trimmed on construction, so the stored value never carries
//! leading or trailing whitespace.

use super::value_object_trait::impl_text_value_object;
use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated person name.
///
/// ## Validation Rules
///
/// - Must not be empty or whitespace only
/// - Trimmed length must be between [`PersonName::MIN_LENGTH`] and
///   [`PersonName::MAX_LENGTH`] characters
/// - Only letters, spaces and hyphens are allowed
///
/// ## Examples
///
/// ```rust
/// use validated_values::value_objects::PersonName;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = PersonName::new("  Alice Dupont ".to_string())?;
///     assert_eq!(name.as_str(), "Alice Dupont");
///
///     assert!(PersonName::new("B".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Minimum number of characters after trimming
    pub const MIN_LENGTH: usize = 2;

    /// Maximum number of characters after trimming
    pub const MAX_LENGTH: usize = 50;

    /// Create a new PersonName with validation.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw name; surrounding whitespace is removed
    ///
    /// # Returns
    ///
    /// * `Ok(PersonName)` - If the trimmed value is valid
    /// * `Err(ValidationError)` - If the value violates validation rules
    pub fn new(value: String) -> ValidationResult<Self> {
        let trimmed = value.trim();
        Self::validate_format(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string representation of the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty(Self::ATTRIBUTE));
        }

        let length = value.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!(
                    "must be between {} and {} characters, got {}",
                    Self::MIN_LENGTH,
                    Self::MAX_LENGTH,
                    length
                ),
            ));
        }

        if let Some(invalid) = value
            .chars()
            .find(|c| !(c.is_alphabetic() || *c == ' ' || *c == '-'))
        {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!(
                    "'{}' is not allowed, only letters, spaces and hyphens are",
                    invalid
                ),
            ));
        }

        Ok(())
    }
}

impl_text_value_object!(PersonName, "name");

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
