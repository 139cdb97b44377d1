//! ItemName value object for menu items on an order.

use super::value_object_trait::impl_text_value_object;
use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated, trimmed item name such as `"Pizza"`.
///
/// ## Validation Rules
///
/// - Must not be empty or whitespace only
/// - Must not exceed [`ItemName::MAX_LENGTH`] characters after trimming
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Maximum number of characters after trimming
    pub const MAX_LENGTH: usize = 100;

    /// Create a new ItemName with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty(Self::ATTRIBUTE));
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!(
                    "exceeds maximum length of {} characters, got {}",
                    Self::MAX_LENGTH,
                    length
                ),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the string representation of the item name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_text_value_object!(ItemName, "itemName");

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ItemName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
