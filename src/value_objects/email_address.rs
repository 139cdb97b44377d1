//! EmailAddress value object for user contact addresses.
//!
//! Addresses are normalized to lower case so two spellings of the same
//! mailbox compare equal.

use super::value_object_trait::impl_text_value_object;
use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated, lower-cased email address.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must not contain whitespace
/// - Must have the shape `local@domain.tld`: exactly one `@`, a non-empty
///   local part, and a domain containing a dot with no empty labels
///
/// Uniqueness of an address across users is not checked here.
///
/// ## Examples
///
/// ```rust
/// use validated_values::value_objects::EmailAddress;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let email = EmailAddress::new("ALICE@EXAMPLE.COM".to_string())?;
///     assert_eq!(email.as_str(), "alice@example.com");
///     assert_eq!(email.domain(), "example.com");
///
///     assert!(EmailAddress::new("not-an-email".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress with validation.
    ///
    /// Surrounding whitespace is removed and the address is lower-cased
    /// after it passes validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        let trimmed = value.trim();
        Self::validate_format(trimmed)?;
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Get the string representation of the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty(Self::ATTRIBUTE));
        }

        if value.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                "must not contain whitespace",
            ));
        }

        let mut parts = value.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!("'{}' must contain exactly one '@'", value),
            ));
        };

        if local.is_empty() {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                "local part before '@' cannot be empty",
            ));
        }

        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(ValidationError::invalid_format(
                Self::ATTRIBUTE,
                format!("'{}' is not a valid domain, expected domain.tld", domain),
            ));
        }

        Ok(())
    }
}

impl_text_value_object!(EmailAddress, "email");

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
