//! Password value object.
//!
//! Passwords are kept exactly as typed. The wrapper never prints its content
//! and is not serializable.

use super::value_object_trait::impl_text_value_object;
use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use std::fmt;

/// A validated password.
///
/// ## Validation Rules
///
/// - Must not be empty
/// - Must be at least [`Password::MIN_LENGTH`] characters long
///
/// ## Examples
///
/// ```rust
/// use validated_values::value_objects::Password;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let password = Password::new("secret123".to_string())?;
///     assert_eq!(format!("{:?}", password), "Password(\"********\")");
///
///     assert!(Password::new("123".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Minimum number of characters
    pub const MIN_LENGTH: usize = 8;

    /// Create a new Password with validation.
    ///
    /// # Returns
    ///
    /// * `Ok(Password)` - If the password is long enough
    /// * `Err(ValidationError::EmptyValue)` - If the password is empty
    /// * `Err(ValidationError::TooWeak)` - If the password is too short
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_strength(&value)?;
        Ok(Self(value))
    }

    /// Expose the secret, e.g. to hand it to a hashing function.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    fn validate_strength(value: &str) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty(Self::ATTRIBUTE));
        }

        let length = value.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(ValidationError::too_weak(
                Self::ATTRIBUTE,
                format!(
                    "must be at least {} characters, got {}",
                    Self::MIN_LENGTH,
                    length
                ),
            ));
        }

        Ok(())
    }
}

impl_text_value_object!(Password, "password");

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"********").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let password = Password::new("secret123".to_string()).unwrap();
        assert_eq!(password.expose_secret(), "secret123");
    }

    #[test]
    fn test_minimum_length_is_inclusive() {
        assert!(Password::new("12345678".to_string()).is_ok());
        assert!(Password::new("1234567".to_string()).is_err());
    }

    #[test]
    fn test_short_password() {
        match Password::new("123".to_string()).unwrap_err() {
            ValidationError::TooWeak { attribute, details } => {
                assert_eq!(attribute, "password");
                assert!(details.contains("got 3"));
            }
            other => panic!("Expected TooWeak error, got: {:?}", other),
        }
    }

    #[test]
    fn test_empty_password() {
        assert!(matches!(
            Password::new(String::new()),
            Err(ValidationError::EmptyValue { .. })
        ));
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let password = Password::new("  spaced  ".to_string()).unwrap();
        assert_eq!(password.expose_secret(), "  spaced  ");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let password = Password::new("secret123".to_string()).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains("secret123"));
    }
}
