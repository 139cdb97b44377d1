//! Registered user assembled from validated fields.
//!
//! Three ways in, all ending in the same smart constructors:
//!
//! - [`create_user`] from a [`UserInput`] of raw strings
//! - [`User::from_json`] from a JSON object
//! - [`UserBuilder`] from value objects that were validated earlier

use super::record::Record;
use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::{EmailAddress, Password, PersonName, PhoneNumber, ValueObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Raw registration form, one untrusted string per field.
///
/// Fields are named so that arguments can never be passed in the wrong order.
#[derive(Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl fmt::Debug for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"********")
            .finish()
    }
}

/// A registered user.
///
/// The password is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: PersonName,
    email: EmailAddress,
    phone: PhoneNumber,
    #[serde(skip_serializing)]
    password: Password,
}

impl User {
    /// Start a [`UserBuilder`].
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Build a user from a JSON object with `name`, `email`, `phone` and
    /// `password` keys.
    ///
    /// Fields are validated in that order; the first failure is returned.
    pub fn from_json(value: &Value) -> ValidationResult<Self> {
        let record = Record::new("user", value)?;
        Ok(Self {
            name: record.field()?,
            email: record.field()?,
            phone: record.field()?,
            password: record.field()?,
        })
    }

    /// Get the validated name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// Get the normalized email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Get the mobile number.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Get the password; its content stays redacted in `Debug`.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

impl TryFrom<UserInput> for User {
    type Error = ValidationError;

    fn try_from(input: UserInput) -> ValidationResult<Self> {
        create_user(input)
    }
}

/// Create a user from a raw registration form.
///
/// Each field goes through its own smart constructor in the order name,
/// email, phone, password. The first failing field's error is returned
/// unchanged. No cross-field rules are applied.
///
/// # Example
/// ```rust
/// use validated_values::entity::{UserInput, create_user};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let user = create_user(UserInput {
///         name: "Alice Dupont".to_string(),
///         email: "Alice@Example.com".to_string(),
///         phone: "0612345678".to_string(),
///         password: "secret123".to_string(),
///     })?;
///     assert_eq!(user.email().as_str(), "alice@example.com");
///     Ok(())
/// }
/// ```
pub fn create_user(input: UserInput) -> ValidationResult<User> {
    Ok(User {
        name: PersonName::new(input.name)?,
        email: EmailAddress::new(input.email)?,
        phone: PhoneNumber::new(input.phone)?,
        password: Password::new(input.password)?,
    })
}

/// Fluent builder over already validated value objects.
///
/// Since every setter takes a value object, `build` only has to check that
/// nothing was left out.
#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    name: Option<PersonName>,
    email: Option<EmailAddress>,
    phone: Option<PhoneNumber>,
    password: Option<Password>,
}

impl UserBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn with_name(mut self, name: PersonName) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Build the user, failing on the first field that was never set.
    pub fn build(self) -> ValidationResult<User> {
        Ok(User {
            name: required(self.name)?,
            email: required(self.email)?,
            phone: required(self.phone)?,
            password: required(self.password)?,
        })
    }
}

fn required<T: ValueObject>(field: Option<T>) -> ValidationResult<T> {
    field.ok_or_else(|| ValidationError::missing_required(T::ATTRIBUTE))
}
