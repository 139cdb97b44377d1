//! Validated value objects as a cure for primitive obsession.
//!
//! Raw `i64`s and `String`s let a quantity be negative, an email lack an
//! `@`, and a phone number be swapped for a password. This crate replaces
//! them with single-field newtypes that can only be obtained through a
//! smart constructor, and assembles those into composite entities.
//!
//! # Core Components
//!
//! - [`value_objects`] - `Quantity`, `PersonName`, `EmailAddress`,
//!   `PhoneNumber`, `Password`, `ItemName`, `UnitPrice`
//! - [`entity`] - `Order` and `User`, built field by field from raw input
//! - [`demonstration`] - Runs the exercises and reports each outcome
//!
//! # Quick Start
//!
//! ```rust
//! use validated_values::entity::{UserInput, create_user};
//! use validated_values::ValidationError;
//!
//! let result = create_user(UserInput {
//!     name: "Alice Dupont".to_string(),
//!     email: "alice@example.com".to_string(),
//!     phone: "123".to_string(),
//!     password: "secret123".to_string(),
//! });
//!
//! match result {
//!     Err(ValidationError::InvalidFormat { attribute, .. }) => assert_eq!(attribute, "phone"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod demonstration;
pub mod entity;
pub mod error;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use entity::{Order, User, UserBuilder, UserInput, create_order, create_user};
pub use error::{ValidationError, ValidationResult};
pub use value_objects::{
    EmailAddress, ItemName, Password, PersonName, PhoneNumber, Quantity, UnitPrice, ValueObject,
};
