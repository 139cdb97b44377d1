//! Value objects replacing raw primitives in the order and registration domains.
//!
//! Each value object wraps exactly one primitive and enforces its invariants
//! at construction time, making invalid states unrepresentable.
//!
//! ## Design Principles
//!
//! - **Immutable**: Once created, value objects cannot be modified
//! - **Self-validating**: The smart constructor is the only way in
//! - **Nominal**: An `EmailAddress` can never be passed where a `PhoneNumber`
//!   is expected, even though both hold text
//!
//! ## Usage Pattern
//!
//! ```rust
//! use validated_values::value_objects::{EmailAddress, Quantity};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let quantity = Quantity::new(3)?;
//!     let email = EmailAddress::new("Alice@Example.com".to_string())?;
//!
//!     println!("{} x for {}", quantity, email);
//!     Ok(())
//! }
//! ```

mod email_address;
mod item_name;
mod password;
mod person_name;
mod phone_number;
mod quantity;
mod unit_price;
pub(crate) mod value_object_trait;

pub use email_address::EmailAddress;
pub use item_name::ItemName;
pub use password::Password;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use quantity::Quantity;
pub use unit_price::UnitPrice;
pub use value_object_trait::ValueObject;
