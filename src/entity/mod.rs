//! Composite entities built from value objects.
//!
//! Builders defer to each field's smart constructor and never re-validate.
//! There are no cross-field rules: an entity is well formed exactly when
//! every one of its fields could be constructed.

mod order;
mod record;
mod user;

pub use order::{Order, create_order};
pub use user::{User, UserBuilder, UserInput, create_user};
