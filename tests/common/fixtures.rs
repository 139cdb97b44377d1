//! Test fixtures: known-good raw input and fluent record builders.

use serde_json::{Value, json};
use validated_values::UserInput;

/// A registration form that passes every rule.
pub fn valid_user_input() -> UserInput {
    UserInput {
        name: "Alice Dupont".to_string(),
        email: "alice@example.com".to_string(),
        phone: "0612345678".to_string(),
        password: "secret123".to_string(),
    }
}

/// Builder for JSON registration records, starting from a valid one.
#[derive(Debug, Clone)]
pub struct UserRecordBuilder {
    data: Value,
}

impl UserRecordBuilder {
    pub fn new() -> Self {
        Self {
            data: json!({
                "name": "Alice Dupont",
                "email": "alice@example.com",
                "phone": "0612345678",
                "password": "secret123"
            }),
        }
    }

    /// Replace one field.
    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.data[field] = value;
        self
    }

    /// Drop one field.
    pub fn without(mut self, field: &str) -> Self {
        if let Some(fields) = self.data.as_object_mut() {
            fields.remove(field);
        }
        self
    }

    pub fn build(self) -> Value {
        self.data
    }
}

/// A valid JSON order record.
pub fn valid_order_record() -> Value {
    json!({
        "itemName": "Pizza",
        "quantity": 3,
        "pricePerUnit": 15.0
    })
}
