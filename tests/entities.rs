//! Entity Builder Tests
//!
//! Covers how `Order` and `User` are assembled from raw input: field order,
//! error propagation, JSON records and the typed builder.

#[macro_use]
mod common;

use common::fixtures::{UserRecordBuilder, valid_order_record, valid_user_input};
use serde_json::json;
use validated_values::ValidationError;
use validated_values::entity::{Order, User, UserInput, create_order, create_user};
use validated_values::value_objects::{EmailAddress, Password, PersonName, PhoneNumber};

#[test]
fn test_same_input_twice_gives_equal_users() {
    let first = create_user(valid_user_input()).unwrap();
    let second = create_user(valid_user_input()).unwrap();

    assert_eq!(first.name(), second.name());
    assert_eq!(first.email(), second.email());
    assert_eq!(first.phone(), second.phone());
    assert_eq!(first.password(), second.password());
    assert_eq!(first, second);
}

#[test]
fn test_invalid_phone_only_blames_phone() {
    let input = UserInput {
        phone: "123".to_string(),
        ..valid_user_input()
    };

    let error = create_user(input).unwrap_err();
    assert_eq!(error.attribute(), "phone");
    assert!(error.to_string().starts_with("phone:"));
}

#[test]
fn test_each_broken_field_is_named() {
    let cases = [
        (
            "name",
            UserInput {
                name: "B".to_string(),
                ..valid_user_input()
            },
        ),
        (
            "email",
            UserInput {
                email: "not-an-email".to_string(),
                ..valid_user_input()
            },
        ),
        (
            "phone",
            UserInput {
                phone: "0512345678".to_string(),
                ..valid_user_input()
            },
        ),
        (
            "password",
            UserInput {
                password: "123".to_string(),
                ..valid_user_input()
            },
        ),
    ];

    for (attribute, input) in cases {
        let error = create_user(input).unwrap_err();
        assert_eq!(error.attribute(), attribute);
    }
}

#[test]
fn test_user_from_json_record() {
    let user = User::from_json(&UserRecordBuilder::new().build()).unwrap();
    assert_eq!(user, create_user(valid_user_input()).unwrap());
}

#[test]
fn test_user_record_missing_field() {
    let record = UserRecordBuilder::new().without("password").build();
    assert_eq!(
        User::from_json(&record).unwrap_err(),
        ValidationError::missing_required("password")
    );
}

#[test]
fn test_user_record_with_wrong_type() {
    let record = UserRecordBuilder::new()
        .with("phone", json!(612345678))
        .build();
    assert_rule_violation!(
        User::from_json(&record),
        "phone",
        ValidationError::InvalidAttributeType { .. }
    );
}

#[test]
fn test_user_record_must_be_an_object() {
    assert_rule_violation!(
        User::from_json(&json!("alice")),
        "user",
        ValidationError::InvalidAttributeType { .. }
    );
}

#[test]
fn test_builder_matches_create_user() {
    let built = User::builder()
        .with_name(PersonName::try_from("Alice Dupont").unwrap())
        .with_email(EmailAddress::try_from("alice@example.com").unwrap())
        .with_phone(PhoneNumber::try_from("0612345678").unwrap())
        .with_password(Password::try_from("secret123").unwrap())
        .build()
        .unwrap();
    assert_eq!(built, create_user(valid_user_input()).unwrap());
}

#[test]
fn test_order_total() {
    let order = create_order("Pizza", 4, 15.0).unwrap();
    assert_eq!(order.total(), 60.0);
}

#[test]
fn test_order_rejections() {
    assert_rule_violation!(
        create_order("Pizza", -3, 15.0),
        "quantity",
        ValidationError::NonPositive { .. }
    );
    assert_rule_violation!(
        create_order("Coffee", 50_000, 3.0),
        "quantity",
        ValidationError::LimitExceeded { .. }
    );
    assert_rule_violation!(
        create_order("   ", 1, 3.0),
        "itemName",
        ValidationError::EmptyValue { .. }
    );
}

#[test]
fn test_order_from_json_record() {
    let order = Order::from_json(&valid_order_record()).unwrap();
    assert_eq!(order, create_order("Pizza", 3, 15.0).unwrap());
}
