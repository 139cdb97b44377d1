//! Common test utilities for value object and entity testing.
//!
//! Provides assertion macros and fixtures shared by the integration tests.

#![allow(dead_code, unused_macros)]

pub mod fixtures;

/// Assert that `$result` failed with `$variant` on `$attribute`.
macro_rules! assert_rule_violation {
    ($result:expr, $attribute:expr, $variant:pat) => {
        match $result {
            Err(err @ $variant) => assert_eq!(
                err.attribute(),
                $attribute,
                "Error {:?} reported the wrong attribute",
                err
            ),
            Ok(value) => panic!(
                "Expected {} to be rejected, but got {:?}",
                $attribute, value
            ),
            Err(other) => panic!(
                "Expected {} on {}, got {:?}",
                stringify!($variant),
                $attribute,
                other
            ),
        }
    };
}

/// Custom assertion macro for specific error messages
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err.to_string(),
                $substring
            ),
            Ok(_) => panic!(
                "Expected error containing '{}', but validation passed",
                $substring
            ),
        }
    };
}
