//! Core trait shared by every validated value object.
//!
//! A value object wraps exactly one primitive and can only be obtained through
//! its smart constructor. This trait exposes that constructor generically so
//! entity builders and tests can treat all value objects uniformly.

use crate::error::{ValidationError, ValidationResult};
use serde_json::Value;
use std::fmt::Debug;

/// Core trait for all validated value objects.
///
/// Implementors guarantee that any instance in existence has passed every
/// predicate registered for its type. There is no mutating API; the only way
/// to get a different value is to construct a new one.
pub trait ValueObject: Debug + Clone + PartialEq + Send + Sync + Sized {
    /// The primitive this value object wraps
    type Raw;

    /// Attribute name used in error reports and JSON records
    const ATTRIBUTE: &'static str;

    /// Run every predicate against `raw` and wrap it on success
    fn construct(raw: Self::Raw) -> ValidationResult<Self>;

    /// Give back the (normalized) primitive
    fn into_raw(self) -> Self::Raw;

    /// Construct from an untyped JSON value
    fn from_json_value(value: &Value) -> ValidationResult<Self>;
}

/// Human-readable name of a JSON value's type, for error reports.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a string from a JSON value, reporting `attribute` on mismatch.
pub(crate) fn expect_string(attribute: &str, value: &Value) -> ValidationResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ValidationError::invalid_type(attribute, "string", json_type_name(value)))
}

/// Implements [`ValueObject`], `TryFrom` and validating `Deserialize` for a
/// single-field `String` newtype whose inherent `new` is the smart constructor.
macro_rules! impl_text_value_object {
    ($type:ty, $attr:expr) => {
        impl $crate::value_objects::ValueObject for $type {
            type Raw = String;

            const ATTRIBUTE: &'static str = $attr;

            fn construct(raw: String) -> $crate::error::ValidationResult<Self> {
                Self::new(raw)
            }

            fn into_raw(self) -> String {
                self.0
            }

            fn from_json_value(value: &serde_json::Value) -> $crate::error::ValidationResult<Self> {
                let raw = $crate::value_objects::value_object_trait::expect_string($attr, value)?;
                Self::new(raw)
            }
        }

        impl TryFrom<String> for $type {
            type Error = $crate::error::ValidationError;

            fn try_from(value: String) -> $crate::error::ValidationResult<Self> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $type {
            type Error = $crate::error::ValidationError;

            fn try_from(value: &str) -> $crate::error::ValidationResult<Self> {
                Self::new(value.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(value).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_text_value_object;
