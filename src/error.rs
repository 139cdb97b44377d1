//! Error types for value object construction.
//!
//! Every failure names the attribute it concerns and the rule that was
//! violated, so callers never have to guess which input was rejected.

/// Validation errors raised by smart constructors and entity builders.
///
/// Each variant corresponds to one kind of broken domain rule. The
/// `attribute` field identifies the field that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Numeric value has a fractional part or is not a finite number
    #[error("{attribute}: must be a whole number, got {value}")]
    NotInteger { attribute: String, value: String },

    /// Numeric value is zero or negative
    #[error("{attribute}: must be positive, got {value}")]
    NonPositive { attribute: String, value: String },

    /// Numeric value is above the business limit
    #[error("{attribute}: {value} exceeds the maximum of {max}")]
    LimitExceeded {
        attribute: String,
        value: String,
        max: i64,
    },

    /// Text does not have the expected shape
    #[error("{attribute}: invalid format, {details}")]
    InvalidFormat { attribute: String, details: String },

    /// Secret does not meet the strength policy
    #[error("{attribute}: too weak, {details}")]
    TooWeak { attribute: String, details: String },

    /// Text is empty or whitespace only
    #[error("{attribute}: value cannot be empty")]
    EmptyValue { attribute: String },

    /// Required field is absent from an input record
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Field of an input record has the wrong JSON type
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidAttributeType {
        attribute: String,
        expected: String,
        actual: String,
    },
}

impl ValidationError {
    /// Create a not-an-integer error
    pub fn not_integer(attribute: impl Into<String>, value: impl ToString) -> Self {
        Self::NotInteger {
            attribute: attribute.into(),
            value: value.to_string(),
        }
    }

    /// Create a non-positive error
    pub fn non_positive(attribute: impl Into<String>, value: impl ToString) -> Self {
        Self::NonPositive {
            attribute: attribute.into(),
            value: value.to_string(),
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(attribute: impl Into<String>, value: impl ToString, max: i64) -> Self {
        Self::LimitExceeded {
            attribute: attribute.into(),
            value: value.to_string(),
            max,
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(attribute: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidFormat {
            attribute: attribute.into(),
            details: details.into(),
        }
    }

    /// Create a too weak error
    pub fn too_weak(attribute: impl Into<String>, details: impl Into<String>) -> Self {
        Self::TooWeak {
            attribute: attribute.into(),
            details: details.into(),
        }
    }

    /// Create an empty value error
    pub fn empty(attribute: impl Into<String>) -> Self {
        Self::EmptyValue {
            attribute: attribute.into(),
        }
    }

    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The attribute this error concerns.
    pub fn attribute(&self) -> &str {
        match self {
            Self::NotInteger { attribute, .. }
            | Self::NonPositive { attribute, .. }
            | Self::LimitExceeded { attribute, .. }
            | Self::InvalidFormat { attribute, .. }
            | Self::TooWeak { attribute, .. }
            | Self::EmptyValue { attribute }
            | Self::MissingRequiredAttribute { attribute }
            | Self::InvalidAttributeType { attribute, .. } => attribute,
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
