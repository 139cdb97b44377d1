//! Field extraction from untyped JSON records.
//!
//! Entity builders accept a JSON object mapping field names to raw values.
//! Each field is handed to its value object's constructor unchanged.

use crate::error::{ValidationError, ValidationResult};
use crate::value_objects::ValueObject;
use crate::value_objects::value_object_trait::json_type_name;
use serde_json::{Map, Value};

/// Borrowed view over a JSON object being turned into an entity.
#[derive(Debug)]
pub(crate) struct Record<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// Wrap `value`, which must be a JSON object.
    pub(crate) fn new(entity: &str, value: &'a Value) -> ValidationResult<Self> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or_else(|| ValidationError::invalid_type(entity, "object", json_type_name(value)))
    }

    /// Construct the value object stored under `T::ATTRIBUTE`.
    ///
    /// An absent key and an explicit `null` are both reported as missing.
    pub(crate) fn field<T: ValueObject>(&self) -> ValidationResult<T> {
        let raw = self
            .fields
            .get(T::ATTRIBUTE)
            .filter(|value| !value.is_null())
            .ok_or_else(|| ValidationError::missing_required(T::ATTRIBUTE))?;
        T::from_json_value(raw)
    }
}
