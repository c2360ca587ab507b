//! Generic schema checker
//!
//! One pure function interprets every [`Schema`]: no per-resource
//! validation code exists anywhere else. Failures carry the offending
//! field, what was expected, what was found, and (once the engine
//! attaches it) the raw payload, so a broken upstream response is
//! debuggable without re-querying.

use super::types::Schema;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;

/// A JSON object, as decoded by `serde_json`
pub(crate) type JsonObject = Map<String, Value>;

// Four-digit year, two-digit month and day, optional `T` + time of day.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(T\d{2}:\d{2}(:\d{2}(\.\d+)?)?)?$")
        .expect("date pattern is a valid regex")
});

/// Check whether a string has the accepted date or date-time form
pub(crate) fn is_date_string(raw: &str) -> bool {
    DATE_PATTERN.is_match(raw)
}

/// A response body decoded but did not conform to the resource schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Resource whose schema was violated
    pub resource: String,
    /// Offending field (`<record>` when the record itself is malformed)
    pub field: String,
    /// What the schema expected
    pub expected: String,
    /// What the response actually held
    pub found: String,
    /// Serialized raw record, attached by the engine for diagnosis
    pub payload: Option<String>,
}

impl ValidationError {
    /// A required field was absent from the record
    pub fn missing(resource: &str, field: &str) -> Self {
        Self {
            resource: resource.to_string(),
            field: field.to_string(),
            expected: "required field".to_string(),
            found: "missing key".to_string(),
            payload: None,
        }
    }

    /// A field held a value of the wrong shape
    pub fn mismatch(resource: &str, field: &str, expected: impl Into<String>, found: &Value) -> Self {
        Self {
            resource: resource.to_string(),
            field: field.to_string(),
            expected: expected.into(),
            found: render_value(found),
            payload: None,
        }
    }

    /// Attach the raw record that failed, for diagnostics
    #[must_use]
    pub fn with_payload(mut self, raw: &Value) -> Self {
        self.payload = Some(raw.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation failed for '{}': field '{}' expected {}, found {}",
            self.resource, self.field, self.expected, self.found
        )?;
        if let Some(payload) = &self.payload {
            write!(f, "; payload: {payload}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Short rendering of a JSON value for error messages
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.chars().count() <= 40 => format!("string \"{s}\""),
        Value::String(s) => format!("string \"{}…\"", s.chars().take(40).collect::<String>()),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

impl Schema {
    /// Check a decoded JSON value against this schema.
    ///
    /// Returns the record's object map when it conforms. Pure: no side
    /// effects, the value is not modified. A nullable field tolerates an
    /// omitted key as well as an explicit `null`; undeclared keys are
    /// ignored.
    pub fn check<'a>(&self, value: &'a Value) -> Result<&'a JsonObject, ValidationError> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::mismatch(self.resource, "<record>", "object", value))?;

        for field in &self.fields {
            match object.get(field.name) {
                None => {
                    if !field.nullable {
                        return Err(ValidationError::missing(self.resource, field.name));
                    }
                }
                Some(Value::Null) => {
                    if !field.nullable {
                        return Err(ValidationError::mismatch(
                            self.resource,
                            field.name,
                            field.ty.name(),
                            &Value::Null,
                        ));
                    }
                }
                Some(actual) => {
                    if !field.ty.matches(actual) {
                        let expected = if field.nullable {
                            format!("{} | null", field.ty.name())
                        } else {
                            field.ty.name().to_string()
                        };
                        return Err(ValidationError::mismatch(
                            self.resource,
                            field.name,
                            expected,
                            actual,
                        ));
                    }
                }
            }
        }

        Ok(object)
    }
}
