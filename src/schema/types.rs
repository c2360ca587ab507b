//! Schema types
//!
//! A [`Schema`] is a declarative description of one raw resource record:
//! which fields exist, their primitive type, and whether the upstream
//! service may send `null` for them. Schemas are plain data; the generic
//! checker in `validate.rs` interprets them.

use serde_json::Value;

/// Primitive type of a raw field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// JSON string
    String,
    /// JSON number with no fractional part
    Integer,
    /// Any JSON number
    Float,
    /// JSON boolean
    Boolean,
    /// String holding `YYYY-MM-DD`, optionally followed by `T` and a
    /// time of day
    Date,
}

impl FieldType {
    /// Human-readable name used in validation errors
    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date string",
        }
    }

    /// Check a non-null JSON value against this type
    pub(crate) fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.as_i64().is_some(),
            FieldType::Float => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Date => value
                .as_str()
                .is_some_and(super::validate::is_date_string),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One declared field of a resource record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Upstream field name, e.g. `AlaleiriId`
    pub name: &'static str,
    /// Expected primitive type
    pub ty: FieldType,
    /// Whether upstream may send `null` (or omit the key) for this field
    pub nullable: bool,
}

/// Declarative shape of one raw resource record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Resource this schema describes, used in validation errors
    pub resource: &'static str,
    /// Declared fields, in declaration order
    pub fields: Vec<Field>,
}

impl Schema {
    /// Start a schema for the named resource
    pub fn object(resource: &'static str) -> Self {
        Self {
            resource,
            fields: Vec::new(),
        }
    }

    /// Declare a required field
    #[must_use]
    pub fn required(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(Field {
            name,
            ty,
            nullable: false,
        });
        self
    }

    /// Declare a nullable field
    #[must_use]
    pub fn nullable(mut self, name: &'static str, ty: FieldType) -> Self {
        self.fields.push(Field {
            name,
            ty,
            nullable: true,
        });
        self
    }

    /// Embed the field set of a shared fragment
    #[must_use]
    pub fn embed(mut self, fragment: &Schema) -> Self {
        self.fields.extend(fragment.fields.iter().copied());
        self
    }

    /// Look up a declared field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
