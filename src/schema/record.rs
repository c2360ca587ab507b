//! Validated record accessors
//!
//! After a record has passed [`Schema::check`](super::Schema::check),
//! transformers read its fields through a [`ValidatedRecord`]. Every
//! accessor is fallible rather than panicking: a transformer asking for
//! a field the schema never declared surfaces as a [`ValidationError`],
//! not a crash.
//!
//! Normalization happens here: an explicit `null` and an omitted key
//! both read as absent, so mapping logic only ever sees two states.

use super::validate::{JsonObject, ValidationError};
use crate::types::Id;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Accessor wrapper over a schema-checked JSON object
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRecord<'a> {
    resource: &'a str,
    object: &'a JsonObject,
}

impl<'a> ValidatedRecord<'a> {
    pub(crate) fn new(resource: &'a str, object: &'a JsonObject) -> Self {
        Self { resource, object }
    }

    /// Present, non-null value of a field
    fn value(&self, name: &str) -> Option<&'a Value> {
        match self.object.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn missing(&self, name: &str) -> ValidationError {
        ValidationError::missing(self.resource, name)
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Value) -> ValidationError {
        ValidationError::mismatch(self.resource, name, expected, found)
    }

    /// Required string field
    pub fn string(&self, name: &str) -> Result<String, ValidationError> {
        let value = self.value(name).ok_or_else(|| self.missing(name))?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(name, "string", value))
    }

    /// Optional string field; `null` and a missing key read as absent
    pub fn opt_string(&self, name: &str) -> Option<String> {
        self.value(name)?.as_str().map(str::to_string)
    }

    /// Optional text field where the upstream service uses the empty
    /// string interchangeably with `null`
    pub fn opt_text(&self, name: &str) -> Option<String> {
        self.opt_string(name).filter(|text| !text.is_empty())
    }

    /// Required integer field
    pub fn int(&self, name: &str) -> Result<i64, ValidationError> {
        let value = self.value(name).ok_or_else(|| self.missing(name))?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(name, "integer", value))
    }

    /// Optional integer field
    pub fn opt_int(&self, name: &str) -> Option<i64> {
        self.value(name)?.as_i64()
    }

    /// Required identifier field
    pub fn id<T>(&self, name: &str) -> Result<Id<T>, ValidationError> {
        self.int(name).map(Id::new)
    }

    /// Optional identifier field
    pub fn opt_id<T>(&self, name: &str) -> Option<Id<T>> {
        self.opt_int(name).map(Id::new)
    }

    /// Required boolean field
    pub fn boolean(&self, name: &str) -> Result<bool, ValidationError> {
        let value = self.value(name).ok_or_else(|| self.missing(name))?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(name, "boolean", value))
    }

    /// Required date field; any time-of-day part is dropped
    pub fn date(&self, name: &str) -> Result<NaiveDate, ValidationError> {
        let raw = self.string(name)?;
        self.parse_date(name, &raw)
    }

    /// Optional date field
    pub fn opt_date(&self, name: &str) -> Result<Option<NaiveDate>, ValidationError> {
        match self.opt_string(name) {
            Some(raw) => self.parse_date(name, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Required date-time field; a date-only string reads as midnight
    pub fn date_time(&self, name: &str) -> Result<NaiveDateTime, ValidationError> {
        let raw = self.string(name)?;
        self.parse_date_time(name, &raw)
    }

    /// Optional date-time field
    pub fn opt_date_time(&self, name: &str) -> Result<Option<NaiveDateTime>, ValidationError> {
        match self.opt_string(name) {
            Some(raw) => self.parse_date_time(name, &raw).map(Some),
            None => Ok(None),
        }
    }

    fn parse_date(&self, name: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
        let date_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| self.mismatch(name, "date string", &Value::String(raw.to_string())))
    }

    fn parse_date_time(&self, name: &str, raw: &str) -> Result<NaiveDateTime, ValidationError> {
        if raw.contains('T') {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
                .map_err(|_| {
                    self.mismatch(name, "date-time string", &Value::String(raw.to_string()))
                })
        } else {
            self.parse_date(name, raw).map(NaiveDateTime::from)
        }
    }
}
