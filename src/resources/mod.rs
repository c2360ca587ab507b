//! Resource definitions
//!
//! One table entry per upstream endpoint, pairing the endpoint name
//! with its declared [`Schema`] and the pure transformer that turns a
//! validated raw record into a domain entity. The request engine in
//! [`crate::client`] is generic over these entries; no per-resource
//! fetch code exists anywhere.
//!
//! Field renaming is a fixed bijection per resource: every raw field
//! consumed by a schema is either mapped to exactly one domain field or
//! intentionally dropped (the drops are called out in comments).

mod camp_groups;
mod event;
mod extras;
mod local_groups;
mod participants;
mod payments;

pub use camp_groups::*;
pub use event::*;
pub use extras::*;
pub use local_groups::*;
pub use participants::*;
pub use payments::*;

use crate::model::LocalizedText;
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use once_cell::sync::Lazy;

/// Transformer from a validated raw record to a domain entity
pub type MapFn<T> = fn(&ValidatedRecord<'_>) -> Result<T, ValidationError>;

/// One entry of the resource table: endpoint name, schema, transformer
pub struct Resource<T> {
    /// Upstream endpoint name, e.g. `TapahtumaAlaleirit`
    pub name: &'static str,
    /// Declared shape of one raw record
    pub schema: &'static Schema,
    /// Pure mapping from validated record to domain entity
    pub map: MapFn<T>,
}

impl<T> Resource<T> {
    pub(crate) fn new(schema: &'static Schema, map: MapFn<T>) -> Self {
        Self {
            name: schema.resource,
            schema,
            map,
        }
    }
}

// Localized-name fragment shared by every resource embedding a name.
pub(crate) static LOCALIZED_NAME: Lazy<Schema> = Lazy::new(|| {
    Schema::object("LokalisoituNimi")
        .required("Nimi", FieldType::String)
        .nullable("NimiSE", FieldType::String)
        .nullable("NimiEN", FieldType::String)
});

// The upstream service uses the empty string interchangeably with null
// for the secondary languages.
pub(crate) fn localized_text(
    record: &ValidatedRecord<'_>,
) -> Result<LocalizedText, ValidationError> {
    Ok(LocalizedText {
        fi: record.string("Nimi")?,
        se: record.opt_text("NimiSE"),
        en: record.opt_text("NimiEN"),
    })
}
