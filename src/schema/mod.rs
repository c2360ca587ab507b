//! Schema & validation layer
//!
//! Declares the expected shape of each raw JSON resource (field names,
//! primitive types, nullability) and checks decoded response bodies
//! against those declarations before any mapping occurs.
//!
//! Validating at the boundary turns "wrong shape" bugs from silent
//! corruption into a loud failure at the point of ingestion. The schema
//! description is declarative data evaluated by one generic validator;
//! shared fragments (the localized-name field set) are declared once and
//! embedded by every schema that needs them.

mod record;
mod types;
mod validate;

pub use record::ValidatedRecord;
pub use types::{Field, FieldType, Schema};
pub use validate::ValidationError;
