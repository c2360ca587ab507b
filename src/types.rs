//! Common types used throughout the client
//!
//! Typed identifiers, the date-range filter, and the generic
//! association record shared by several resources.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

// ============================================================================
// Typed Identifiers
// ============================================================================

/// Opaque numeric identifier scoped by entity type.
///
/// An `Id<CampGroup>` and an `Id<Participant>` are both numbers upstream,
/// but they are not interchangeable here. The phantom parameter carries
/// no data and imposes no trait bounds on the impls below.
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw upstream identifier
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// The raw numeric value
    pub fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would demand `T: Clone` etc. even though `T` is
// only a marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Id::new)
    }
}

// ============================================================================
// Date Range
// ============================================================================

/// Optional filter applied to every resource fetch.
///
/// Both bounds are ISO-8601 date or date-time strings and are passed to
/// the upstream service verbatim; no ordering constraint is enforced on
/// this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start bound, e.g. `2024-07-01`
    pub start: String,
    /// End bound, e.g. `2024-07-10`
    pub end: String,
}

impl DateRange {
    /// Create a new date range
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

// ============================================================================
// Association Record
// ============================================================================

/// A many-to-many or one-to-many link between two entities, represented
/// as a pair of identifiers rather than embedded fields.
#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct IdMapping<From, To> {
    /// The owning entity
    pub from: Id<From>,
    /// The linked entity
    pub to: Id<To>,
}

impl<From, To> IdMapping<From, To> {
    /// Create a new association
    pub fn new(from: Id<From>, to: Id<To>) -> Self {
        Self { from, to }
    }
}

impl<From, To> Clone for IdMapping<From, To> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<From, To> Copy for IdMapping<From, To> {}

impl<From, To> PartialEq for IdMapping<From, To> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<From, To> Eq for IdMapping<From, To> {}

impl<From, To> fmt::Debug for IdMapping<From, To> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdMapping")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Apple;
    struct Orange;

    #[test]
    fn test_id_equality_within_type() {
        let a: Id<Apple> = Id::new(7);
        let b: Id<Apple> = Id::new(7);
        let c: Id<Apple> = Id::new(8);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_id_display_and_value() {
        let id: Id<Orange> = Id::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{id:?}"), "Id(42)");
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id: Id<Apple> = Id::new(13);
        assert_eq!(serde_json::to_string(&id).unwrap(), "13");
        let back: Id<Apple> = serde_json::from_str("13").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_date_range_new() {
        let range = DateRange::new("2024-07-01", "2024-07-10");
        assert_eq!(range.start, "2024-07-01");
        assert_eq!(range.end, "2024-07-10");
    }

    #[test]
    fn test_id_mapping() {
        let link: IdMapping<Apple, Orange> = IdMapping::new(Id::new(1), Id::new(2));
        assert_eq!(link.from.value(), 1);
        assert_eq!(link.to.value(), 2);
        assert_eq!(format!("{link:?}"), "IdMapping { from: Id(1), to: Id(2) }");
    }
}
