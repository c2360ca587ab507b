//! Domain model
//!
//! The public, stable-shape entities returned to callers after
//! validation and mapping. Field names are stable English identifiers,
//! optional fields are `Option<T>` (never a sentinel), and date-like
//! strings are parsed into `chrono` values. Every entity is constructed
//! fresh per request/response cycle; the client keeps no entity state
//! between calls.

use crate::types::Id;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Localized Text
// ============================================================================

/// Three-language text bundle.
///
/// Finnish is always present; Swedish and English are absent when the
/// upstream field is null or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Finnish name
    pub fi: String,
    /// Swedish name
    pub se: Option<String>,
    /// English name
    pub en: Option<String>,
}

// ============================================================================
// Camp Structure
// ============================================================================

/// Top-level information about the event itself (single-object resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInfo {
    /// Event name
    pub name: LocalizedText,
    /// When the event starts
    pub start: NaiveDateTime,
    /// When the event ends
    pub end: NaiveDateTime,
}

/// A sub-camp of the event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCamp {
    pub id: Id<SubCamp>,
    pub name: String,
}

/// A village within a sub-camp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Village {
    pub id: Id<Village>,
    pub sub_camp: Id<SubCamp>,
    pub name: String,
}

// ============================================================================
// Custom Questions
// ============================================================================

/// A named series grouping extra-info fields and extra selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSeries {
    pub id: Id<QuestionSeries>,
    pub name: LocalizedText,
}

/// A free-text custom question attachable to participants and groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfoField {
    pub id: Id<ExtraInfoField>,
    /// Series this field belongs to, if any
    pub question_series: Option<Id<QuestionSeries>>,
    pub name: LocalizedText,
}

/// A group of mutually related multiple-choice answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraSelectionGroup {
    pub id: Id<ExtraSelectionGroup>,
    /// Series this group belongs to, if any
    pub question_series: Option<Id<QuestionSeries>>,
    pub name: LocalizedText,
}

/// One multiple-choice answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraSelection {
    pub id: Id<ExtraSelection>,
    pub group: Id<ExtraSelectionGroup>,
    pub name: LocalizedText,
}

// ============================================================================
// Payments
// ============================================================================

/// A group of related payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentGroup {
    pub id: Id<PaymentGroup>,
    pub name: LocalizedText,
}

/// A single payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Id<Payment>,
    pub group: Id<PaymentGroup>,
    pub name: LocalizedText,
}

/// Billing and payment dates for one entity
#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct PaymentStatus<For> {
    /// Entity the status belongs to
    pub owner: Id<For>,
    /// When the entity was billed, if it has been
    pub billed: Option<NaiveDateTime>,
    /// When the bill was paid, if it has been
    pub paid: Option<NaiveDateTime>,
}

impl<For> Clone for PaymentStatus<For> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner,
            billed: self.billed,
            paid: self.paid,
        }
    }
}

impl<For> PartialEq for PaymentStatus<For> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.billed == other.billed && self.paid == other.paid
    }
}

impl<For> fmt::Debug for PaymentStatus<For> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentStatus")
            .field("owner", &self.owner)
            .field("billed", &self.billed)
            .field("paid", &self.paid)
            .finish()
    }
}

// ============================================================================
// Groups
// ============================================================================

/// An organizational unit formed for the camp, optionally placed within
/// a sub-camp and village
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampGroup {
    pub id: Id<CampGroup>,
    /// Assigned sub-camp, absent while unplaced
    pub sub_camp: Option<Id<SubCamp>>,
    /// Assigned village, absent while unplaced
    pub village: Option<Id<Village>>,
    pub name: String,
}

/// A participant's home organization (scout group)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalGroup {
    pub id: Id<LocalGroup>,
    pub sub_camp: Option<Id<SubCamp>>,
    pub village: Option<Id<Village>>,
    pub camp_group: Option<Id<CampGroup>>,
    pub name: String,
    pub scout_organization: String,
    pub locality: String,
    pub country: String,
    pub country_code: String,
}

// ============================================================================
// Participants
// ============================================================================

/// Postal address of a participant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub post_code: Option<String>,
    pub post_office: Option<String>,
    pub country: Option<String>,
    pub extra: Option<String>,
}

/// Guardian contact details of an underage participant
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guardian {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// One registered participant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: Id<Participant>,
    pub member_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub address: Address,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Special diet, free text
    pub diet: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub age: Option<i64>,
    pub sign_up_date: NaiveDateTime,
    /// Party the participant represents at the event
    pub represented_party: Option<String>,
    pub district_of_organization: Option<String>,
    pub accommodation: Option<String>,
    pub accommodation_with_local_group: Option<String>,
    pub accommodation_extra_info: Option<String>,
    pub guardian: Guardian,
    pub local_group: Option<Id<LocalGroup>>,
    pub sub_camp: Option<Id<SubCamp>>,
    pub village: Option<Id<Village>>,
    pub camp_group: Option<Id<CampGroup>>,
    pub cancelled: bool,
}

// ============================================================================
// Extra Info Association
// ============================================================================

/// A filled-in extra-info answer attached to one entity
#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct ExtraInfo<For> {
    /// Entity the answer belongs to
    pub owner: Id<For>,
    /// The question that was answered
    pub field: Id<ExtraInfoField>,
    /// The answer text
    pub value: String,
}

impl<For> Clone for ExtraInfo<For> {
    fn clone(&self) -> Self {
        Self {
            owner: self.owner,
            field: self.field,
            value: self.value.clone(),
        }
    }
}

impl<For> PartialEq for ExtraInfo<For> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.field == other.field && self.value == other.value
    }
}

impl<For> fmt::Debug for ExtraInfo<For> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtraInfo")
            .field("owner", &self.owner)
            .field("field", &self.field)
            .field("value", &self.value)
            .finish()
    }
}
