//! Payment resources: payment groups and payments

use super::{localized_text, Resource, LOCALIZED_NAME};
use crate::model::{Payment, PaymentGroup};
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use once_cell::sync::Lazy;

static PAYMENT_GROUP: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaMaksunPaaryhmat")
        .required("Id", FieldType::Integer)
        .embed(&LOCALIZED_NAME)
});

static PAYMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaMaksut")
        .required("Id", FieldType::Integer)
        .required("PaaryhmaId", FieldType::Integer)
        .embed(&LOCALIZED_NAME)
});

fn map_payment_group(record: &ValidatedRecord<'_>) -> Result<PaymentGroup, ValidationError> {
    Ok(PaymentGroup {
        id: record.id("Id")?,
        name: localized_text(record)?,
    })
}

fn map_payment(record: &ValidatedRecord<'_>) -> Result<Payment, ValidationError> {
    Ok(Payment {
        id: record.id("Id")?,
        group: record.id("PaaryhmaId")?,
        name: localized_text(record)?,
    })
}

/// `TapahtumaMaksunPaaryhmat`
pub fn payment_groups() -> Resource<PaymentGroup> {
    Resource::new(Lazy::force(&PAYMENT_GROUP), map_payment_group)
}

/// `TapahtumaMaksut`
pub fn payments() -> Resource<Payment> {
    Resource::new(Lazy::force(&PAYMENT), map_payment)
}
