//! Event structure resources: event info, sub-camps, villages,
//! question series

use super::{localized_text, Resource, LOCALIZED_NAME};
use crate::model::{EventInfo, QuestionSeries, SubCamp, Village};
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use once_cell::sync::Lazy;

static EVENT_INFO: Lazy<Schema> = Lazy::new(|| {
    Schema::object("Tapahtuma")
        .embed(&LOCALIZED_NAME)
        .required("Alkupvm", FieldType::Date)
        .required("Loppupvm", FieldType::Date)
});

static SUB_CAMP: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaAlaleirit")
        .required("Id", FieldType::Integer)
        .required("Nimi", FieldType::String)
});

static VILLAGE: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaKylat")
        .required("Id", FieldType::Integer)
        .required("AlaleiriId", FieldType::Integer)
        .required("Nimi", FieldType::String)
});

static QUESTION_SERIES: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaKysymyssarjat")
        .required("Id", FieldType::Integer)
        .embed(&LOCALIZED_NAME)
});

fn map_event_info(record: &ValidatedRecord<'_>) -> Result<EventInfo, ValidationError> {
    Ok(EventInfo {
        name: localized_text(record)?,
        start: record.date_time("Alkupvm")?,
        end: record.date_time("Loppupvm")?,
    })
}

fn map_sub_camp(record: &ValidatedRecord<'_>) -> Result<SubCamp, ValidationError> {
    Ok(SubCamp {
        id: record.id("Id")?,
        name: record.string("Nimi")?,
    })
}

fn map_village(record: &ValidatedRecord<'_>) -> Result<Village, ValidationError> {
    Ok(Village {
        id: record.id("Id")?,
        sub_camp: record.id("AlaleiriId")?,
        name: record.string("Nimi")?,
    })
}

fn map_question_series(record: &ValidatedRecord<'_>) -> Result<QuestionSeries, ValidationError> {
    Ok(QuestionSeries {
        id: record.id("Id")?,
        name: localized_text(record)?,
    })
}

/// `Tapahtuma` — single-object resource
pub fn event_info() -> Resource<EventInfo> {
    Resource::new(Lazy::force(&EVENT_INFO), map_event_info)
}

/// `TapahtumaAlaleirit`
pub fn sub_camps() -> Resource<SubCamp> {
    Resource::new(Lazy::force(&SUB_CAMP), map_sub_camp)
}

/// `TapahtumaKylat`
pub fn villages() -> Resource<Village> {
    Resource::new(Lazy::force(&VILLAGE), map_village)
}

/// `TapahtumaKysymyssarjat`
pub fn question_series() -> Resource<QuestionSeries> {
    Resource::new(Lazy::force(&QUESTION_SERIES), map_question_series)
}
