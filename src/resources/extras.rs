//! Custom-question resources: extra-info fields, extra-selection
//! groups, extra selections

use super::{localized_text, Resource, LOCALIZED_NAME};
use crate::model::{ExtraInfoField, ExtraSelection, ExtraSelectionGroup};
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use once_cell::sync::Lazy;

static EXTRA_INFO_FIELD: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaLisatietokentat")
        .required("Id", FieldType::Integer)
        .nullable("KysymyssarjaId", FieldType::Integer)
        .embed(&LOCALIZED_NAME)
});

static EXTRA_SELECTION_GROUP: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaLisavalinnanPaaryhmat")
        .required("Id", FieldType::Integer)
        .nullable("KysymyssarjaId", FieldType::Integer)
        .embed(&LOCALIZED_NAME)
});

static EXTRA_SELECTION: Lazy<Schema> = Lazy::new(|| {
    Schema::object("TapahtumaLisavalinnat")
        .required("Id", FieldType::Integer)
        .required("PaaryhmaId", FieldType::Integer)
        .embed(&LOCALIZED_NAME)
});

fn map_extra_info_field(record: &ValidatedRecord<'_>) -> Result<ExtraInfoField, ValidationError> {
    Ok(ExtraInfoField {
        id: record.id("Id")?,
        question_series: record.opt_id("KysymyssarjaId"),
        name: localized_text(record)?,
    })
}

fn map_extra_selection_group(
    record: &ValidatedRecord<'_>,
) -> Result<ExtraSelectionGroup, ValidationError> {
    Ok(ExtraSelectionGroup {
        id: record.id("Id")?,
        question_series: record.opt_id("KysymyssarjaId"),
        name: localized_text(record)?,
    })
}

fn map_extra_selection(record: &ValidatedRecord<'_>) -> Result<ExtraSelection, ValidationError> {
    Ok(ExtraSelection {
        id: record.id("Id")?,
        group: record.id("PaaryhmaId")?,
        name: localized_text(record)?,
    })
}

/// `TapahtumaLisatietokentat`
pub fn extra_info_fields() -> Resource<ExtraInfoField> {
    Resource::new(Lazy::force(&EXTRA_INFO_FIELD), map_extra_info_field)
}

/// `TapahtumaLisavalinnanPaaryhmat`
pub fn extra_selection_groups() -> Resource<ExtraSelectionGroup> {
    Resource::new(Lazy::force(&EXTRA_SELECTION_GROUP), map_extra_selection_group)
}

/// `TapahtumaLisavalinnat`
pub fn extra_selections() -> Resource<ExtraSelection> {
    Resource::new(Lazy::force(&EXTRA_SELECTION), map_extra_selection)
}
