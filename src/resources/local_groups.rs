//! Local-group resources: the home organizations plus their extra-info,
//! extra-selection and payment associations

use super::Resource;
use crate::model::{ExtraInfo, ExtraSelection, LocalGroup, Payment};
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use crate::types::IdMapping;
use once_cell::sync::Lazy;

// Placement ids are nullable for the same reason as on camp groups.
static LOCAL_GROUP: Lazy<Schema> = Lazy::new(|| {
    Schema::object("Ryhmat")
        .required("Id", FieldType::Integer)
        .nullable("AlaleiriId", FieldType::Integer)
        .nullable("KylaId", FieldType::Integer)
        .nullable("LeirilippukuntaId", FieldType::Integer)
        .required("Nimi", FieldType::String)
        .required("Partiojarjesto", FieldType::String)
        .required("Paikkakunta", FieldType::String)
        .required("Maa", FieldType::String)
        .required("Maakoodi", FieldType::String)
});

static LOCAL_GROUP_EXTRA_INFO: Lazy<Schema> = Lazy::new(|| {
    Schema::object("RyhmatLisatietokentat")
        .required("RyhmaId", FieldType::Integer)
        .required("LisatietokenttaId", FieldType::Integer)
        .required("Lisatiedot", FieldType::String)
});

static LOCAL_GROUP_EXTRA_SELECTION: Lazy<Schema> = Lazy::new(|| {
    Schema::object("RyhmatLisavalinnat")
        .required("RyhmaId", FieldType::Integer)
        .required("LisavalintaId", FieldType::Integer)
});

static LOCAL_GROUP_PAYMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::object("RyhmatMaksut")
        .required("RyhmaId", FieldType::Integer)
        .required("MaksuId", FieldType::Integer)
});

fn map_local_group(record: &ValidatedRecord<'_>) -> Result<LocalGroup, ValidationError> {
    Ok(LocalGroup {
        id: record.id("Id")?,
        sub_camp: record.opt_id("AlaleiriId"),
        village: record.opt_id("KylaId"),
        camp_group: record.opt_id("LeirilippukuntaId"),
        name: record.string("Nimi")?,
        scout_organization: record.string("Partiojarjesto")?,
        locality: record.string("Paikkakunta")?,
        country: record.string("Maa")?,
        country_code: record.string("Maakoodi")?,
    })
}

fn map_local_group_extra_info(
    record: &ValidatedRecord<'_>,
) -> Result<ExtraInfo<LocalGroup>, ValidationError> {
    Ok(ExtraInfo {
        owner: record.id("RyhmaId")?,
        field: record.id("LisatietokenttaId")?,
        value: record.string("Lisatiedot")?,
    })
}

fn map_local_group_extra_selection(
    record: &ValidatedRecord<'_>,
) -> Result<IdMapping<LocalGroup, ExtraSelection>, ValidationError> {
    Ok(IdMapping::new(
        record.id("RyhmaId")?,
        record.id("LisavalintaId")?,
    ))
}

fn map_local_group_payment(
    record: &ValidatedRecord<'_>,
) -> Result<IdMapping<LocalGroup, Payment>, ValidationError> {
    Ok(IdMapping::new(record.id("RyhmaId")?, record.id("MaksuId")?))
}

/// `Ryhmat`
pub fn local_groups() -> Resource<LocalGroup> {
    Resource::new(Lazy::force(&LOCAL_GROUP), map_local_group)
}

/// `RyhmatLisatietokentat`
pub fn local_group_extra_infos() -> Resource<ExtraInfo<LocalGroup>> {
    Resource::new(Lazy::force(&LOCAL_GROUP_EXTRA_INFO), map_local_group_extra_info)
}

/// `RyhmatLisavalinnat`
pub fn local_group_extra_selections() -> Resource<IdMapping<LocalGroup, ExtraSelection>> {
    Resource::new(
        Lazy::force(&LOCAL_GROUP_EXTRA_SELECTION),
        map_local_group_extra_selection,
    )
}

/// `RyhmatMaksut`
pub fn local_group_payments() -> Resource<IdMapping<LocalGroup, Payment>> {
    Resource::new(Lazy::force(&LOCAL_GROUP_PAYMENT), map_local_group_payment)
}
