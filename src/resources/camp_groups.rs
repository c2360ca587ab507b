//! Camp-group resources: the groups themselves plus their extra-info,
//! extra-selection and payment associations

use super::Resource;
use crate::model::{CampGroup, ExtraInfo, ExtraSelection, Payment};
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use crate::types::IdMapping;
use once_cell::sync::Lazy;

// Sub-camp and village assignments are nullable: a camp group exists
// before it is placed anywhere.
static CAMP_GROUP: Lazy<Schema> = Lazy::new(|| {
    Schema::object("Leirilippukunnat")
        .required("Id", FieldType::Integer)
        .nullable("AlaleiriId", FieldType::Integer)
        .nullable("KylaId", FieldType::Integer)
        .required("Nimi", FieldType::String)
});

static CAMP_GROUP_EXTRA_INFO: Lazy<Schema> = Lazy::new(|| {
    Schema::object("LeirilippukunnatLisatietokentat")
        .required("LeirilippukuntaId", FieldType::Integer)
        .required("LisatietokenttaId", FieldType::Integer)
        .required("Lisatiedot", FieldType::String)
});

static CAMP_GROUP_EXTRA_SELECTION: Lazy<Schema> = Lazy::new(|| {
    Schema::object("LeirilippukunnatLisavalinnat")
        .required("LeirilippukuntaId", FieldType::Integer)
        .required("LisavalintaId", FieldType::Integer)
});

static CAMP_GROUP_PAYMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::object("LeirilippukunnatMaksut")
        .required("LeirilippukuntaId", FieldType::Integer)
        .required("MaksuId", FieldType::Integer)
});

fn map_camp_group(record: &ValidatedRecord<'_>) -> Result<CampGroup, ValidationError> {
    Ok(CampGroup {
        id: record.id("Id")?,
        sub_camp: record.opt_id("AlaleiriId"),
        village: record.opt_id("KylaId"),
        name: record.string("Nimi")?,
    })
}

fn map_camp_group_extra_info(
    record: &ValidatedRecord<'_>,
) -> Result<ExtraInfo<CampGroup>, ValidationError> {
    Ok(ExtraInfo {
        owner: record.id("LeirilippukuntaId")?,
        field: record.id("LisatietokenttaId")?,
        value: record.string("Lisatiedot")?,
    })
}

fn map_camp_group_extra_selection(
    record: &ValidatedRecord<'_>,
) -> Result<IdMapping<CampGroup, ExtraSelection>, ValidationError> {
    Ok(IdMapping::new(
        record.id("LeirilippukuntaId")?,
        record.id("LisavalintaId")?,
    ))
}

fn map_camp_group_payment(
    record: &ValidatedRecord<'_>,
) -> Result<IdMapping<CampGroup, Payment>, ValidationError> {
    Ok(IdMapping::new(
        record.id("LeirilippukuntaId")?,
        record.id("MaksuId")?,
    ))
}

/// `Leirilippukunnat`
pub fn camp_groups() -> Resource<CampGroup> {
    Resource::new(Lazy::force(&CAMP_GROUP), map_camp_group)
}

/// `LeirilippukunnatLisatietokentat`
pub fn camp_group_extra_infos() -> Resource<ExtraInfo<CampGroup>> {
    Resource::new(Lazy::force(&CAMP_GROUP_EXTRA_INFO), map_camp_group_extra_info)
}

/// `LeirilippukunnatLisavalinnat`
pub fn camp_group_extra_selections() -> Resource<IdMapping<CampGroup, ExtraSelection>> {
    Resource::new(
        Lazy::force(&CAMP_GROUP_EXTRA_SELECTION),
        map_camp_group_extra_selection,
    )
}

/// `LeirilippukunnatMaksut`
pub fn camp_group_payments() -> Resource<IdMapping<CampGroup, Payment>> {
    Resource::new(Lazy::force(&CAMP_GROUP_PAYMENT), map_camp_group_payment)
}
