//! Participant resources: the participants themselves plus their
//! extra-info, extra-selection, payment and payment-status associations

use super::Resource;
use crate::model::{
    Address, ExtraInfo, ExtraSelection, Guardian, Participant, Payment, PaymentStatus,
};
use crate::schema::{FieldType, Schema, ValidatedRecord, ValidationError};
use crate::types::IdMapping;
use once_cell::sync::Lazy;

static PARTICIPANT: Lazy<Schema> = Lazy::new(|| {
    Schema::object("Osallistujat")
        .required("Id", FieldType::Integer)
        .nullable("Jasennro", FieldType::String)
        .required("Etunimi", FieldType::String)
        .required("Sukunimi", FieldType::String)
        .nullable("Partionimi", FieldType::String)
        .nullable("Katuosoite", FieldType::String)
        .nullable("Postinumero", FieldType::String)
        .nullable("Postitoimipaikka", FieldType::String)
        .nullable("Postimaa", FieldType::String)
        .nullable("Lisaosoite", FieldType::String)
        .nullable("Puhelinnumero", FieldType::String)
        .nullable("Email", FieldType::String)
        .nullable("Erityisruokavalio", FieldType::String)
        .nullable("Syntymaaika", FieldType::Date)
        .nullable("Ika", FieldType::Integer)
        .required("Ilmoittautumispvm", FieldType::Date)
        .nullable("TahoJotaEdustaa", FieldType::String)
        .nullable("EdustusorganisaationPiiri", FieldType::String)
        .nullable("Majoittuminen", FieldType::String)
        .nullable("MajoittuuLippukunnassa", FieldType::String)
        .nullable("MajoittumisenLisatiedot", FieldType::String)
        .nullable("HuoltajanNimi", FieldType::String)
        .nullable("HuoltajanPuhelinnumero", FieldType::String)
        .nullable("HuoltajanEmail", FieldType::String)
        .nullable("RyhmaId", FieldType::Integer)
        .nullable("AlaleiriId", FieldType::Integer)
        .nullable("KylaId", FieldType::Integer)
        .nullable("LeirilippukuntaId", FieldType::Integer)
        .required("Perunut", FieldType::Boolean)
});

static PARTICIPANT_EXTRA_INFO: Lazy<Schema> = Lazy::new(|| {
    Schema::object("OsallistujatLisatietokentat")
        .required("OsallistujaId", FieldType::Integer)
        .required("LisatietokenttaId", FieldType::Integer)
        .required("Lisatiedot", FieldType::String)
});

static PARTICIPANT_EXTRA_SELECTION: Lazy<Schema> = Lazy::new(|| {
    Schema::object("OsallistujatLisavalinnat")
        .required("OsallistujaId", FieldType::Integer)
        .required("LisavalintaId", FieldType::Integer)
});

static PARTICIPANT_PAYMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::object("OsallistujatMaksut")
        .required("OsallistujaId", FieldType::Integer)
        .required("MaksuId", FieldType::Integer)
});

// TilaisuusId is declared so a shape change is caught, but the mapper
// drops it: callers identify the row by the participation id alone.
static PARTICIPANT_PAYMENT_STATUS: Lazy<Schema> = Lazy::new(|| {
    Schema::object("OsallistujatMaksunTila")
        .required("OsallistuminenId", FieldType::Integer)
        .required("TilaisuusId", FieldType::Integer)
        .nullable("Laskutettu", FieldType::Date)
        .nullable("Maksettu", FieldType::Date)
});

fn map_participant(record: &ValidatedRecord<'_>) -> Result<Participant, ValidationError> {
    Ok(Participant {
        id: record.id("Id")?,
        member_number: record.opt_text("Jasennro"),
        first_name: record.string("Etunimi")?,
        last_name: record.string("Sukunimi")?,
        nickname: record.opt_text("Partionimi"),
        address: Address {
            street: record.opt_text("Katuosoite"),
            post_code: record.opt_text("Postinumero"),
            post_office: record.opt_text("Postitoimipaikka"),
            country: record.opt_text("Postimaa"),
            extra: record.opt_text("Lisaosoite"),
        },
        phone_number: record.opt_text("Puhelinnumero"),
        email: record.opt_text("Email"),
        diet: record.opt_text("Erityisruokavalio"),
        birth_date: record.opt_date("Syntymaaika")?,
        age: record.opt_int("Ika"),
        sign_up_date: record.date_time("Ilmoittautumispvm")?,
        represented_party: record.opt_text("TahoJotaEdustaa"),
        district_of_organization: record.opt_text("EdustusorganisaationPiiri"),
        accommodation: record.opt_text("Majoittuminen"),
        accommodation_with_local_group: record.opt_text("MajoittuuLippukunnassa"),
        accommodation_extra_info: record.opt_text("MajoittumisenLisatiedot"),
        guardian: Guardian {
            name: record.opt_text("HuoltajanNimi"),
            phone_number: record.opt_text("HuoltajanPuhelinnumero"),
            email: record.opt_text("HuoltajanEmail"),
        },
        local_group: record.opt_id("RyhmaId"),
        sub_camp: record.opt_id("AlaleiriId"),
        village: record.opt_id("KylaId"),
        camp_group: record.opt_id("LeirilippukuntaId"),
        cancelled: record.boolean("Perunut")?,
    })
}

fn map_participant_extra_info(
    record: &ValidatedRecord<'_>,
) -> Result<ExtraInfo<Participant>, ValidationError> {
    Ok(ExtraInfo {
        owner: record.id("OsallistujaId")?,
        field: record.id("LisatietokenttaId")?,
        value: record.string("Lisatiedot")?,
    })
}

fn map_participant_extra_selection(
    record: &ValidatedRecord<'_>,
) -> Result<IdMapping<Participant, ExtraSelection>, ValidationError> {
    Ok(IdMapping::new(
        record.id("OsallistujaId")?,
        record.id("LisavalintaId")?,
    ))
}

fn map_participant_payment(
    record: &ValidatedRecord<'_>,
) -> Result<IdMapping<Participant, Payment>, ValidationError> {
    Ok(IdMapping::new(
        record.id("OsallistujaId")?,
        record.id("MaksuId")?,
    ))
}

fn map_participant_payment_status(
    record: &ValidatedRecord<'_>,
) -> Result<PaymentStatus<Participant>, ValidationError> {
    Ok(PaymentStatus {
        owner: record.id("OsallistuminenId")?,
        billed: record.opt_date_time("Laskutettu")?,
        paid: record.opt_date_time("Maksettu")?,
    })
}

/// `Osallistujat`
pub fn participants() -> Resource<Participant> {
    Resource::new(Lazy::force(&PARTICIPANT), map_participant)
}

/// `OsallistujatLisatietokentat`
pub fn participant_extra_infos() -> Resource<ExtraInfo<Participant>> {
    Resource::new(
        Lazy::force(&PARTICIPANT_EXTRA_INFO),
        map_participant_extra_info,
    )
}

/// `OsallistujatLisavalinnat`
pub fn participant_extra_selections() -> Resource<IdMapping<Participant, ExtraSelection>> {
    Resource::new(
        Lazy::force(&PARTICIPANT_EXTRA_SELECTION),
        map_participant_extra_selection,
    )
}

/// `OsallistujatMaksut`
pub fn participant_payments() -> Resource<IdMapping<Participant, Payment>> {
    Resource::new(Lazy::force(&PARTICIPANT_PAYMENT), map_participant_payment)
}

/// `OsallistujatMaksunTila`
pub fn participant_payment_status() -> Resource<PaymentStatus<Participant>> {
    Resource::new(
        Lazy::force(&PARTICIPANT_PAYMENT_STATUS),
        map_participant_payment_status,
    )
}
