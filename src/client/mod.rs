//! Request/mapping engine
//!
//! One generic fetch-validate-transform cycle, instantiated per resource
//! from the table in [`crate::resources`]. Every accessor builds one
//! authenticated GET request, checks the response status, validates the
//! decoded body against the resource schema and maps each validated
//! record into its domain entity.
//!
//! The client holds no mutable state, only the immutable configuration
//! and the connection pool, so accessors may be called concurrently.
//! Nothing is retried and no partial results are returned: a fetch is
//! all-or-nothing.

use crate::config::EventApiConfig;
use crate::error::{Error, Result};
use crate::model::{
    CampGroup, EventInfo, ExtraInfo, ExtraInfoField, ExtraSelection, ExtraSelectionGroup,
    LocalGroup, Participant, Payment, PaymentGroup, PaymentStatus, QuestionSeries, SubCamp,
    Village,
};
use crate::resources::{self, Resource};
use crate::schema::{ValidatedRecord, ValidationError};
use crate::types::{DateRange, IdMapping};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Typed client for the event registration API.
///
/// Construction validates the configuration and builds the underlying
/// HTTP client once; the instance is cheap to share and safe to use
/// from several tasks at a time.
#[derive(Debug, Clone)]
pub struct EventApi {
    client: Client,
    config: EventApiConfig,
}

impl EventApi {
    /// Create a client from a validated configuration.
    ///
    /// Fails fast, before any network activity, when the configuration
    /// is incomplete or malformed.
    pub fn new(config: EventApiConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::config(format!("invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &EventApiConfig {
        &self.config
    }

    // ========================================================================
    // Generic pipeline
    // ========================================================================

    /// Issue the GET request for one resource and decode the body as JSON
    async fn fetch_value(
        &self,
        resource: &'static str,
        range: Option<&DateRange>,
    ) -> Result<Value> {
        let url = format!("{}/{}", self.config.endpoint.trim_end_matches('/'), resource);
        debug!(resource, "fetching resource");

        let mut request = self
            .client
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(ACCEPT, "application/json")
            .query(&[("Guid", self.config.event_id.as_str())]);

        if let Some(range) = range {
            // Bounds pass through verbatim; the upstream service
            // interprets them.
            request = request.query(&[
                ("Alkupvm", range.start.as_str()),
                ("Loppupvm", range.end.as_str()),
            ]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(resource, status = status.as_u16(), "request failed");
            return Err(Error::request_failed(resource, status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::malformed(resource, e))
    }

    /// Validate one raw record and run the resource transformer
    fn map_record<T>(resource: &Resource<T>, raw: &Value) -> Result<T> {
        let object = resource
            .schema
            .check(raw)
            .map_err(|e| e.with_payload(raw))?;
        let record = ValidatedRecord::new(resource.name, object);
        (resource.map)(&record).map_err(|e| Error::Validation(e.with_payload(raw)))
    }

    /// Fetch a single-object resource
    async fn fetch_one<T>(&self, resource: Resource<T>, range: Option<&DateRange>) -> Result<T> {
        let value = self.fetch_value(resource.name, range).await?;
        Self::map_record(&resource, &value)
    }

    /// Fetch a collection resource, preserving upstream order
    async fn fetch_collection<T>(
        &self,
        resource: Resource<T>,
        range: Option<&DateRange>,
    ) -> Result<Vec<T>> {
        let value = self.fetch_value(resource.name, range).await?;
        let Value::Array(items) = value else {
            return Err(
                ValidationError::mismatch(resource.name, "<response>", "array", &value).into(),
            );
        };

        let mut mapped = Vec::with_capacity(items.len());
        for item in &items {
            mapped.push(Self::map_record(&resource, item)?);
        }
        debug!(resource = resource.name, records = mapped.len(), "mapped resource");
        Ok(mapped)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Top-level information about the event
    pub async fn event_info(&self, range: Option<&DateRange>) -> Result<EventInfo> {
        self.fetch_one(resources::event_info(), range).await
    }

    /// Sub-camps of the event
    pub async fn sub_camps(&self, range: Option<&DateRange>) -> Result<Vec<SubCamp>> {
        self.fetch_collection(resources::sub_camps(), range).await
    }

    /// Villages within the sub-camps
    pub async fn villages(&self, range: Option<&DateRange>) -> Result<Vec<Village>> {
        self.fetch_collection(resources::villages(), range).await
    }

    /// Question series grouping the custom questions
    pub async fn question_series(&self, range: Option<&DateRange>) -> Result<Vec<QuestionSeries>> {
        self.fetch_collection(resources::question_series(), range).await
    }

    /// Free-text custom questions
    pub async fn extra_info_fields(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<ExtraInfoField>> {
        self.fetch_collection(resources::extra_info_fields(), range).await
    }

    /// Groups of mutually related multiple-choice answers
    pub async fn extra_selection_groups(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<ExtraSelectionGroup>> {
        self.fetch_collection(resources::extra_selection_groups(), range)
            .await
    }

    /// Multiple-choice answers
    pub async fn extra_selections(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<ExtraSelection>> {
        self.fetch_collection(resources::extra_selections(), range).await
    }

    /// Payment groups
    pub async fn payment_groups(&self, range: Option<&DateRange>) -> Result<Vec<PaymentGroup>> {
        self.fetch_collection(resources::payment_groups(), range).await
    }

    /// Payments
    pub async fn payments(&self, range: Option<&DateRange>) -> Result<Vec<Payment>> {
        self.fetch_collection(resources::payments(), range).await
    }

    /// Camp groups
    pub async fn camp_groups(&self, range: Option<&DateRange>) -> Result<Vec<CampGroup>> {
        self.fetch_collection(resources::camp_groups(), range).await
    }

    /// Extra-info answers attached to camp groups
    pub async fn camp_group_extra_infos(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<ExtraInfo<CampGroup>>> {
        self.fetch_collection(resources::camp_group_extra_infos(), range)
            .await
    }

    /// Extra selections chosen by camp groups
    pub async fn camp_group_extra_selections(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<IdMapping<CampGroup, ExtraSelection>>> {
        self.fetch_collection(resources::camp_group_extra_selections(), range)
            .await
    }

    /// Payments assigned to camp groups
    pub async fn camp_group_payments(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<IdMapping<CampGroup, Payment>>> {
        self.fetch_collection(resources::camp_group_payments(), range)
            .await
    }

    /// Registered participants
    pub async fn participants(&self, range: Option<&DateRange>) -> Result<Vec<Participant>> {
        self.fetch_collection(resources::participants(), range).await
    }

    /// Extra-info answers given by participants
    pub async fn participant_extra_infos(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<ExtraInfo<Participant>>> {
        self.fetch_collection(resources::participant_extra_infos(), range)
            .await
    }

    /// Extra selections chosen by participants
    pub async fn participant_extra_selections(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<IdMapping<Participant, ExtraSelection>>> {
        self.fetch_collection(resources::participant_extra_selections(), range)
            .await
    }

    /// Payments assigned to participants
    pub async fn participant_payments(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<IdMapping<Participant, Payment>>> {
        self.fetch_collection(resources::participant_payments(), range)
            .await
    }

    /// Billing and payment dates per participation
    pub async fn participant_payment_status(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<PaymentStatus<Participant>>> {
        self.fetch_collection(resources::participant_payment_status(), range)
            .await
    }

    /// Local groups (home organizations)
    pub async fn local_groups(&self, range: Option<&DateRange>) -> Result<Vec<LocalGroup>> {
        self.fetch_collection(resources::local_groups(), range).await
    }

    /// Extra-info answers attached to local groups
    pub async fn local_group_extra_infos(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<ExtraInfo<LocalGroup>>> {
        self.fetch_collection(resources::local_group_extra_infos(), range)
            .await
    }

    /// Extra selections chosen by local groups
    pub async fn local_group_extra_selections(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<IdMapping<LocalGroup, ExtraSelection>>> {
        self.fetch_collection(resources::local_group_extra_selections(), range)
            .await
    }

    /// Payments assigned to local groups
    pub async fn local_group_payments(
        &self,
        range: Option<&DateRange>,
    ) -> Result<Vec<IdMapping<LocalGroup, Payment>>> {
        self.fetch_collection(resources::local_group_payments(), range)
            .await
    }
}

#[cfg(test)]
mod tests;
