//! Client configuration
//!
//! The configuration is consumed once at client construction and is
//! immutable for the lifetime of an [`crate::EventApi`] instance.
//! Construction fails fast on an incomplete or malformed configuration,
//! before any network activity.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Configuration for the event API client
#[derive(Clone, Serialize, Deserialize)]
pub struct EventApiConfig {
    /// Base URL of the upstream service, e.g. `https://api.example`
    pub endpoint: String,

    /// Event identifier, sent as the `Guid` query parameter on every request
    pub event_id: String,

    /// Username for HTTP basic authentication
    pub username: String,

    /// Password for HTTP basic authentication
    pub password: String,

    /// Optional proxy address the requests are routed through
    #[serde(default)]
    pub proxy: Option<String>,
}

impl EventApiConfig {
    /// Create a new config builder
    pub fn builder() -> EventApiConfigBuilder {
        EventApiConfigBuilder::default()
    }

    /// Check the configuration, returning the parsed endpoint URL.
    ///
    /// All fields except `proxy` are mandatory and must be non-empty;
    /// the endpoint must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<Url> {
        for (field, value) in [
            ("endpoint", &self.endpoint),
            ("event_id", &self.event_id),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(Error::missing_field(field));
            }
        }

        let url = Url::parse(&self.endpoint)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::config(format!(
                "endpoint must use http or https, got '{other}'"
            ))),
        }
    }
}

// The password never belongs in logs.
impl fmt::Debug for EventApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventApiConfig")
            .field("endpoint", &self.endpoint)
            .field("event_id", &self.event_id)
            .field("username", &self.username)
            .field("password", &"***")
            .field("proxy", &self.proxy)
            .finish()
    }
}

/// Builder for [`EventApiConfig`]
#[derive(Default)]
pub struct EventApiConfigBuilder {
    endpoint: Option<String>,
    event_id: Option<String>,
    username: Option<String>,
    password: Option<String>,
    proxy: Option<String>,
}

impl EventApiConfigBuilder {
    /// Set the base URL of the upstream service
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the event identifier
    pub fn event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    /// Set the basic-auth username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the basic-auth password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Route requests through a proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<EventApiConfig> {
        let config = EventApiConfig {
            endpoint: self.endpoint.ok_or_else(|| Error::missing_field("endpoint"))?,
            event_id: self.event_id.ok_or_else(|| Error::missing_field("event_id"))?,
            username: self.username.ok_or_else(|| Error::missing_field("username"))?,
            password: self.password.ok_or_else(|| Error::missing_field("password"))?,
            proxy: self.proxy,
        };
        config.validate()?;
        Ok(config)
    }
}
