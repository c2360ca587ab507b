//! # Kuksa Event API Client
//!
//! Typed async client for the Kuksa camp/event registration API.
//!
//! The upstream service speaks loosely-typed JSON with Finnish field
//! names and a null-as-absence convention. This crate fetches each
//! resource over authenticated HTTP, validates the body against a
//! declared schema at the boundary, and maps every record into a
//! stable, well-typed domain model — so a "wrong shape" response fails
//! loudly at ingestion instead of corrupting data downstream.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kuksa_event_api::{DateRange, EventApi, EventApiConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = EventApiConfig::builder()
//!         .endpoint("https://kuksa.example/api")
//!         .event_id("1234")
//!         .username("reporting")
//!         .password("secret")
//!         .build()?;
//!
//!     let api = EventApi::new(config)?;
//!
//!     // Fetch everything, or narrow with a date range.
//!     let camps = api.sub_camps(None).await?;
//!     let range = DateRange::new("2024-07-01", "2024-07-10");
//!     let participants = api.participants(Some(&range)).await?;
//!
//!     println!("{} camps, {} participants", camps.len(), participants.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        EventApi                             │
//! │  one accessor per resource, each an independent round trip  │
//! └─────────────────────────────────────────────────────────────┘
//!                             │
//!        ┌────────────────────┼─────────────────────┐
//!        │      Request       │      Validate       │    Map
//!        ├────────────────────┼─────────────────────┼────────────
//!        │ GET + basic auth   │ declared schema per │ raw record →
//!        │ Guid / date range  │ resource, checked   │ domain entity
//!        │ optional proxy     │ field by field      │ null → absent
//! ```
//!
//! The client is read-only and stateless: no caching, no retries, no
//! pagination. Every accessor call is one bounded request whose result
//! either validates completely or fails as a whole.

#![warn(clippy::all)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Typed identifiers, date range, association record
pub mod types;

/// Client configuration
pub mod config;

/// Public domain model
pub mod model;

/// Declarative resource schemas and the generic validator
pub mod schema;

/// The resource table: endpoint name + schema + transformer per resource
pub mod resources;

/// The request/mapping engine and public accessors
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::EventApi;
pub use config::EventApiConfig;
pub use error::{Error, Result};
pub use model::*;
pub use schema::ValidationError;
pub use types::{DateRange, Id, IdMapping};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
