//! Serializable request/response types for the HTTP API.
//!
//! DTOs are the wire representation only: camelCase field names, serde for
//! (de)serialization, `utoipa::ToSchema` for the generated API docs, and
//! `validator` rules on request bodies. Conversion to and from domain models
//! happens in the `model` layer.

pub mod api;
pub mod auth;
pub mod guest;
pub mod invitation;
pub mod stats;
pub mod table;
