//! Data transfer objects shared by the HTTP surface.
//!
//! Every type here is serialized to or deserialized from JSON and documented in the
//! OpenAPI schema through `utoipa::ToSchema`.

pub mod ai;
pub mod api;
pub mod booking;
pub mod feed;
pub mod pro;
pub mod salon;
pub mod stylist;
pub mod user;
