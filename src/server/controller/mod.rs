//! HTTP request handlers.
//!
//! Each controller authenticates the request where required, converts DTOs into server
//! models, calls the matching service and converts the result back into a DTO.

pub mod ai;
pub mod auth;
pub mod booking;
pub mod feed;
pub mod health;
pub mod pro_dashboard;
pub mod pros;
pub mod salon;
pub mod stylist;
