//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod ai;
pub mod booking;
pub mod pagination;
pub mod pro;
pub mod salon;
pub mod service;
pub mod stylist;
pub mod user;
