//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Booking lifecycle rules, ownership checks, status transitions
//! - **Orchestration**: Coordinating multiple repository calls, batched enrichment
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod ai;
pub mod auth;
pub mod booking;
pub mod feed;
pub mod pro_dashboard;
pub mod salon;
pub mod stylist;

#[cfg(test)]
mod test;
