//! SeaORM entity definitions for the five persisted tables.

pub mod prelude;

pub mod booking;
pub mod salon;
pub mod service;
pub mod stylist;
pub mod user;
