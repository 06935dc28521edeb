//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (salon, stylist, service) = factory::helpers::create_service_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let service = factory::service::ServiceFactory::new(&db, &stylist.id)
//!     .price(75.0)
//!     .duration_minutes(60)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod salon;
pub mod service;
pub mod stylist;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use salon::create_salon;
pub use service::create_service;
pub use stylist::create_stylist;
pub use user::create_user;
