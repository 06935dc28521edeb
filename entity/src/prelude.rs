pub use super::booking::Entity as Booking;
pub use super::salon::Entity as Salon;
pub use super::service::Entity as Service;
pub use super::stylist::Entity as Stylist;
pub use super::user::Entity as User;
