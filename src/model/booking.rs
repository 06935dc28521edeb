use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatusDto {
    Pending,
    Paid,
    Refunded,
    Failed,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBookingDto {
    pub stylist_id: String,
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub customer_notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: String,
    pub user_id: String,
    pub stylist_id: String,
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub total_price: f64,
    pub status: BookingStatusDto,
    pub payment_status: PaymentStatusDto,
    pub payment_intent_id: Option<String>,
    pub customer_notes: Option<String>,
    pub stylist_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub stylist_name: Option<String>,
    pub service_name: Option<String>,
    pub salon_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}
