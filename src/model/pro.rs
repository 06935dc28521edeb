use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::booking::{BookingStatusDto, PaymentStatusDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DashboardStatsDto {
    pub today_bookings: u64,
    pub today_earnings: f64,
    pub this_week_bookings: u64,
    pub total_clients: u64,
    pub rating: f64,
}

/// Booking as seen from the stylist's side, with the customer resolved.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProBookingDto {
    pub id: String,
    pub customer_id: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_id: String,
    pub service_name: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub total_price: f64,
    pub status: BookingStatusDto,
    pub payment_status: PaymentStatusDto,
    pub customer_notes: Option<String>,
    pub stylist_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedProBookingsDto {
    pub bookings: Vec<ProBookingDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatusDto,
    pub stylist_notes: Option<String>,
}

/// Customer of a stylist with their visit totals over non-cancelled bookings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientDto {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_visits: u64,
    pub total_spent: f64,
    pub last_visit: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientVisitDto {
    pub booking_id: String,
    pub date: DateTime<Utc>,
    pub service: Option<String>,
    pub price: f64,
    pub status: BookingStatusDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClientDetailDto {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub total_visits: u64,
    pub total_spent: f64,
    pub last_visit: DateTime<Utc>,
    /// Visits with the stylist, most recent first.
    pub booking_history: Vec<ClientVisitDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TransactionDto {
    /// Booking ID
    pub id: String,
    pub customer_name: Option<String>,
    pub service: Option<String>,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EarningsDto {
    /// One of `today`, `week`, `month` or `year`
    pub period: String,
    pub total_earnings: f64,
    pub total_bookings: u64,
    pub average_per_booking: f64,
    pub transactions: Vec<TransactionDto>,
}
