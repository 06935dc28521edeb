//! Booking domain models, lifecycle status and parameters.
//!
//! A booking binds a customer, a stylist and a service at a point in time. Status and
//! payment status are independent axes; bookings are never deleted, cancellation is the
//! soft end of the lifecycle.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{
        BookingDto, BookingStatusDto, CreateBookingDto, PaginatedBookingsDto, PaymentStatusDto,
    },
    server::model::pagination::Page,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    /// Cancelled, completed and no-show bookings do not move any further.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed | Self::NoShow)
    }

    /// Transitions a stylist may apply from the pro dashboard.
    ///
    /// Pending bookings may be confirmed or closed out, confirmed bookings may only be
    /// closed out. Nothing leaves a terminal state, nothing returns to pending, and a
    /// transition to the current status is rejected.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        match self {
            Self::Pending => matches!(
                next,
                Self::Confirmed | Self::Cancelled | Self::Completed | Self::NoShow
            ),
            Self::Confirmed => matches!(next, Self::Cancelled | Self::Completed | Self::NoShow),
            Self::Cancelled | Self::Completed | Self::NoShow => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::NoShow => "no_show",
        }
    }

    pub fn from_entity(status: entity::booking::BookingStatus) -> Self {
        match status {
            entity::booking::BookingStatus::Pending => Self::Pending,
            entity::booking::BookingStatus::Confirmed => Self::Confirmed,
            entity::booking::BookingStatus::Cancelled => Self::Cancelled,
            entity::booking::BookingStatus::Completed => Self::Completed,
            entity::booking::BookingStatus::NoShow => Self::NoShow,
        }
    }

    pub fn into_entity(self) -> entity::booking::BookingStatus {
        match self {
            Self::Pending => entity::booking::BookingStatus::Pending,
            Self::Confirmed => entity::booking::BookingStatus::Confirmed,
            Self::Cancelled => entity::booking::BookingStatus::Cancelled,
            Self::Completed => entity::booking::BookingStatus::Completed,
            Self::NoShow => entity::booking::BookingStatus::NoShow,
        }
    }

    pub fn into_dto(self) -> BookingStatusDto {
        match self {
            Self::Pending => BookingStatusDto::Pending,
            Self::Confirmed => BookingStatusDto::Confirmed,
            Self::Cancelled => BookingStatusDto::Cancelled,
            Self::Completed => BookingStatusDto::Completed,
            Self::NoShow => BookingStatusDto::NoShow,
        }
    }
}

impl From<BookingStatusDto> for BookingStatus {
    fn from(dto: BookingStatusDto) -> Self {
        match dto {
            BookingStatusDto::Pending => Self::Pending,
            BookingStatusDto::Confirmed => Self::Confirmed,
            BookingStatusDto::Cancelled => Self::Cancelled,
            BookingStatusDto::Completed => Self::Completed,
            BookingStatusDto::NoShow => Self::NoShow,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn from_entity(status: entity::booking::PaymentStatus) -> Self {
        match status {
            entity::booking::PaymentStatus::Pending => Self::Pending,
            entity::booking::PaymentStatus::Paid => Self::Paid,
            entity::booking::PaymentStatus::Refunded => Self::Refunded,
            entity::booking::PaymentStatus::Failed => Self::Failed,
        }
    }

    pub fn into_dto(self) -> PaymentStatusDto {
        match self {
            Self::Pending => PaymentStatusDto::Pending,
            Self::Paid => PaymentStatusDto::Paid,
            Self::Refunded => PaymentStatusDto::Refunded,
            Self::Failed => PaymentStatusDto::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub stylist_id: String,
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
    /// Snapshot of the service duration at creation time.
    pub duration_minutes: i32,
    /// Snapshot of the service price at creation time.
    pub total_price: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub payment_intent_id: Option<String>,
    pub customer_notes: Option<String>,
    pub stylist_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            stylist_id: entity.stylist_id,
            service_id: entity.service_id,
            scheduled_at: entity.scheduled_at,
            duration_minutes: entity.duration_minutes,
            total_price: entity.total_price,
            status: BookingStatus::from_entity(entity.status),
            payment_status: PaymentStatus::from_entity(entity.payment_status),
            payment_intent_id: entity.payment_intent_id,
            customer_notes: entity.customer_notes,
            stylist_notes: entity.stylist_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Booking enriched with display names of the related rows.
///
/// Each name is `None` when the related row cannot be found.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetail {
    pub booking: Booking,
    pub stylist_name: Option<String>,
    pub service_name: Option<String>,
    pub salon_name: Option<String>,
}

impl BookingDetail {
    pub fn into_dto(self) -> BookingDto {
        let booking = self.booking;
        BookingDto {
            id: booking.id,
            user_id: booking.user_id,
            stylist_id: booking.stylist_id,
            service_id: booking.service_id,
            scheduled_at: booking.scheduled_at,
            duration_minutes: booking.duration_minutes,
            total_price: booking.total_price,
            status: booking.status.into_dto(),
            payment_status: booking.payment_status.into_dto(),
            payment_intent_id: booking.payment_intent_id,
            customer_notes: booking.customer_notes,
            stylist_notes: booking.stylist_notes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
            stylist_name: self.stylist_name,
            service_name: self.service_name,
            salon_name: self.salon_name,
        }
    }
}

impl Page<BookingDetail> {
    pub fn into_dto(self) -> PaginatedBookingsDto {
        PaginatedBookingsDto {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            bookings: self
                .items
                .into_iter()
                .map(BookingDetail::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a booking on behalf of an authenticated customer.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: String,
    pub stylist_id: String,
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub customer_notes: Option<String>,
}

impl CreateBookingParams {
    pub fn from_dto(user_id: String, dto: CreateBookingDto) -> Self {
        Self {
            user_id,
            stylist_id: dto.stylist_id,
            service_id: dto.service_id,
            scheduled_at: dto.scheduled_at,
            customer_notes: dto.customer_notes,
        }
    }
}

/// Values written by the repository when inserting a booking. Duration and price are
/// already copied from the service.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: String,
    pub stylist_id: String,
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: i32,
    pub total_price: f64,
    pub customer_notes: Option<String>,
}
