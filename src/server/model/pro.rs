//! Pro dashboard models: a stylist's view of their own bookings.

use chrono::{DateTime, Utc};

use crate::{
    model::pro::{
        ClientDetailDto, ClientDto, ClientVisitDto, DashboardStatsDto, EarningsDto,
        PaginatedProBookingsDto, ProBookingDto, TransactionDto,
    },
    server::model::{booking::Booking, pagination::Page},
};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Non-cancelled bookings scheduled today (UTC).
    pub today_bookings: u64,
    /// Sum of `total_price` over `today_bookings`.
    pub today_earnings: f64,
    /// Non-cancelled bookings scheduled within the last seven days, today included.
    pub this_week_bookings: u64,
    /// Distinct customers that ever booked the stylist.
    pub total_clients: u64,
    pub rating: f64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            today_bookings: self.today_bookings,
            today_earnings: self.today_earnings,
            this_week_bookings: self.this_week_bookings,
            total_clients: self.total_clients,
            rating: self.rating,
        }
    }
}

/// Customer details resolved for a booking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProBooking {
    pub booking: Booking,
    pub customer: Customer,
    pub service_name: Option<String>,
}

impl ProBooking {
    pub fn into_dto(self) -> ProBookingDto {
        let booking = self.booking;
        ProBookingDto {
            id: booking.id,
            customer_id: booking.user_id,
            customer_name: self.customer.name,
            customer_email: self.customer.email,
            customer_phone: self.customer.phone,
            service_id: booking.service_id,
            service_name: self.service_name,
            scheduled_at: booking.scheduled_at,
            duration_minutes: booking.duration_minutes,
            total_price: booking.total_price,
            status: booking.status.into_dto(),
            payment_status: booking.payment_status.into_dto(),
            customer_notes: booking.customer_notes,
            stylist_notes: booking.stylist_notes,
            created_at: booking.created_at,
        }
    }
}

impl Page<ProBooking> {
    pub fn into_dto(self) -> PaginatedProBookingsDto {
        PaginatedProBookingsDto {
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            bookings: self.items.into_iter().map(ProBooking::into_dto).collect(),
        }
    }
}

/// Visit totals of one customer with a stylist.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub customer_id: String,
    pub customer: Customer,
    pub total_visits: u64,
    pub total_spent: f64,
    pub last_visit: DateTime<Utc>,
}

impl ClientSummary {
    /// Totals `bookings` of a single customer; `None` when there are none.
    pub fn from_bookings<'b>(
        customer_id: String,
        customer: Customer,
        bookings: impl IntoIterator<Item = &'b Booking>,
    ) -> Option<Self> {
        let mut total_visits = 0;
        let mut total_spent = 0.0;
        let mut last_visit: Option<DateTime<Utc>> = None;

        for booking in bookings {
            total_visits += 1;
            total_spent += booking.total_price;
            last_visit = last_visit.max(Some(booking.scheduled_at));
        }

        Some(Self {
            customer_id,
            customer,
            total_visits,
            total_spent,
            last_visit: last_visit?,
        })
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.customer_id,
            name: self.customer.name,
            email: self.customer.email,
            phone: self.customer.phone,
            total_visits: self.total_visits,
            total_spent: self.total_spent,
            last_visit: self.last_visit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientDetail {
    pub summary: ClientSummary,
    /// Most recent first.
    pub history: Vec<ProBooking>,
}

impl ClientDetail {
    pub fn into_dto(self) -> ClientDetailDto {
        let summary = self.summary;
        ClientDetailDto {
            id: summary.customer_id,
            name: summary.customer.name,
            email: summary.customer.email,
            phone: summary.customer.phone,
            total_visits: summary.total_visits,
            total_spent: summary.total_spent,
            last_visit: summary.last_visit,
            booking_history: self
                .history
                .into_iter()
                .map(|visit| ClientVisitDto {
                    booking_id: visit.booking.id,
                    date: visit.booking.scheduled_at,
                    service: visit.service_name,
                    price: visit.booking.total_price,
                    status: visit.booking.status.into_dto(),
                })
                .collect(),
        }
    }
}

/// Reporting window of the earnings summary, ending with the current UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarningsPeriod {
    Today,
    #[default]
    Week,
    Month,
    Year,
}

impl EarningsPeriod {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Number of UTC days covered, today included.
    pub fn days(self) -> i64 {
        match self {
            Self::Today => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Earnings {
    pub period: EarningsPeriod,
    pub total_earnings: f64,
    /// Bookings in the window, most recent first.
    pub transactions: Vec<ProBooking>,
}

impl Earnings {
    pub fn total_bookings(&self) -> u64 {
        self.transactions.len() as u64
    }

    /// Zero when the window holds no bookings.
    pub fn average_per_booking(&self) -> f64 {
        match self.total_bookings() {
            0 => 0.0,
            count => self.total_earnings / count as f64,
        }
    }

    pub fn into_dto(self) -> EarningsDto {
        EarningsDto {
            period: self.period.as_str().to_string(),
            total_earnings: self.total_earnings,
            total_bookings: self.total_bookings(),
            average_per_booking: self.average_per_booking(),
            transactions: self
                .transactions
                .into_iter()
                .map(|transaction| TransactionDto {
                    id: transaction.booking.id,
                    customer_name: transaction.customer.name,
                    service: transaction.service_name,
                    amount: transaction.booking.total_price,
                    date: transaction.booking.scheduled_at,
                })
                .collect(),
        }
    }
}
