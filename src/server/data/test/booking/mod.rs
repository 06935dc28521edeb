use crate::server::{
    data::booking::BookingRepository,
    model::{
        booking::{BookingStatus, NewBooking},
        pagination::PageRequest,
    },
};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus as StoredStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_booking_dependencies},
};

mod create;
mod get_paginated_by_user;
mod stats;
mod update_status;
