use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        booking::{BookingStatus, CreateBookingParams},
        pagination::PageRequest,
        user::User,
    },
    service::booking::BookingService,
};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus as StoredStatus;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::create_booking_dependencies},
};

mod cancel;
mod create;
mod get_paginated_for_user;

fn requester(user: &entity::user::Model) -> User {
    User::from_entity(user.clone())
}
