use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod update;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        id: None,
        external_uid: None,
        email: email.to_string(),
        name: "Alice Johnson".to_string(),
        phone: None,
        profile_image_url: None,
        is_stylist: false,
    }
}
