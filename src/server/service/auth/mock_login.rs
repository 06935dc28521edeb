//! Development login stub.
//!
//! Returns one of three canned accounts picked by email address without checking any
//! password. The canned tokens are opaque strings that the credential chain does not
//! accept; real sessions go through `/auth/verify-token`.

use crate::{
    model::user::{DemoAccountDto, LoginDto, LoginResponseDto},
    server::error::AppError,
};

const STYLIST_EMAILS: [&str; 2] = ["demo@zelus.com", "stylist@zelus.com"];
const OWNER_EMAILS: [&str; 2] = ["owner@zelus.com", "salon@zelus.com"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoRole {
    Stylist,
    SalonOwner,
    Customer,
}

impl DemoRole {
    pub fn for_email(email: Option<&str>) -> Self {
        match email {
            Some(email) if STYLIST_EMAILS.contains(&email) => Self::Stylist,
            Some(email) if OWNER_EMAILS.contains(&email) => Self::SalonOwner,
            _ => Self::Customer,
        }
    }
}

/// Maps the login body onto a canned account.
///
/// # Returns
/// - `Ok(LoginResponseDto)` - Canned token and account for the role picked by email
/// - `Err(AppError::BadRequest)` - Neither email nor phone was provided
pub fn login(credentials: LoginDto) -> Result<LoginResponseDto, AppError> {
    let email = credentials.email.filter(|e| !e.trim().is_empty());
    let phone = credentials.phone.filter(|p| !p.trim().is_empty());

    if email.is_none() && phone.is_none() {
        return Err(AppError::BadRequest("Email or phone is required".to_string()));
    }

    let role = DemoRole::for_email(email.as_deref());

    let (token, id, default_email, name, role_name, stylist_id, salon_id) = match role {
        DemoRole::Stylist => (
            "mock_token_stylist",
            "stylist_1",
            "stylist@zelus.com",
            "Demo Stylist",
            "stylist",
            Some("s1"),
            None,
        ),
        DemoRole::SalonOwner => (
            "mock_token_owner",
            "owner_1",
            "owner@zelus.com",
            "Salon Owner",
            "salon_owner",
            None,
            Some("salon_1"),
        ),
        DemoRole::Customer => (
            "mock_token_customer",
            "customer_1",
            "customer@zelus.com",
            "Customer",
            "customer",
            None,
            None,
        ),
    };

    Ok(LoginResponseDto {
        token: token.to_string(),
        user: DemoAccountDto {
            id: id.to_string(),
            email: email.unwrap_or_else(|| default_email.to_string()),
            phone,
            name: name.to_string(),
            photo_url: None,
            role: role_name.to_string(),
            stylist_id: stylist_id.map(str::to_string),
            salon_id: salon_id.map(str::to_string),
            created_at: "2025-01-01T00:00:00".to_string(),
            last_login: "2025-01-20T00:00:00".to_string(),
            is_verified: true,
            is_active: true,
        },
    })
}
