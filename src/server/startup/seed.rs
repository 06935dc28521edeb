//! Demo data for local development.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, TransactionTrait,
};
use serde_json::json;

use crate::server::error::AppError;

struct SeedUser {
    id: &'static str,
    email: &'static str,
    name: &'static str,
    phone: &'static str,
}

struct SeedSalon {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    address: &'static str,
    zip_code: &'static str,
    phone: &'static str,
    email: &'static str,
    latitude: f64,
    longitude: f64,
    rating: f64,
    review_count: f64,
}

struct SeedStylist {
    id: &'static str,
    salon_id: &'static str,
    name: &'static str,
    bio: &'static str,
    specialties: &'static [&'static str],
    years_experience: i32,
    rating: f64,
    review_count: i32,
    base_price: f64,
}

struct SeedService {
    id: &'static str,
    stylist_id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    duration_minutes: i32,
    price: f64,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        id: "user-1",
        email: "customer1@example.com",
        name: "Alice Johnson",
        phone: "+1-555-0101",
    },
    SeedUser {
        id: "user-2",
        email: "customer2@example.com",
        name: "Bob Smith",
        phone: "+1-555-0102",
    },
    SeedUser {
        id: "user-3",
        email: "demo@zelux.com",
        name: "Demo User",
        phone: "+1-555-0100",
    },
];

const SALONS: &[SeedSalon] = &[
    SeedSalon {
        id: "salon-1",
        name: "Elite Hair Studio",
        description: "Premier salon offering cutting-edge styling and color services",
        address: "123 Main Street",
        zip_code: "10001",
        phone: "+1-555-1001",
        email: "contact@elitehair.com",
        latitude: 40.7589,
        longitude: -73.9851,
        rating: 4.8,
        review_count: 234.0,
    },
    SeedSalon {
        id: "salon-2",
        name: "Color Studio NYC",
        description: "Specialists in hair color and transformations",
        address: "456 Broadway",
        zip_code: "10012",
        phone: "+1-555-1002",
        email: "info@colorstudio.com",
        latitude: 40.7255,
        longitude: -74.0023,
        rating: 4.9,
        review_count: 189.0,
    },
    SeedSalon {
        id: "salon-3",
        name: "Downtown Barbers",
        description: "Classic barbershop with modern techniques",
        address: "789 Park Avenue",
        zip_code: "10021",
        phone: "+1-555-1003",
        email: "hello@downtownbarbers.com",
        latitude: 40.7736,
        longitude: -73.9629,
        rating: 4.7,
        review_count: 312.0,
    },
];

const STYLISTS: &[SeedStylist] = &[
    SeedStylist {
        id: "stylist-1",
        salon_id: "salon-1",
        name: "Jane Smith",
        bio: "Award-winning stylist specializing in modern cuts and color",
        specialties: &["Haircuts", "Color", "Balayage", "Styling"],
        years_experience: 8,
        rating: 4.9,
        review_count: 156,
        base_price: 75.0,
    },
    SeedStylist {
        id: "stylist-2",
        salon_id: "salon-1",
        name: "Michael Chen",
        bio: "Creative colorist with expertise in fashion colors",
        specialties: &["Color", "Balayage", "Fashion Colors"],
        years_experience: 6,
        rating: 4.8,
        review_count: 98,
        base_price: 85.0,
    },
    SeedStylist {
        id: "stylist-3",
        salon_id: "salon-2",
        name: "Sarah Johnson",
        bio: "Master colorist specializing in natural-looking highlights",
        specialties: &["Color", "Highlights", "Treatments"],
        years_experience: 10,
        rating: 5.0,
        review_count: 203,
        base_price: 95.0,
    },
    SeedStylist {
        id: "stylist-4",
        salon_id: "salon-3",
        name: "Mike Brown",
        bio: "Classic barber with modern styling skills",
        specialties: &["Haircuts", "Beard Trim", "Hot Towel Shave"],
        years_experience: 12,
        rating: 4.7,
        review_count: 267,
        base_price: 45.0,
    },
];

const SERVICES: &[SeedService] = &[
    SeedService {
        id: "service-1",
        stylist_id: "stylist-1",
        name: "Women's Haircut & Style",
        description: "Precision cut with blow-dry styling",
        category: "haircut",
        duration_minutes: 60,
        price: 75.0,
    },
    SeedService {
        id: "service-2",
        stylist_id: "stylist-1",
        name: "Balayage Color",
        description: "Hand-painted highlights for natural look",
        category: "color",
        duration_minutes: 180,
        price: 200.0,
    },
    SeedService {
        id: "service-3",
        stylist_id: "stylist-2",
        name: "Full Color",
        description: "All-over color application",
        category: "color",
        duration_minutes: 120,
        price: 150.0,
    },
    SeedService {
        id: "service-4",
        stylist_id: "stylist-2",
        name: "Fashion Color",
        description: "Creative color (vivids, pastels)",
        category: "color",
        duration_minutes: 180,
        price: 250.0,
    },
    SeedService {
        id: "service-5",
        stylist_id: "stylist-3",
        name: "Highlights",
        description: "Traditional foil highlights",
        category: "color",
        duration_minutes: 150,
        price: 180.0,
    },
    SeedService {
        id: "service-6",
        stylist_id: "stylist-4",
        name: "Men's Haircut",
        description: "Classic cut with hot towel",
        category: "haircut",
        duration_minutes: 45,
        price: 45.0,
    },
    SeedService {
        id: "service-7",
        stylist_id: "stylist-4",
        name: "Beard Trim & Shape",
        description: "Professional beard grooming",
        category: "grooming",
        duration_minutes: 30,
        price: 25.0,
    },
];

/// Inserts the demo users, salons, stylists and services.
///
/// Skipped when any user already exists. All rows are written in one transaction, so a
/// failure leaves the database untouched.
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - Database already had users, nothing inserted
/// - `Err(AppError::DbErr)` - Insert failed and the transaction was rolled back
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    if entity::prelude::User::find().count(db).await? > 0 {
        tracing::info!("Database already contains users, skipping demo seed");
        return Ok(false);
    }

    let txn = db.begin().await?;
    insert_all(&txn).await?;
    txn.commit().await?;

    tracing::info!(
        "Seeded {} users, {} salons, {} stylists and {} services",
        USERS.len(),
        SALONS.len(),
        STYLISTS.len(),
        SERVICES.len()
    );

    Ok(true)
}

async fn insert_all(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    let now = Utc::now();

    for user in USERS {
        entity::user::ActiveModel {
            id: ActiveValue::Set(user.id.to_string()),
            external_uid: ActiveValue::Set(None),
            email: ActiveValue::Set(user.email.to_string()),
            name: ActiveValue::Set(user.name.to_string()),
            phone: ActiveValue::Set(Some(user.phone.to_string())),
            profile_image_url: ActiveValue::Set(None),
            is_stylist: ActiveValue::Set(false),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;
    }

    for salon in SALONS {
        entity::salon::ActiveModel {
            id: ActiveValue::Set(salon.id.to_string()),
            name: ActiveValue::Set(salon.name.to_string()),
            description: ActiveValue::Set(Some(salon.description.to_string())),
            address: ActiveValue::Set(salon.address.to_string()),
            city: ActiveValue::Set("New York".to_string()),
            state: ActiveValue::Set(Some("NY".to_string())),
            zip_code: ActiveValue::Set(Some(salon.zip_code.to_string())),
            country: ActiveValue::Set("USA".to_string()),
            phone: ActiveValue::Set(Some(salon.phone.to_string())),
            email: ActiveValue::Set(Some(salon.email.to_string())),
            website: ActiveValue::Set(None),
            booking_url: ActiveValue::Set(None),
            latitude: ActiveValue::Set(Some(salon.latitude)),
            longitude: ActiveValue::Set(Some(salon.longitude)),
            cover_image_url: ActiveValue::Set(None),
            logo_url: ActiveValue::Set(None),
            rating: ActiveValue::Set(salon.rating),
            review_count: ActiveValue::Set(salon.review_count),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;
    }

    for stylist in STYLISTS {
        entity::stylist::ActiveModel {
            id: ActiveValue::Set(stylist.id.to_string()),
            user_id: ActiveValue::Set(None),
            salon_id: ActiveValue::Set(stylist.salon_id.to_string()),
            name: ActiveValue::Set(stylist.name.to_string()),
            bio: ActiveValue::Set(Some(stylist.bio.to_string())),
            specialties: ActiveValue::Set(Some(json!(stylist.specialties))),
            years_experience: ActiveValue::Set(stylist.years_experience),
            profile_image_url: ActiveValue::Set(None),
            portfolio_images: ActiveValue::Set(Some(json!([]))),
            rating: ActiveValue::Set(stylist.rating),
            review_count: ActiveValue::Set(stylist.review_count),
            base_price: ActiveValue::Set(stylist.base_price),
            is_active: ActiveValue::Set(true),
            is_verified: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;
    }

    for service in SERVICES {
        entity::service::ActiveModel {
            id: ActiveValue::Set(service.id.to_string()),
            stylist_id: ActiveValue::Set(service.stylist_id.to_string()),
            name: ActiveValue::Set(service.name.to_string()),
            description: ActiveValue::Set(Some(service.description.to_string())),
            category: ActiveValue::Set(service.category.to_string()),
            duration_minutes: ActiveValue::Set(service.duration_minutes),
            price: ActiveValue::Set(service.price),
            image_url: ActiveValue::Set(None),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;
    }

    Ok(())
}
