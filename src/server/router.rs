use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{ai, auth, booking, feed, health, pro_dashboard, pros, salon, stylist},
    error::AppError,
    startup::cors_layer,
    state::AppState,
};

/// Largest photo accepted by the style preview upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Zelux API",
        version = "1.0.0",
        description = "Salon and stylist discovery, booking and styling backend"
    ),
    paths(
        health::root,
        health::health,
        auth::verify_token,
        auth::login,
        auth::register,
        auth::get_me,
        auth::update_me,
        salon::get_salons,
        salon::get_salon_by_id,
        salon::get_salon_stylists,
        stylist::get_stylist,
        stylist::get_stylist_services,
        stylist::get_stylist_availability,
        pros::get_pros,
        pros::get_pro,
        pros::get_pro_services,
        booking::create_booking,
        booking::get_user_bookings,
        booking::get_booking,
        booking::cancel_booking,
        pro_dashboard::get_dashboard_stats,
        pro_dashboard::get_pro_bookings,
        pro_dashboard::update_booking_status,
        pro_dashboard::get_clients,
        pro_dashboard::get_client,
        pro_dashboard::get_earnings,
        ai::generate_preview,
        ai::get_style_recommendations,
        ai::get_trending_styles,
        feed::get_feed,
        feed::get_trending_feed,
        feed::tag_salon,
        feed::tag_stylist,
        feed::untag_salon,
        feed::untag_stylist,
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "health", description = "Service status"),
        (name = "auth", description = "Authentication and user profile"),
        (name = "salons", description = "Salon discovery"),
        (name = "stylists", description = "Stylist discovery"),
        (name = "pros", description = "Stylist discovery for the mobile app"),
        (name = "bookings", description = "Customer bookings"),
        (name = "pro-dashboard", description = "Stylist dashboard"),
        (name = "ai", description = "AI styling previews and recommendations"),
        (name = "feed", description = "Social feed"),
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// API routes are nested under the configured prefix; the welcome and health endpoints,
/// the API docs and the media mount are served from the root.
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its state
/// - `Err(AppError::ConfigErr)` - A configured CORS origin is invalid
pub fn router(state: &AppState) -> Result<Router<AppState>, AppError> {
    let config = &state.config;

    Ok(Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .nest(&config.api_prefix, api_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service(&config.media_url, ServeDir::new(&config.media_root))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config)?))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/verify-token", post(auth::verify_token))
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/auth/me", get(auth::get_me).patch(auth::update_me))
        .route("/salons", get(salon::get_salons))
        .route("/salons/{salon_id}", get(salon::get_salon_by_id))
        .route("/salons/{salon_id}/stylists", get(salon::get_salon_stylists))
        .route("/stylists/{stylist_id}", get(stylist::get_stylist))
        .route(
            "/stylists/{stylist_id}/services",
            get(stylist::get_stylist_services),
        )
        .route(
            "/stylists/{stylist_id}/availability",
            get(stylist::get_stylist_availability),
        )
        .route("/pros", get(pros::get_pros))
        .route("/pros/{pro_id}", get(pros::get_pro))
        .route("/pros/{pro_id}/services", get(pros::get_pro_services))
        .route("/bookings", post(booking::create_booking))
        // `{id}` is the user ID on the listing and the booking ID on cancel; both routes
        // share the segment so they must share the parameter name.
        .route("/bookings/{id}", get(booking::get_user_bookings))
        .route("/bookings/details/{booking_id}", get(booking::get_booking))
        .route("/bookings/{id}/cancel", patch(booking::cancel_booking))
        .route(
            "/pro/dashboard/stats",
            get(pro_dashboard::get_dashboard_stats),
        )
        .route("/pro/bookings", get(pro_dashboard::get_pro_bookings))
        .route(
            "/pro/bookings/{booking_id}/status",
            put(pro_dashboard::update_booking_status),
        )
        .route("/pro/clients", get(pro_dashboard::get_clients))
        .route("/pro/clients/{client_id}", get(pro_dashboard::get_client))
        .route("/pro/earnings", get(pro_dashboard::get_earnings))
        .route(
            "/ai/preview",
            post(ai::generate_preview).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/ai/style-recommendations",
            post(ai::get_style_recommendations),
        )
        .route("/ai/styles/trending", get(ai::get_trending_styles))
        .route("/feed", get(feed::get_feed))
        .route("/feed/trending", get(feed::get_trending_feed))
        .route("/feed/{post_id}/tag-salon", post(feed::tag_salon))
        .route("/feed/{post_id}/tag-stylist", post(feed::tag_stylist))
        .route(
            "/feed/{post_id}/tag-salon/{salon_id}",
            delete(feed::untag_salon),
        )
        .route(
            "/feed/{post_id}/tag-stylist/{stylist_id}",
            delete(feed::untag_stylist),
        )
}
