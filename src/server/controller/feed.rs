use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        feed::{FeedDto, TagDto},
    },
    server::{error::AppError, service::feed::FeedService},
};

/// Tag for grouping feed endpoints in OpenAPI documentation
pub static FEED_TAG: &str = "feed";

#[derive(Deserialize)]
pub struct TagSalonParams {
    pub salon_id: String,
}

#[derive(Deserialize)]
pub struct TagStylistParams {
    pub stylist_id: String,
}

/// Get the social feed.
#[utoipa::path(
    get,
    path = "/api/v1/feed",
    tag = FEED_TAG,
    responses(
        (status = 200, description = "Feed posts", body = FeedDto)
    ),
)]
pub async fn get_feed() -> impl IntoResponse {
    (StatusCode::OK, Json(FeedService::new().get_feed()))
}

/// Get feed posts ordered by engagement.
#[utoipa::path(
    get,
    path = "/api/v1/feed/trending",
    tag = FEED_TAG,
    responses(
        (status = 200, description = "Trending posts", body = FeedDto)
    ),
)]
pub async fn get_trending_feed() -> impl IntoResponse {
    (StatusCode::OK, Json(FeedService::new().get_trending()))
}

/// Tag a salon on a post.
///
/// # Returns
/// - `200 OK` - Tag acknowledged
/// - `404 Not Found` - No post with that ID
#[utoipa::path(
    post,
    path = "/api/v1/feed/{post_id}/tag-salon",
    tag = FEED_TAG,
    params(
        ("post_id" = String, Path, description = "Post ID"),
        ("salon_id" = String, Query, description = "Salon to tag")
    ),
    responses(
        (status = 200, description = "Salon tagged", body = TagDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn tag_salon(
    Path(post_id): Path<String>,
    Query(params): Query<TagSalonParams>,
) -> Result<impl IntoResponse, AppError> {
    let ack = FeedService::new().tag_salon(&post_id, &params.salon_id)?;

    Ok((StatusCode::OK, Json(ack)))
}

/// Tag a stylist on a post.
///
/// # Returns
/// - `200 OK` - Tag acknowledged
/// - `404 Not Found` - No post with that ID
#[utoipa::path(
    post,
    path = "/api/v1/feed/{post_id}/tag-stylist",
    tag = FEED_TAG,
    params(
        ("post_id" = String, Path, description = "Post ID"),
        ("stylist_id" = String, Query, description = "Stylist to tag")
    ),
    responses(
        (status = 200, description = "Stylist tagged", body = TagDto),
        (status = 404, description = "Post not found", body = ErrorDto)
    ),
)]
pub async fn tag_stylist(
    Path(post_id): Path<String>,
    Query(params): Query<TagStylistParams>,
) -> Result<impl IntoResponse, AppError> {
    let ack = FeedService::new().tag_stylist(&post_id, &params.stylist_id)?;

    Ok((StatusCode::OK, Json(ack)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/feed/{post_id}/tag-salon/{salon_id}",
    tag = FEED_TAG,
    params(
        ("post_id" = String, Path, description = "Post ID"),
        ("salon_id" = String, Path, description = "Salon to untag")
    ),
    responses(
        (status = 200, description = "Salon untagged", body = TagDto)
    ),
)]
pub async fn untag_salon(Path((post_id, salon_id)): Path<(String, String)>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(FeedService::new().untag_salon(&post_id, &salon_id)),
    )
}

#[utoipa::path(
    delete,
    path = "/api/v1/feed/{post_id}/tag-stylist/{stylist_id}",
    tag = FEED_TAG,
    params(
        ("post_id" = String, Path, description = "Post ID"),
        ("stylist_id" = String, Path, description = "Stylist to untag")
    ),
    responses(
        (status = 200, description = "Stylist untagged", body = TagDto)
    ),
)]
pub async fn untag_stylist(
    Path((post_id, stylist_id)): Path<(String, String)>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(FeedService::new().untag_stylist(&post_id, &stylist_id)),
    )
}
