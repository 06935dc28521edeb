use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        ai::{
            PreviewResponseDto, StyleRecommendationRequestDto, StyleRecommendationsDto,
            TrendingStylesDto,
        },
    },
    server::{
        error::AppError, model::ai::ImageUpload, service::ai::AiService, state::AppState,
    },
};

/// Tag for grouping AI styling endpoints in OpenAPI documentation
pub static AI_TAG: &str = "ai";

/// Multipart field carrying the photo.
const IMAGE_FIELD: &str = "image";

#[derive(Deserialize)]
pub struct PreviewParams {
    pub style_type: Option<String>,
}

/// Multipart form accepted by the preview endpoint.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PreviewUploadForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

/// Generate style previews for an uploaded photo.
///
/// The photo is stored under the media root; previews are sample images until a model
/// is wired in.
///
/// # Access Control
/// - `Public`
///
/// # Returns
/// - `200 OK` - Stored photo URL and previews
/// - `400 Bad Request` - Missing `image` field or the file is not an image
/// - `500 Internal Server Error` - Storing the upload failed
#[utoipa::path(
    post,
    path = "/api/v1/ai/preview",
    tag = AI_TAG,
    params(
        ("style_type" = Option<String>, Query, description = "Kind of style to preview (default: haircut)")
    ),
    request_body(content = PreviewUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Preview generated", body = PreviewResponseDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_preview(
    State(state): State<AppState>,
    Query(params): Query<PreviewParams>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?;

        upload = Some(ImageUpload {
            content_type,
            file_name,
            data,
        });
        break;
    }

    let upload = upload.ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;

    let preview = AiService::new(&state.config)
        .generate_preview(upload, params.style_type)
        .await?;

    Ok((StatusCode::OK, Json(preview)))
}

/// Recommend styles for a face shape and hair type.
#[utoipa::path(
    post,
    path = "/api/v1/ai/style-recommendations",
    tag = AI_TAG,
    request_body = StyleRecommendationRequestDto,
    responses(
        (status = 200, description = "Style recommendations", body = StyleRecommendationsDto)
    ),
)]
pub async fn get_style_recommendations(
    State(state): State<AppState>,
    Json(payload): Json<StyleRecommendationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let recommendations = AiService::new(&state.config).recommend(payload);

    Ok((StatusCode::OK, Json(recommendations)))
}

#[utoipa::path(
    get,
    path = "/api/v1/ai/styles/trending",
    tag = AI_TAG,
    responses(
        (status = 200, description = "Trending styles", body = TrendingStylesDto)
    ),
)]
pub async fn get_trending_styles(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let trending = AiService::new(&state.config).trending();

    Ok((StatusCode::OK, Json(trending)))
}
