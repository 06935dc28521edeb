use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StylePreviewDto {
    pub id: String,
    pub style_name: String,
    pub preview_url: String,
    pub confidence: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PreviewResponseDto {
    pub original_image_url: String,
    pub style_type: String,
    pub previews: Vec<StylePreviewDto>,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StyleRecommendationRequestDto {
    pub face_shape: String,
    pub hair_type: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StyleRecommendationDto {
    pub style_name: String,
    pub description: String,
    pub image_url: String,
    pub difficulty: String,
    pub maintenance: String,
    pub match_score: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StyleRecommendationsDto {
    pub face_shape: String,
    pub hair_type: String,
    pub recommendations: Vec<StyleRecommendationDto>,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrendingStyleDto {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub popularity_score: u32,
    pub booking_count: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TrendingStylesDto {
    pub trending_styles: Vec<TrendingStyleDto>,
    pub updated_at: String,
}
