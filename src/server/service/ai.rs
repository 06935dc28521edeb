//! Placeholder AI features.
//!
//! No model is called yet. The preview stores the uploaded photo and answers with canned
//! previews; recommendations and trending styles are fixed lists.

use tokio::fs;

use crate::{
    model::ai::{
        PreviewResponseDto, StylePreviewDto, StyleRecommendationDto,
        StyleRecommendationRequestDto, StyleRecommendationsDto, TrendingStyleDto,
        TrendingStylesDto,
    },
    server::{config::Config, error::AppError, model::ai::ImageUpload},
};

pub const DEFAULT_STYLE_TYPE: &str = "haircut";

/// Subdirectory of the media root holding uploaded photos.
pub const UPLOADS_DIR: &str = "uploads";

const TRENDING_UPDATED_AT: &str = "2025-10-11T00:00:00Z";

pub struct AiService<'a> {
    config: &'a Config,
}

impl<'a> AiService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Stores an uploaded photo and returns canned style previews for it.
    ///
    /// # Returns
    /// - `Ok(PreviewResponseDto)` - URL of the stored photo and three sample previews
    /// - `Err(AppError::BadRequest)` - Upload is not an image
    /// - `Err(AppError::IoErr)` - Writing the upload failed
    pub async fn generate_preview(
        &self,
        upload: ImageUpload,
        style_type: Option<String>,
    ) -> Result<PreviewResponseDto, AppError> {
        if !upload.is_image() {
            return Err(AppError::BadRequest("File must be an image".to_string()));
        }

        let preview_id = uuid::Uuid::new_v4().to_string();
        let file_name = format!("{}-original.{}", preview_id, upload.extension());

        let uploads = self.config.media_root.join(UPLOADS_DIR);
        fs::create_dir_all(&uploads).await?;
        fs::write(uploads.join(&file_name), &upload.data).await?;

        tracing::debug!("Stored preview upload {} ({} bytes)", file_name, upload.data.len());

        let samples = [
            ("Modern Fade", "sample-fade.jpg", 0.92),
            ("Classic Cut", "sample-classic.jpg", 0.88),
            ("Textured Crop", "sample-textured.jpg", 0.85),
        ];

        let previews = samples
            .into_iter()
            .enumerate()
            .map(|(i, (style_name, image, confidence))| StylePreviewDto {
                id: format!("{}-{}", preview_id, i + 1),
                style_name: style_name.to_string(),
                preview_url: self.media_url(&format!("previews/{}", image)),
                confidence,
            })
            .collect();

        Ok(PreviewResponseDto {
            original_image_url: self.media_url(&format!("{}/{}", UPLOADS_DIR, file_name)),
            style_type: style_type.unwrap_or_else(|| DEFAULT_STYLE_TYPE.to_string()),
            previews,
            message: "Preview generated successfully (mock data)".to_string(),
        })
    }

    /// Returns canned style recommendations echoing the requested face shape and hair type.
    pub fn recommend(&self, request: StyleRecommendationRequestDto) -> StyleRecommendationsDto {
        let recommendations = vec![
            StyleRecommendationDto {
                style_name: "Layered Bob".to_string(),
                description: "A versatile style that works well with your face shape"
                    .to_string(),
                image_url: self.media_url("styles/layered-bob.jpg"),
                difficulty: "medium".to_string(),
                maintenance: "low".to_string(),
                match_score: 0.95,
            },
            StyleRecommendationDto {
                style_name: "Side Part".to_string(),
                description: "Classic and professional look that suits your hair type"
                    .to_string(),
                image_url: self.media_url("styles/side-part.jpg"),
                difficulty: "easy".to_string(),
                maintenance: "low".to_string(),
                match_score: 0.87,
            },
        ];

        StyleRecommendationsDto {
            face_shape: request.face_shape,
            hair_type: request.hair_type,
            recommendations,
            message: "Recommendations generated (mock data)".to_string(),
        }
    }

    pub fn trending(&self) -> TrendingStylesDto {
        let styles = [
            ("style-1", "Wolf Cut", "haircut", "wolf-cut.jpg", 98, 1247),
            ("style-2", "Balayage Highlights", "color", "balayage.jpg", 95, 1089),
            ("style-3", "Curtain Bangs", "styling", "curtain-bangs.jpg", 92, 934),
        ];

        TrendingStylesDto {
            trending_styles: styles
                .into_iter()
                .map(
                    |(id, name, category, image, popularity_score, booking_count)| {
                        TrendingStyleDto {
                            id: id.to_string(),
                            name: name.to_string(),
                            category: category.to_string(),
                            image_url: self.media_url(&format!("trending/{}", image)),
                            popularity_score,
                            booking_count,
                        }
                    },
                )
                .collect(),
            updated_at: TRENDING_UPDATED_AT.to_string(),
        }
    }

    fn media_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.media_url, path)
    }
}
