use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostAuthorDto {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub username: String,
    pub followers: u32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PostDto {
    pub id: String,
    pub stylist: PostAuthorDto,
    pub image_url: Option<String>,
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FeedDto {
    pub posts: Vec<PostDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TagDto {
    pub status: String,
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salon_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylist_id: Option<String>,
}
