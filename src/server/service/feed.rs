//! Placeholder social feed.
//!
//! Posts are a fixed sample set. Tagging checks the post exists but stores nothing.

use chrono::{Duration, Utc};

use crate::{
    model::feed::{FeedDto, PostAuthorDto, PostDto, TagDto},
    server::error::AppError,
};

pub struct FeedService;

impl FeedService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_feed(&self) -> FeedDto {
        FeedDto {
            posts: sample_posts(),
        }
    }

    /// Sample posts ordered by engagement (`likes + 2 * comments`), highest first.
    pub fn get_trending(&self) -> FeedDto {
        let mut posts = sample_posts();
        posts.sort_by_key(|post| std::cmp::Reverse(engagement(post)));

        FeedDto { posts }
    }

    /// # Returns
    /// - `Ok(TagDto)` - Acknowledgement echoing the post and salon
    /// - `Err(AppError::NotFound)` - Unknown post
    pub fn tag_salon(&self, post_id: &str, salon_id: &str) -> Result<TagDto, AppError> {
        self.require_post(post_id)?;

        Ok(tag_ack(post_id, Some(salon_id), None))
    }

    pub fn tag_stylist(&self, post_id: &str, stylist_id: &str) -> Result<TagDto, AppError> {
        self.require_post(post_id)?;

        Ok(tag_ack(post_id, None, Some(stylist_id)))
    }

    pub fn untag_salon(&self, post_id: &str, salon_id: &str) -> TagDto {
        tag_ack(post_id, Some(salon_id), None)
    }

    pub fn untag_stylist(&self, post_id: &str, stylist_id: &str) -> TagDto {
        tag_ack(post_id, None, Some(stylist_id))
    }

    fn require_post(&self, post_id: &str) -> Result<(), AppError> {
        if sample_posts().iter().any(|post| post.id == post_id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Post not found".to_string()))
        }
    }
}

impl Default for FeedService {
    fn default() -> Self {
        Self::new()
    }
}

fn engagement(post: &PostDto) -> u32 {
    post.likes + 2 * post.comments
}

fn tag_ack(post_id: &str, salon_id: Option<&str>, stylist_id: Option<&str>) -> TagDto {
    TagDto {
        status: "ok".to_string(),
        post_id: post_id.to_string(),
        salon_id: salon_id.map(str::to_string),
        stylist_id: stylist_id.map(str::to_string),
    }
}

fn sample_posts() -> Vec<PostDto> {
    let now = Utc::now();

    let post = |id: &str,
                author: (&str, &str, &str, u32),
                caption: &str,
                likes: u32,
                comments: u32,
                age: Duration,
                tags: [&str; 3]| {
        let (author_id, name, username, followers) = author;
        PostDto {
            id: id.to_string(),
            stylist: PostAuthorDto {
                id: author_id.to_string(),
                name: name.to_string(),
                avatar_url: None,
                username: username.to_string(),
                followers,
            },
            image_url: None,
            caption: caption.to_string(),
            likes,
            comments,
            created_at: now - age,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    };

    vec![
        post(
            "post-1",
            ("stylist-1", "Jane Smith", "jane_smith", 12450),
            "Fresh balayage for fall 🍂",
            234,
            12,
            Duration::hours(3),
            ["#balayage", "#color", "#fallhair"],
        ),
        post(
            "post-2",
            ("stylist-4", "Mike Brown", "mike_barber", 8650),
            "Classic cut with a modern fade ✂️",
            189,
            8,
            Duration::hours(8),
            ["#barber", "#fade", "#menshair"],
        ),
        post(
            "post-3",
            ("stylist-3", "Sarah Johnson", "sarah_colors", 15320),
            "Natural highlights that pop ✨",
            301,
            25,
            Duration::days(1),
            ["#highlights", "#natural", "#hairgoals"],
        ),
    ]
}
