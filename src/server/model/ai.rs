//! Uploaded images handed to the style preview.

use axum::body::Bytes;

/// Image received through a multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: Option<String>,
    pub file_name: Option<String>,
    pub data: Bytes,
}

impl ImageUpload {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image/"))
    }

    /// File extension to store the upload under.
    ///
    /// Taken from the uploaded file name when it has one, otherwise derived from the
    /// content type. Falls back to `jpg`.
    pub fn extension(&self) -> String {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        if let Some(ext) = from_name {
            return ext;
        }

        match self.content_type.as_deref() {
            Some("image/png") => "png",
            Some("image/gif") => "gif",
            Some("image/webp") => "webp",
            Some("image/heic") => "heic",
            _ => "jpg",
        }
        .to_string()
    }
}
