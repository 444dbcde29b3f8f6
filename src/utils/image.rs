// src/utils/image.rs

//! Image embedding helpers.
//!
//! The add-lecturer flow accepts either an image URL or a local file; files
//! are embedded as `data:` URLs before submission.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

use crate::error::Result;

/// Map a file extension to a MIME type for the `data:` URL header.
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encode raw bytes as a `data:` URL with the given MIME type.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

/// Read a file and embed it as a `data:` URL.
pub async fn file_to_data_url(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let mime = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or("application/octet-stream", mime_for_extension);
    Ok(data_url(mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("bin"), "application/octet-stream");
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[tokio::test]
    async fn test_file_to_data_url() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photo.png");
        tokio::fs::write(&path, b"abc").await.unwrap();

        let url = file_to_data_url(&path).await.unwrap();
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[tokio::test]
    async fn test_file_to_data_url_missing_file() {
        let tmp = TempDir::new().unwrap();
        let result = file_to_data_url(tmp.path().join("nope.png")).await;
        assert!(result.is_err());
    }
}
