// src/image.rs
// Image ingestion: MIME validation and the base64 transport form

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, RoasterError};

/// Largest image accepted for a roast (matches the upload page limit)
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const INVALID_TYPE_MESSAGE: &str = "Invalid image type. Use PNG, JPG, WebP, or GIF.";

/// Image formats the critique endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/webp")]
    Webp,
    #[serde(rename = "image/gif")]
    Gif,
}

impl ImageMime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    /// Sniff the format from magic bytes
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else {
            None
        }
    }
}

impl FromStr for ImageMime {
    type Err = RoasterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image/png" => Ok(Self::Png),
            "image/jpeg" => Ok(Self::Jpeg),
            "image/webp" => Ok(Self::Webp),
            "image/gif" => Ok(Self::Gif),
            _ => Err(RoasterError::Validation(INVALID_TYPE_MESSAGE.to_string())),
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image in transport form: base64 text plus its MIME type.
///
/// Uploads, CLI files and URL captures all end up here, so the critique
/// requester never needs to know where an image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: String,
    pub mime: ImageMime,
}

impl EncodedImage {
    pub fn new(data: impl Into<String>, mime: ImageMime) -> Self {
        Self {
            data: data.into(),
            mime,
        }
    }

    /// Encode raw bytes, enforcing the size limit
    pub fn from_bytes(bytes: &[u8], mime: ImageMime) -> Result<Self> {
        if bytes.is_empty() {
            return Err(RoasterError::Validation("Image is empty".to_string()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(RoasterError::Validation(format!(
                "Image is {} bytes; the limit is {} bytes",
                bytes.len(),
                MAX_IMAGE_BYTES
            )));
        }
        Ok(Self::new(BASE64.encode(bytes), mime))
    }

    /// Read and encode an image file. The format comes from the file's
    /// magic bytes, falling back to its extension.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;

        let mime = match ImageMime::sniff(&bytes) {
            Some(mime) => mime,
            None => mime_guess::from_path(path)
                .first_raw()
                .ok_or_else(|| RoasterError::Validation(INVALID_TYPE_MESSAGE.to_string()))?
                .parse()?,
        };

        Self::from_bytes(&bytes, mime)
    }

    /// `data:` URI form used in multimodal chat messages
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    // ========================================================================
    // ImageMime
    // ========================================================================

    #[test]
    fn test_parse_accepted_types() {
        assert_eq!("image/png".parse::<ImageMime>().unwrap(), ImageMime::Png);
        assert_eq!("image/jpeg".parse::<ImageMime>().unwrap(), ImageMime::Jpeg);
        assert_eq!("image/webp".parse::<ImageMime>().unwrap(), ImageMime::Webp);
        assert_eq!("image/gif".parse::<ImageMime>().unwrap(), ImageMime::Gif);
    }

    #[test]
    fn test_parse_rejects_others() {
        for bad in ["image/svg", "image/svg+xml", "IMAGE/PNG", "image/jpg", ""] {
            let err = bad.parse::<ImageMime>().unwrap_err();
            assert_eq!(err.to_string(), INVALID_TYPE_MESSAGE, "{bad}");
        }
    }

    #[test]
    fn test_serde_uses_mime_strings() {
        assert_eq!(serde_json::to_string(&ImageMime::Png).unwrap(), "\"image/png\"");
        let mime: ImageMime = serde_json::from_str("\"image/webp\"").unwrap();
        assert_eq!(mime, ImageMime::Webp);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(ImageMime::sniff(PNG_HEADER), Some(ImageMime::Png));
        assert_eq!(ImageMime::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::sniff(b"RIFF\0\0\0\0WEBPVP8 "), Some(ImageMime::Webp));
        assert_eq!(ImageMime::sniff(b"GIF89a...."), Some(ImageMime::Gif));
        assert_eq!(ImageMime::sniff(b"<svg"), None);
    }

    // ========================================================================
    // EncodedImage
    // ========================================================================

    #[test]
    fn test_from_bytes_and_data_uri() {
        let image = EncodedImage::from_bytes(b"abc", ImageMime::Png).unwrap();
        assert_eq!(image.data, "YWJj");
        assert_eq!(image.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_from_bytes_limits() {
        assert!(EncodedImage::from_bytes(&[], ImageMime::Png).is_err());
        let too_big = vec![0u8; MAX_IMAGE_BYTES + 1];
        let err = EncodedImage::from_bytes(&too_big, ImageMime::Png).unwrap_err();
        assert!(matches!(err, RoasterError::Validation(_)));
    }

    #[tokio::test]
    async fn test_from_file_sniffs_content() {
        // Wrong extension on purpose; the magic bytes win
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        file.write_all(PNG_HEADER).unwrap();

        let image = EncodedImage::from_file(file.path()).await.unwrap();
        assert_eq!(image.mime, ImageMime::Png);
    }

    #[tokio::test]
    async fn test_from_file_extension_fallback() {
        let mut file = tempfile::Builder::new().suffix(".webp").tempfile().unwrap();
        file.write_all(b"not really an image").unwrap();

        let image = EncodedImage::from_file(file.path()).await.unwrap();
        assert_eq!(image.mime, ImageMime::Webp);
    }

    #[tokio::test]
    async fn test_from_file_unsupported() {
        let mut file = tempfile::Builder::new().suffix(".svg").tempfile().unwrap();
        file.write_all(b"<svg></svg>").unwrap();

        let err = EncodedImage::from_file(file.path()).await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_TYPE_MESSAGE);
    }

    #[tokio::test]
    async fn test_from_file_missing() {
        let err = EncodedImage::from_file(Path::new("/definitely/not/here.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, RoasterError::Io(_)));
    }
}
