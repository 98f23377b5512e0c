use std::time::Duration;

use mime_guess::mime::{self, Mime};
use thiserror::Error;
use tracing::debug;

use crate::picture::encoded::EncodedImage;
use crate::picture::source::PictureFile;

/// 5 MB, inclusive.
pub const DEFAULT_MAX_PICTURE_BYTES: u64 = 5_000_000;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Picture is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported picture type '{0}', expected an image")]
    UnsupportedType(String),

    #[error("Failed to read picture: {0}")]
    ReadFailure(#[from] std::io::Error),

    #[error("Reading the picture timed out after {0:?}")]
    TimedOut(Duration),
}

/// Turns a user-selected file into an [`EncodedImage`].
///
/// Stateless: callers that run several ingestions concurrently decide which
/// result to keep.
#[derive(Debug, Clone)]
pub struct ImageIngestor {
    max_bytes: u64,
    read_timeout: Duration,
}

impl Default for ImageIngestor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PICTURE_BYTES, DEFAULT_READ_TIMEOUT)
    }
}

impl ImageIngestor {
    pub fn new(max_bytes: u64, read_timeout: Duration) -> Self {
        Self {
            max_bytes,
            read_timeout,
        }
    }

    /// Checks that need no read: declared size and content type.
    pub fn check(&self, file: &dyn PictureFile) -> Result<(), ImageError> {
        self.check_size(file.size())?;
        image_essence(file.content_type())?;
        Ok(())
    }

    pub async fn ingest(&self, file: &dyn PictureFile) -> Result<EncodedImage, ImageError> {
        self.check_size(file.size())?;
        let mime_type = image_essence(file.content_type())?;

        let bytes = tokio::time::timeout(self.read_timeout, file.read_all())
            .await
            .map_err(|_| ImageError::TimedOut(self.read_timeout))??;

        // The handle's reported size is not trusted past this point.
        self.check_size(bytes.len() as u64)?;

        debug!("Encoding {} byte picture as {mime_type}", bytes.len());
        Ok(EncodedImage::encode(&mime_type, &bytes))
    }

    fn check_size(&self, size: u64) -> Result<(), ImageError> {
        if size > self.max_bytes {
            return Err(ImageError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        Ok(())
    }
}

/// Parses a declared content type and keeps only `type/subtype`.
/// Anything that is not a well-formed `image/*` type is refused, so no client
/// text beyond the essence ever reaches the data URL.
fn image_essence(content_type: &str) -> Result<String, ImageError> {
    let unsupported = || ImageError::UnsupportedType(content_type.to_string());
    let parsed: Mime = content_type.parse().map_err(|_| unsupported())?;
    if parsed.type_() != mime::IMAGE || parsed.subtype().as_str().is_empty() {
        return Err(unsupported());
    }
    Ok(parsed.essence_str().to_ascii_lowercase())
}
