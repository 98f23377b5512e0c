use async_trait::async_trait;
use bytes::Bytes;

/// An opaque user-selected file. Size and declared type are known up front;
/// the content is only available through the suspending [`read_all`].
///
/// [`read_all`]: PictureFile::read_all
#[async_trait]
pub trait PictureFile: Send + Sync {
    fn size(&self) -> u64;

    fn content_type(&self) -> &str;

    async fn read_all(&self) -> std::io::Result<Bytes>;
}

/// A file received from a multipart upload, already buffered in memory.
#[derive(Debug, Clone)]
pub struct UploadedPicture {
    content_type: String,
    bytes: Bytes,
}

impl UploadedPicture {
    /// Uses the declared content type when the client sent a meaningful one,
    /// otherwise guesses from the file name extension.
    pub fn new(bytes: Bytes, declared_type: Option<&str>, file_name: Option<&str>) -> Self {
        let content_type = match declared_type.map(str::trim) {
            Some(t) if !t.is_empty() && t != "application/octet-stream" => t.to_ascii_lowercase(),
            _ => infer_mime_type(file_name.unwrap_or_default()),
        };
        Self {
            content_type,
            bytes,
        }
    }
}

#[async_trait]
impl PictureFile for UploadedPicture {
    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn read_all(&self) -> std::io::Result<Bytes> {
        Ok(self.bytes.clone())
    }
}

fn infer_mime_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .to_string()
}
