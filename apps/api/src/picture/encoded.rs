use std::fmt;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use serde::Serialize;

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A self-contained `data:<mime>;base64,<payload>` string, usable directly as
/// an image source. Only built by [`EncodedImage::encode`], so a value of this
/// type is always complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodedImage(Arc<str>);

impl EncodedImage {
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        let payload = BASE64_STANDARD.encode(bytes);
        let url = format!("{DATA_PREFIX}{mime_type}{BASE64_MARKER}{payload}");
        Self(Arc::from(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &str {
        self.split().0
    }

    pub fn payload(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        let rest = &self.0[DATA_PREFIX.len()..];
        rest.split_once(BASE64_MARKER).unwrap_or((rest, ""))
    }
}

impl fmt::Display for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
