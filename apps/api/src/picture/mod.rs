// Profile picture ingestion: size/type checks, bounded async read, data URL encoding.
// Ingestion never touches résumé state; the form controller applies the result.

pub mod encoded;
pub mod ingest;
pub mod source;

pub use encoded::EncodedImage;
pub use ingest::{ImageError, ImageIngestor};
pub use source::{PictureFile, UploadedPicture};
