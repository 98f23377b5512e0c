use crate::config::Config;
use crate::form::FormController;
use crate::picture::ImageIngestor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one form session this process serves.
    pub form: FormController,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ingestor = ImageIngestor::new(config.max_picture_bytes, config.picture_read_timeout);
        Self {
            form: FormController::new(ingestor),
            config,
        }
    }
}
