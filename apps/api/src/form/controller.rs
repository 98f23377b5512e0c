use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::form::session::{FormSession, PictureStatus, PreviewResponse};
use crate::picture::{EncodedImage, ImageError, ImageIngestor, PictureFile};
use crate::resume::{FormCommand, ResumeState, StateError};

/// Owner of the single form session.
///
/// The session lives in a `watch` channel: every change is one atomic
/// replacement of the whole `FormSession`, and subscribers always observe a
/// complete snapshot. Cloning the controller shares the same session.
#[derive(Clone)]
pub struct FormController {
    session: Arc<watch::Sender<FormSession>>,
    ingestor: ImageIngestor,
}

/// Handle to a scheduled picture ingestion.
#[derive(Debug)]
pub struct PictureTicket {
    pub generation: u64,
    pub task: JoinHandle<()>,
}

impl FormController {
    pub fn new(ingestor: ImageIngestor) -> Self {
        let (session, _) = watch::channel(FormSession::default());
        Self {
            session: Arc::new(session),
            ingestor,
        }
    }

    pub fn snapshot(&self) -> ResumeState {
        self.session.borrow().resume.clone()
    }

    pub fn preview(&self) -> PreviewResponse {
        self.session.borrow().preview()
    }

    pub fn picture_status(&self) -> PictureStatus {
        self.session.borrow().picture_status.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormSession> {
        self.session.subscribe()
    }

    /// Applies one command. On error the session is left untouched.
    pub fn dispatch(&self, command: &FormCommand) -> Result<ResumeState, StateError> {
        let mut outcome = None;
        self.session
            .send_if_modified(|session| match session.resume.apply(command) {
                Ok(next) => {
                    session.resume = next.clone();
                    outcome = Some(Ok(next));
                    true
                }
                Err(err) => {
                    outcome = Some(Err(err));
                    false
                }
            });

        match outcome {
            Some(Ok(next)) => {
                debug!("Applied {} command", command.kind());
                Ok(next)
            }
            Some(Err(err)) => {
                error!("Rejected {} command: {err}", command.kind());
                Err(err)
            }
            // `send_if_modified` always runs its closure.
            None => Ok(self.snapshot()),
        }
    }

    /// Current theme flag.
    pub fn dark_mode(&self) -> bool {
        self.session.borrow().dark_mode
    }

    /// Flips the light/dark flag and returns the new value.
    pub fn toggle_theme(&self) -> bool {
        let mut dark_mode = false;
        self.session.send_modify(|session| {
            session.dark_mode = !session.dark_mode;
            dark_mode = session.dark_mode;
        });
        dark_mode
    }

    /// Starts ingesting a newly selected picture.
    ///
    /// `None` (the picker closed without a file) changes nothing. Files that
    /// fail the up-front checks are rejected immediately and the current
    /// picture is kept. Otherwise the read runs on a background task; only the
    /// latest accepted request may write `picture` when it completes.
    pub fn submit_picture<F>(&self, file: Option<F>) -> Result<Option<PictureTicket>, ImageError>
    where
        F: PictureFile + 'static,
    {
        let Some(file) = file else {
            debug!("No picture selected; keeping the current one");
            return Ok(None);
        };

        if let Err(err) = self.ingestor.check(&file) {
            warn!("Picture rejected: {err}");
            let message = err.to_string();
            self.session
                .send_modify(|session| session.picture_status = PictureStatus::Rejected { message });
            return Err(err);
        }

        let mut generation = 0;
        self.session.send_modify(|session| {
            session.picture_generation += 1;
            generation = session.picture_generation;
            session.picture_status = PictureStatus::Pending { generation };
        });
        info!(
            "Ingesting picture #{generation} ({} bytes, {})",
            file.size(),
            file.content_type()
        );

        let controller = self.clone();
        let task = tokio::spawn(async move {
            let result = controller.ingestor.ingest(&file).await;
            controller.complete_picture(generation, result);
        });

        Ok(Some(PictureTicket { generation, task }))
    }

    fn complete_picture(&self, generation: u64, result: Result<EncodedImage, ImageError>) {
        let outcome = match &result {
            Ok(picture) => Ok(format!(
                "{}, {} base64 chars",
                picture.mime_type(),
                picture.payload().len()
            )),
            Err(err) => Err(err.to_string()),
        };
        let mut stale = false;

        self.session.send_if_modified(|session| {
            if session.picture_generation != generation {
                stale = true;
                return false;
            }
            session.picture_status = match result {
                Ok(picture) => {
                    session.resume = session.resume.with_picture(picture);
                    PictureStatus::Ready { generation }
                }
                Err(err) => PictureStatus::Failed {
                    generation,
                    message: err.to_string(),
                },
            };
            true
        });

        if stale {
            debug!("Discarding stale picture #{generation}");
            return;
        }
        match outcome {
            Ok(summary) => info!("Picture #{generation} applied ({summary})"),
            Err(message) => warn!("Picture #{generation} failed: {message}"),
        }
    }
}
