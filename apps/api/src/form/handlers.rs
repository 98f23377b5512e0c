//! Axum route handlers for the form session.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::form::session::{PictureStatus, PreviewResponse};
use crate::picture::UploadedPicture;
use crate::preview::{project, PreviewViewModel};
use crate::resume::{FormCommand, ResumeState};
use crate::state::AppState;

/// Multipart field carrying the selected file.
const PICTURE_FIELD: &str = "picture";

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub state: ResumeState,
    pub preview: PreviewViewModel,
    pub dark_mode: bool,
}

#[derive(Debug, Serialize)]
pub struct PictureAccepted {
    pub generation: u64,
    pub status: PictureStatus,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub dark_mode: bool,
}

/// GET /api/v1/form
pub async fn handle_get_form(State(state): State<AppState>) -> Json<ResumeState> {
    Json(state.form.snapshot())
}

/// POST /api/v1/form/commands
///
/// Applies one form event and returns the new state with its preview.
pub async fn handle_command(
    State(state): State<AppState>,
    Json(command): Json<FormCommand>,
) -> Result<Json<CommandResponse>, AppError> {
    let next = state.form.dispatch(&command)?;

    Ok(Json(CommandResponse {
        preview: project(&next),
        state: next,
        dark_mode: state.form.dark_mode(),
    }))
}

/// POST /api/v1/form/picture
///
/// 202 when ingestion was scheduled, 204 when the upload carried no file.
/// Oversized or non-image files are rejected synchronously.
pub async fn handle_upload_picture(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut picture = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PICTURE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await?;

        // Browsers send an empty, unnamed part when nothing was picked.
        let nothing_picked = bytes.is_empty() && file_name.as_deref().unwrap_or("").is_empty();
        if !nothing_picked {
            picture = Some(UploadedPicture::new(
                bytes,
                content_type.as_deref(),
                file_name.as_deref(),
            ));
        }
        break;
    }

    match state.form.submit_picture(picture)? {
        Some(ticket) => {
            let body = PictureAccepted {
                generation: ticket.generation,
                status: PictureStatus::Pending {
                    generation: ticket.generation,
                },
            };
            Ok((StatusCode::ACCEPTED, Json(body)).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// GET /api/v1/form/picture/status
pub async fn handle_picture_status(State(state): State<AppState>) -> Json<PictureStatus> {
    Json(state.form.picture_status())
}

/// GET /api/v1/preview
pub async fn handle_preview(State(state): State<AppState>) -> Json<PreviewResponse> {
    Json(state.form.preview())
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        dark_mode: state.form.toggle_theme(),
    })
}
