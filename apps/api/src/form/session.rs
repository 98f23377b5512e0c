use serde::Serialize;

use crate::preview::{project, PreviewViewModel};
use crate::resume::ResumeState;

/// Where the most recent picture request stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PictureStatus {
    #[default]
    Idle,
    Pending {
        generation: u64,
    },
    Ready {
        generation: u64,
    },
    /// Refused before any read (size or type).
    Rejected {
        message: String,
    },
    /// The read or encode failed after the request was accepted.
    Failed {
        generation: u64,
        message: String,
    },
}

/// Everything the session owns. Replaced as a whole on every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    pub resume: ResumeState,
    pub dark_mode: bool,
    /// Generation of the latest accepted picture request. Completions carrying
    /// any other generation are stale.
    pub picture_generation: u64,
    pub picture_status: PictureStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewResponse {
    pub preview: PreviewViewModel,
    pub dark_mode: bool,
}

impl FormSession {
    pub fn preview(&self) -> PreviewResponse {
        PreviewResponse {
            preview: project(&self.resume),
            dark_mode: self.dark_mode,
        }
    }
}
