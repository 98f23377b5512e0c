// Form session ownership: one controller holds the live snapshot, applies
// commands, and schedules picture ingestion.

pub mod controller;
pub mod handlers;
pub mod session;

pub use controller::{FormController, PictureTicket};
pub use session::{FormSession, PictureStatus, PreviewResponse};
