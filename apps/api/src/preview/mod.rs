// Preview projection: ResumeState -> read-only view-model for the render target.

pub mod projector;
pub mod view_model;

pub use projector::project;
pub use view_model::PreviewViewModel;
