pub mod config;
pub mod errors;
pub mod form;
pub mod picture;
pub mod preview;
pub mod resume;
pub mod routes;
pub mod state;
