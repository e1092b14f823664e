//! Terminal UI for folio

pub mod animation;
pub mod app;
pub mod components;
pub mod themes;

pub use app::App;
