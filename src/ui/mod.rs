//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod recap_panel;

pub use app::RecapApp;
