pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod report;
pub mod ui;

pub use error::{AppError, Result, RowSkip};
