//! Todo Lists
//!
//! Server-rendered web front for named to-do lists:
//! - config: environment settings
//! - forms: request DTOs and validation
//! - handlers: the HTTP endpoints
//! - views: HTML pages
//! - flash: one-shot messages across redirects
//!
//! Storage lives in the `todo_store` crate.

pub mod app;
pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod views;

pub use app::{router, AppState};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
