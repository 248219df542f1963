//! In-memory task list served over HTTP.
//!
//! This crate provides:
//! - The `Task` record and its JSON shape
//! - A lock-guarded, insertion-ordered task store
//! - Axum handlers and router for the CRUD endpoints
//! - Server configuration, tracing setup, and the serve loop

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod store;
pub mod telemetry;

pub use config::{Config, LogFormat};
pub use error::{ApiError, StoreError};
pub use models::Task;
pub use server::{build_router, AppState};
pub use store::TaskStore;
