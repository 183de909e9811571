// Review Service - CRUD over a single SQLite-backed review table

// Configuration and shared state
pub mod config;
pub mod app_state;

// Review records and persistence
pub mod models;
pub mod database;

// HTTP surface
pub mod extractors;
pub mod review_interface;

// Common utilities
pub mod error;

// Re-exports for convenience
pub use error::{AppError, AppResult};
