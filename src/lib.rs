//! Bibliodesk - Personal Library Management
//!
//! A small library manager tracking a book catalog, a member registry and
//! the loans between them. All state lives in memory and is persisted as
//! JSON snapshots through a key-value store; the CLI is a thin adapter over
//! the [`services::Library`] model.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod storage;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
