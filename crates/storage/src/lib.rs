//! Persistence and scoring for the mining-games scorekeeper.
//!
//! Repositories wrap the local SQLite store whose file and schema
//! lifecycle the application shell owns; the scoring service turns raw
//! team results into the division-scoped ranks projection.

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::{Result, StorageError};
