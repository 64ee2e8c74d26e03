//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - SQLite persistence via SeaORM
//!
//! With the feature disabled the crate still provides the in-memory
//! repository, so the server can run without a database.

pub mod database;

pub use database::InMemoryPostRepository;

#[cfg(feature = "sqlite")]
pub use database::{BlogDatabase, SqlitePostRepository};

pub use database::DatabaseConfig;
