//! # Quill Core
//!
//! The domain layer of the Quill blog.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post entity, the HTML sanitizer and the post lifecycle service.

pub mod domain;
pub mod error;
pub mod ports;
pub mod sanitize;
pub mod service;

pub use error::DomainError;
