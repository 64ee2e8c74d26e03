//! # Quill Shared
//!
//! Types shared between the HTTP surface and the core: the compose-form
//! payload that both the create and edit routes decode.

pub mod dto;

pub use dto::PostForm;
