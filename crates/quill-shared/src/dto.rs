//! Data Transfer Objects - form payloads for the blog routes.

use serde::{Deserialize, Serialize};

/// Compose-form payload, shared by the create and edit routes.
///
/// Field names match the form controls, so `web::Form` decodes it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
}
