//! Post lifecycle orchestration: input validation, date stamping,
//! sanitization and persistence.

use std::sync::Arc;

use chrono::Local;
use url::Url;

use crate::domain::{NewPost, Post, display_date};
use crate::error::{DomainError, FieldError, RepoError};
use crate::ports::PostRepository;
use crate::sanitize::sanitize;

/// Raw form input for creating or editing a post.
#[derive(Debug, Clone)]
pub struct PostInput {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub img_url: String,
    pub body: String,
}

/// Orchestrates the two mutating post use cases and the read pass-throughs.
///
/// Takes its repository explicitly rather than reading a handle from ambient
/// application state.
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Create a post: stamp the publication date, sanitize the body, persist.
    ///
    /// Exactly one write on success; nothing is persisted when validation
    /// fails or the title is already taken.
    pub async fn create_post(&self, input: PostInput) -> Result<Post, DomainError> {
        validate(&input)?;
        let title = input.title.clone();

        let post = NewPost {
            title: input.title,
            subtitle: input.subtitle,
            date: display_date(Local::now()),
            body: sanitize(&input.body),
            author: input.author,
            img_url: input.img_url,
        };

        match self.posts.insert(post).await {
            Ok(post) => Ok(post),
            Err(RepoError::Constraint(_)) => Err(title_conflict(&title)),
            Err(err) => Err(DomainError::Internal(err.to_string())),
        }
    }

    /// Edit a post in place. The id and the publication date never change.
    pub async fn edit_post(&self, id: i32, input: PostInput) -> Result<Post, DomainError> {
        validate(&input)?;
        let title = input.title.clone();

        let existing = self
            .posts
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(DomainError::NotFound(id))?;

        let post = Post {
            id: existing.id,
            title: input.title,
            subtitle: input.subtitle,
            date: existing.date,
            body: sanitize(&input.body),
            author: input.author,
            img_url: input.img_url,
        };

        match self.posts.update(post).await {
            Ok(post) => Ok(post),
            Err(RepoError::Constraint(_)) => Err(title_conflict(&title)),
            Err(RepoError::NotFound) => Err(DomainError::NotFound(id)),
            Err(err) => Err(DomainError::Internal(err.to_string())),
        }
    }

    /// Look up a single post.
    pub async fn post_by_id(&self, id: i32) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(DomainError::NotFound(id))
    }

    /// All posts, oldest first.
    pub async fn all_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.posts.find_all().await.map_err(internal)
    }
}

/// Check every precondition, reporting all violated fields at once.
fn validate(input: &PostInput) -> Result<(), DomainError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("title", &input.title),
        ("subtitle", &input.subtitle),
        ("author", &input.author),
        ("img_url", &input.img_url),
        ("body", &input.body),
    ] {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, "must not be empty"));
        }
    }

    if !input.img_url.trim().is_empty() && !is_absolute_http_url(&input.img_url) {
        errors.push(FieldError::new(
            "img_url",
            "must be an absolute http(s) URL",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

fn is_absolute_http_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

fn title_conflict(title: &str) -> DomainError {
    DomainError::Conflict(format!("a post titled \"{title}\" already exists"))
}

fn internal(err: RepoError) -> DomainError {
    DomainError::Internal(err.to_string())
}
