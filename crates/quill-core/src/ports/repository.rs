use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Persistence port for posts.
///
/// Implementations enforce title uniqueness atomically at the engine level
/// (no check-then-insert window) and keep `find_all` in insertion order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post and return it with its store-assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Overwrite the stored post carrying the same id.
    ///
    /// Fails with `RepoError::NotFound` when the id does not resolve.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}
