//! In-memory repository - used as fallback when the database is unavailable.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store behind an async RwLock.
///
/// Keeps the SQLite adapter's semantics: unique titles, insertion-order
/// listing, ids assigned once and never reused. Data is lost on restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.title == post.title) {
            return Err(RepoError::Constraint(format!(
                "posts.title: {}",
                post.title
            )));
        }

        // no delete path exists, so the next id is always last + 1
        let id = posts.last().map(|p| p.id + 1).unwrap_or(1);
        let stored = Post {
            id,
            title: post.title,
            subtitle: post.subtitle,
            date: post.date,
            body: post.body,
            author: post.author,
            img_url: post.img_url,
        };

        posts.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id != post.id && p.title == post.title) {
            return Err(RepoError::Constraint(format!(
                "posts.title: {}",
                post.title
            )));
        }

        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(slot) => {
                *slot = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }
}
