//! Admin facade
//!
//! Thin orchestration over the post and content stores for an admin
//! surface: listing and saving posts, listing uploaded content, and
//! issuing upload URLs. The only logic of its own is deriving a
//! missing excerpt at save time.

use anyhow::Result;
use std::sync::Arc;

use crate::content::{excerpt, Post, PostQuery};
use crate::provider::{ContentProvider, PostProvider};

/// Orchestrates admin operations against the backing stores
pub struct AdminService {
    posts: Arc<dyn PostProvider>,
    content: Arc<dyn ContentProvider>,
}

impl AdminService {
    /// Create a service over the given stores
    pub fn new(posts: Arc<dyn PostProvider>, content: Arc<dyn ContentProvider>) -> Self {
        Self { posts, content }
    }

    /// List posts, passing the query through to the store
    pub async fn list_posts(&self, query: Option<&PostQuery>) -> Result<Vec<Post>> {
        self.posts.list(query).await
    }

    /// Persist a post, deriving an excerpt from the body when the post
    /// does not already carry one. A caller-provided excerpt is never
    /// overwritten.
    pub async fn save_post(&self, post: &Post) -> Result<()> {
        if post.excerpt.is_none() {
            if let Some(body) = post.body.as_deref() {
                let mut post = post.clone();
                post.excerpt = Some(excerpt(body));
                tracing::debug!("Derived excerpt for post {}", post.key);
                return self.posts.save(&post).await;
            }
        }
        self.posts.save(post).await
    }

    /// List stored content keys
    pub async fn list_content(&self) -> Result<Vec<String>> {
        self.content.list().await
    }

    /// Issue an upload URL for a content key
    pub async fn upload_url(&self, key: &str) -> Result<String> {
        self.content.upload_url(key, None).await
    }
}
