//! Store collaborator traits
//!
//! Posts, pages, templates, and raw uploaded content live behind these
//! traits; hosts wire in database- or filesystem-backed implementations.
//! Every fetch is async and may suspend on I/O. Failures propagate to
//! the caller unchanged - the rendering core never retries.

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

use crate::content::{ContentKind, Page, Post, PostQuery};

/// Selects which template source to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateKind {
    Home,
    List,
    Post,
    Page,
    /// A free-form template key
    Custom(String),
}

impl TemplateKind {
    /// Stable key for this kind, as used by template stores
    pub fn as_str(&self) -> &str {
        match self {
            TemplateKind::Home => "home",
            TemplateKind::List => "list",
            TemplateKind::Post => "post",
            TemplateKind::Page => "page",
            TemplateKind::Custom(key) => key,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ContentKind> for TemplateKind {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Post => TemplateKind::Post,
            ContentKind::Page => TemplateKind::Page,
        }
    }
}

/// Post storage
#[async_trait]
pub trait PostProvider: Send + Sync {
    /// List posts, optionally filtered; ordering is the store's choice
    async fn list(&self, query: Option<&PostQuery>) -> Result<Vec<Post>>;

    /// Fetch a post by key
    async fn get(&self, key: &str) -> Result<Option<Post>>;

    /// Persist a post
    async fn save(&self, post: &Post) -> Result<()>;
}

/// Static page storage
#[async_trait]
pub trait PageProvider: Send + Sync {
    /// List pages, optionally filtered
    async fn list(&self, query: Option<&PostQuery>) -> Result<Vec<Page>>;

    /// Fetch a page by key
    async fn get(&self, key: &str) -> Result<Option<Page>>;

    /// Persist a page
    async fn save(&self, page: &Page) -> Result<()>;
}

/// Template storage.
///
/// Template sources are opaque Handlebars text keyed by kind; `None`
/// means no such template exists. Sources are fetched fresh per render
/// call - compiled templates are never cached by this crate.
#[async_trait]
pub trait TemplateProvider: Send + Sync {
    /// Fetch the template source for a kind
    async fn template(&self, kind: &TemplateKind) -> Result<Option<String>>;

    /// Fetch the home template
    async fn home_template(&self) -> Result<Option<String>> {
        self.template(&TemplateKind::Home).await
    }

    /// Fetch the list template
    async fn list_template(&self) -> Result<Option<String>> {
        self.template(&TemplateKind::List).await
    }

    /// Fetch the post template
    async fn post_template(&self) -> Result<Option<String>> {
        self.template(&TemplateKind::Post).await
    }

    /// Fetch the page template
    async fn page_template(&self) -> Result<Option<String>> {
        self.template(&TemplateKind::Page).await
    }
}

/// Raw uploaded-content storage
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// List stored content keys
    async fn list(&self) -> Result<Vec<String>>;

    /// Store raw content under a key
    async fn save(&self, key: &str, content: &[u8]) -> Result<()>;

    /// Issue a pre-authorized upload URL for a key
    async fn upload_url(&self, key: &str, content_type: Option<&str>) -> Result<String>;
}
