//! Post and Page models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post
///
/// `key` and `title` are always present. `body` holds markdown source,
/// never pre-rendered HTML; the renderer converts it per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique, stable identifier
    pub key: String,

    /// Post title
    pub title: String,

    /// Author display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Publication date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// Markdown body source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Precomputed plain-text excerpt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Post category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Post tags, in order; duplicates allowed
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,

    /// Marks a static page stored alongside posts
    #[serde(default)]
    pub is_page: bool,
}

impl Post {
    /// Create a post with the minimal required fields
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            author: None,
            date: None,
            body: None,
            excerpt: None,
            image_url: None,
            category: None,
            tags: Vec::new(),
            status: None,
            is_page: false,
        }
    }
}

/// A standalone page, rendered through the page template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique, stable identifier
    pub key: String,

    /// Page title
    pub title: String,

    /// Publication status
    pub status: PostStatus,

    /// Markdown body source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Page {
    /// Create a page with the minimal required fields
    pub fn new(key: &str, title: &str, status: PostStatus) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            status,
            body: None,
            image_url: None,
        }
    }
}

/// Publication status of a post or page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// Discriminates posts from static pages.
///
/// Resolved once when content is fetched; which template a record is
/// bound against is a pure function of this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Post,
    Page,
}

impl ContentKind {
    /// Classify a fetched post by its `is_page` flag
    pub fn of(post: &Post) -> Self {
        if post.is_page {
            ContentKind::Page
        } else {
            ContentKind::Post
        }
    }
}

/// Filter passed through to a store's `list`.
///
/// All fields are optional; matching and ordering semantics belong to
/// the store. The renderer only ever forces `is_page` for listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostQuery {
    pub key: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    /// Inclusive lower bound on the publication date
    pub min_date: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the publication date
    pub max_date: Option<DateTime<Utc>>,
    /// Body substring match
    pub body: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
    pub is_page: Option<bool>,
}
