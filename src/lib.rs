//! pagewright: the rendering core of a small blog/CMS
//!
//! Stored posts, pages, and Handlebars templates come in through
//! provider traits; final HTML comes out. Markdown bodies are rendered
//! with a content-root-aware image rewrite, dates format gracefully
//! inside templates via the `formatDate` helper, and bounded plain-text
//! excerpts are derived from markdown-stripped body text.

pub mod admin;
pub mod config;
pub mod content;
pub mod helpers;
pub mod provider;
pub mod renderer;

pub use admin::AdminService;
pub use config::{PageConfig, SocialLink};
pub use content::{
    excerpt, strip_markdown, ContentKind, MarkdownRenderer, Page, Post, PostQuery, PostRecord,
    PostStatus, EXCERPT_MAX_LEN,
};
pub use provider::{
    ContentProvider, PageProvider, PostProvider, TemplateKind, TemplateProvider,
};
pub use renderer::{Renderer, RendererOptions};
