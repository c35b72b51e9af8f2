//! The rendering core
//!
//! [`Renderer`] turns stored content and Handlebars templates into
//! final HTML. Template sources are fetched fresh on every call and
//! compiled ad hoc; the helper registry and the markdown rule set are
//! built once at construction, so one renderer is safe to share across
//! concurrent render calls.
//!
//! Missing templates and missing content are not errors: the affected
//! operation returns `Ok(None)` and the caller (typically an HTTP
//! layer) decides what "not found" looks like. Provider failures
//! propagate unchanged.

use anyhow::Result;
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use std::sync::Arc;

use crate::config::PageConfig;
use crate::content::{ContentKind, MarkdownRenderer, Post, PostQuery};
use crate::helpers::date::display_date;
use crate::provider::{PageProvider, PostProvider, TemplateKind, TemplateProvider};

/// Collaborators handed to a renderer at construction
pub struct RendererOptions {
    /// Post storage
    pub post_provider: Arc<dyn PostProvider>,

    /// Page storage; without it `render_page` reports every page as missing
    pub page_provider: Option<Arc<dyn PageProvider>>,

    /// Template storage
    pub template_provider: Arc<dyn TemplateProvider>,

    /// Site-wide configuration merged into every view
    pub page_config: PageConfig,
}

/// Renders home, list, post, and page views
pub struct Renderer {
    posts: Arc<dyn PostProvider>,
    pages: Option<Arc<dyn PageProvider>>,
    templates: Arc<dyn TemplateProvider>,
    page_config: PageConfig,
    markdown: MarkdownRenderer,
    registry: Handlebars<'static>,
}

/// Listing view bound to the home and list templates
#[derive(Serialize)]
struct ListView<'a> {
    posts: &'a [Post],
    #[serde(flatten)]
    config: &'a PageConfig,
}

/// Single post or page, flattened together with the page config
#[derive(Serialize)]
struct ItemView<'a, T: Serialize> {
    #[serde(flatten)]
    item: &'a T,
    #[serde(flatten)]
    config: &'a PageConfig,
}

impl Renderer {
    /// Create a renderer over the given stores and site configuration
    pub fn new(options: RendererOptions) -> Self {
        let mut registry = Handlebars::new();
        registry.register_helper("formatDate", Box::new(format_date_helper));

        let markdown = MarkdownRenderer::new(&options.page_config.content_root);

        Self {
            posts: options.post_provider,
            pages: options.page_provider,
            templates: options.template_provider,
            page_config: options.page_config,
            markdown,
            registry,
        }
    }

    /// Compile `template` against `content` and return the output.
    ///
    /// The low-level primitive every view operation is built on; also
    /// useful to hosts rendering one-off templates. The registered
    /// `formatDate` helper is available to the template.
    pub fn render<T: Serialize>(&self, template: &str, content: &T) -> Result<String> {
        Ok(self.registry.render_template(template, content)?)
    }

    /// Render the home view, or `Ok(None)` if there is no home template
    pub async fn render_home(&self, query: Option<&PostQuery>) -> Result<Option<String>> {
        self.render_listing(TemplateKind::Home, query).await
    }

    /// Render the listing view; the binding is identical to the home
    /// view, only the fetched template differs
    pub async fn render_list(&self, query: Option<&PostQuery>) -> Result<Option<String>> {
        self.render_listing(TemplateKind::List, query).await
    }

    async fn render_listing(
        &self,
        kind: TemplateKind,
        query: Option<&PostQuery>,
    ) -> Result<Option<String>> {
        let Some(template) = self.templates.template(&kind).await? else {
            tracing::debug!("No {} template, skipping render", kind);
            return Ok(None);
        };

        // Static pages never appear in chronological listings
        let mut query = query.cloned().unwrap_or_default();
        query.is_page = Some(false);

        let mut posts = self.posts.list(Some(&query)).await?;
        for post in &mut posts {
            self.render_markdown_body(&mut post.body)?;
        }

        let view = ListView {
            posts: &posts,
            config: &self.page_config,
        };
        self.render(&template, &view).map(Some)
    }

    /// Render a single post by key.
    ///
    /// A post flagged as a page is bound against the page template: the
    /// template follows the content's kind, not the entry point.
    /// Returns `Ok(None)` when the post or its template is missing.
    pub async fn render_post(&self, key: &str) -> Result<Option<String>> {
        let Some(mut post) = self.posts.get(key).await? else {
            tracing::debug!("Post {} not found", key);
            return Ok(None);
        };

        let kind = TemplateKind::from(ContentKind::of(&post));
        let Some(template) = self.templates.template(&kind).await? else {
            tracing::debug!("No {} template, skipping render", kind);
            return Ok(None);
        };

        self.render_markdown_body(&mut post.body)?;

        let view = ItemView {
            item: &post,
            config: &self.page_config,
        };
        self.render(&template, &view).map(Some)
    }

    /// Render a single page by key against the page template.
    ///
    /// Returns `Ok(None)` when no page provider is configured, or when
    /// the page or the page template is missing.
    pub async fn render_page(&self, key: &str) -> Result<Option<String>> {
        let Some(pages) = self.pages.as_ref() else {
            tracing::debug!("No page provider configured");
            return Ok(None);
        };
        let Some(mut page) = pages.get(key).await? else {
            tracing::debug!("Page {} not found", key);
            return Ok(None);
        };
        let Some(template) = self.templates.page_template().await? else {
            tracing::debug!("No page template, skipping render");
            return Ok(None);
        };

        self.render_markdown_body(&mut page.body)?;

        let view = ItemView {
            item: &page,
            config: &self.page_config,
        };
        self.render(&template, &view).map(Some)
    }

    /// Replace a markdown body with its rendered HTML; an empty or
    /// absent body is left untouched
    fn render_markdown_body(&self, body: &mut Option<String>) -> Result<()> {
        if let Some(markdown) = body.as_deref().filter(|b| !b.is_empty()) {
            *body = Some(self.markdown.render(markdown)?);
        }
        Ok(())
    }
}

/// `{{formatDate date}}` - display a date-valued field, passing
/// unparseable values through unchanged and omitting missing ones
fn format_date_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let rendered = h
        .param(0)
        .map(|p| display_date(p.value()))
        .unwrap_or_default();
    out.write(&rendered)?;
    Ok(())
}
