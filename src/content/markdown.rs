//! Markdown body rendering with content-root image rewriting

use anyhow::Result;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Markdown renderer for post and page bodies.
///
/// Standard block/inline rules apply, with one override: every image
/// `![alt](ref)` renders as `<img src="{content_root}/{ref}" alt="{alt}" />`,
/// so uploaded media resolves under the configured content root no matter
/// where the rendered page is served from.
///
/// The rule set (parser options and content root) is fixed at
/// construction; instances hold no mutable state and can be shared
/// across concurrent render calls.
pub struct MarkdownRenderer {
    content_root: String,
    options: Options,
}

impl MarkdownRenderer {
    /// Create a renderer that rewrites image targets under `content_root`
    pub fn new(content_root: &str) -> Self {
        Self {
            content_root: content_root.trim_end_matches('/').to_string(),
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);

        let mut events: Vec<Event> = Vec::new();
        // Set while inside an image: (target, alt text collected so far)
        let mut image: Option<(String, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::Image { dest_url, .. }) => {
                    image = Some((dest_url.to_string(), String::new()));
                }
                Event::End(TagEnd::Image) => {
                    if let Some((dest, alt)) = image.take() {
                        events.push(Event::InlineHtml(CowStr::from(self.image_tag(&dest, &alt))));
                    }
                }
                Event::Text(text) if image.is_some() => {
                    if let Some((_, alt)) = image.as_mut() {
                        alt.push_str(&text);
                    }
                }
                // Inline markup nested in alt text contributes only its text
                _ if image.is_some() => {}
                _ => events.push(event),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    fn image_tag(&self, dest: &str, alt: &str) -> String {
        format!(
            r#"<img src="{}/{}" alt="{}" />"#,
            self.content_root,
            html_escape(dest),
            html_escape(alt)
        )
    }
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new("https://content.here.com");
        let html = renderer.render("# Hello World\n\nThis is a test.").unwrap();
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_rewrites_image_under_content_root() {
        let renderer = MarkdownRenderer::new("https://content.here.com");
        let html = renderer
            .render("This is a blog post with an image ![image](image.png)")
            .unwrap();
        assert_eq!(
            html,
            "<p>This is a blog post with an image <img src=\"https://content.here.com/image.png\" alt=\"image\" /></p>\n"
        );
    }

    #[test]
    fn test_trailing_slash_on_content_root_is_normalized() {
        let renderer = MarkdownRenderer::new("https://content.here.com/");
        let html = renderer.render("![image](image.png)").unwrap();
        assert!(html.contains("src=\"https://content.here.com/image.png\""));
    }

    #[test]
    fn test_alt_text_is_escaped() {
        let renderer = MarkdownRenderer::new("https://content.here.com");
        let html = renderer.render("![a \"quoted\" alt](pic.png)").unwrap();
        assert!(html.contains("alt=\"a &quot;quoted&quot; alt\""));
    }

    #[test]
    fn test_other_rules_untouched() {
        let renderer = MarkdownRenderer::new("https://content.here.com");
        let html = renderer
            .render("A [link](https://here.com) and **bold** text")
            .unwrap();
        assert!(html.contains("<a href=\"https://here.com\">link</a>"));
        assert!(html.contains("<strong>bold</strong>"));
    }
}
