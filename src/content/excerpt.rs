//! Plain-text excerpts from markdown bodies

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Maximum excerpt length, in characters
pub const EXCERPT_MAX_LEN: usize = 500;

/// Strip markdown formatting, leaving only visible text content.
///
/// Headings, blockquotes, emphasis, strikethrough, and links keep their
/// text; inline code keeps the code text. Whole lists collapse to a
/// `(list)` marker, code blocks to `(code sample)`, and images to
/// `(image: <alt>)`. Whitespace runs (including newlines) collapse to
/// single spaces and the result is trimmed. Never emits an HTML tag.
pub fn strip_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(
        markdown,
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
    );

    let mut text = String::new();
    let mut list_depth = 0usize;
    let mut in_code_block = false;
    // Set while inside an image: the alt text collected so far
    let mut image_alt: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::List(_) => {
                    if list_depth == 0 {
                        text.push_str(" (list) ");
                    }
                    list_depth += 1;
                }
                Tag::CodeBlock(_) => {
                    if list_depth == 0 {
                        text.push_str(" (code sample) ");
                    }
                    in_code_block = true;
                }
                Tag::Image { .. } => image_alt = Some(String::new()),
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::List(_) => list_depth = list_depth.saturating_sub(1),
                TagEnd::CodeBlock => in_code_block = false,
                TagEnd::Image => {
                    if let Some(alt) = image_alt.take() {
                        if list_depth == 0 && !in_code_block {
                            text.push_str(" (image: ");
                            text.push_str(&alt);
                            text.push_str(") ");
                        }
                    }
                }
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::BlockQuote(_)
                | TagEnd::Item => text.push(' '),
                _ => {}
            },
            Event::Text(t) => {
                if let Some(alt) = image_alt.as_mut() {
                    alt.push_str(&t);
                } else if list_depth == 0 && !in_code_block {
                    text.push_str(&t);
                }
            }
            Event::Code(code) => {
                if image_alt.is_none() && list_depth == 0 && !in_code_block {
                    text.push_str(&code);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if image_alt.is_none() {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive a bounded plain-text excerpt from a markdown body.
///
/// The stripped text is returned whole when it fits the budget.
/// Otherwise the first [`EXCERPT_MAX_LEN`] characters are cut
/// immediately after their last period; a period inside the first 100
/// characters is ignored (it would leave most of the budget unused) and
/// the cut falls after the last space instead, which is kept. Text with
/// neither boundary is hard-truncated at the budget.
pub fn excerpt(markdown: &str) -> String {
    let stripped = strip_markdown(markdown);
    let chars: Vec<char> = stripped.chars().collect();
    if chars.len() <= EXCERPT_MAX_LEN {
        return stripped;
    }

    let candidate = &chars[..EXCERPT_MAX_LEN];
    let cut = match candidate.iter().rposition(|&c| c == '.') {
        // A period this early would use under a fifth of the budget
        Some(period) if period >= EXCERPT_MAX_LEN - 400 => Some(period),
        _ => candidate.iter().rposition(|&c| c == ' '),
    };

    match cut {
        Some(end) => candidate[..=end].iter().collect(),
        None => candidate.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_inline_formatting() {
        let input =
            "![image](image.png) **bold** *italics* `some code` and a [link](https://here.com)";
        assert_eq!(
            strip_markdown(input),
            "(image: image) bold italics some code and a link"
        );
    }

    #[test]
    fn test_strip_removes_header_formatting() {
        assert_eq!(strip_markdown("## Heading"), "Heading");
    }

    #[test]
    fn test_strip_removes_block_quote_formatting() {
        assert_eq!(strip_markdown("> Block quote"), "Block quote");
    }

    #[test]
    fn test_strip_removes_strikethrough() {
        assert_eq!(strip_markdown("~~gone~~ text"), "gone text");
    }

    #[test]
    fn test_strip_collapses_lists_to_marker() {
        let input = "Here is a list:\n\n- And\n- This\n- Is\n- A\n- List\n\nThat is the list.";
        assert_eq!(
            strip_markdown(input),
            "Here is a list: (list) That is the list."
        );
    }

    #[test]
    fn test_strip_collapses_ordered_lists_to_marker() {
        let input = "Steps:\n\n1. First\n2. Second\n\nDone.";
        assert_eq!(strip_markdown(input), "Steps: (list) Done.");
    }

    #[test]
    fn test_strip_emits_one_marker_for_a_nested_list() {
        let input = "- Outer\n  - Inner\n- Outer again\n\nAfter.";
        assert_eq!(strip_markdown(input), "(list) After.");
    }

    #[test]
    fn test_strip_collapses_code_blocks_to_marker() {
        let input = "Here is a code sample:\n\n    10 print 'hello world'\n    20 goto 10\n\n  That is the code.";
        assert_eq!(
            strip_markdown(input),
            "Here is a code sample: (code sample) That is the code."
        );
    }

    #[test]
    fn test_strip_collapses_fenced_code_blocks() {
        let input = "Before.\n\n```rust\nfn main() {}\n```\n\nAfter.";
        assert_eq!(strip_markdown(input), "Before. (code sample) After.");
    }

    #[test]
    fn test_strip_is_idempotent_on_plain_text() {
        let input = "Plain text with  uneven   spacing. And a second sentence.";
        let once = strip_markdown(input);
        assert_eq!(strip_markdown(&once), once);
    }

    #[test]
    fn test_excerpt_returns_short_text_unchanged() {
        let input = "nothingtotrimherebutitshouldntmatter";
        assert_eq!(excerpt(input), input);
    }

    #[test]
    fn test_excerpt_cuts_at_a_sentence() {
        // 25 chars per repetition; 20 of them fill the budget exactly
        let input = "A sentence that runs on. ".repeat(30);
        let expected: String = input.chars().take(499).collect();
        let result = excerpt(&input);
        assert!(result.ends_with("runs on."));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_excerpt_cuts_at_a_space_without_periods() {
        let input = "word ".repeat(200);
        let result = excerpt(&input);
        assert_eq!(result, "word ".repeat(100));
    }

    #[test]
    fn test_excerpt_ignores_a_period_in_the_first_hundred_chars() {
        let input = format!("Short. {}", "aword ".repeat(100));
        let expected: String = input.chars().take(499).collect();
        let result = excerpt(&input);
        assert!(result.ends_with(' '));
        assert_eq!(result, expected);
    }

    #[test]
    fn test_excerpt_hard_truncates_without_any_boundary() {
        let input = "x".repeat(600);
        assert_eq!(excerpt(&input), "x".repeat(500));
    }

    #[test]
    fn test_excerpt_budget_counts_characters_not_bytes() {
        let input = "ü".repeat(600);
        assert_eq!(excerpt(&input), "ü".repeat(500));
    }

    #[test]
    fn test_excerpt_strips_markdown_before_trimming() {
        let input = "Here is a list:\n\n- And\n- This\n- Is\n- A\n- List\n\nThat is the list.";
        assert_eq!(excerpt(input), "Here is a list: (list) That is the list.");
    }
}
