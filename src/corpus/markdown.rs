// file: src/corpus/markdown.rs
// description: markdown to plain text conversion with pulldown-cmark
// reference: https://docs.rs/pulldown-cmark

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownText {
    pub plain_text: String,
    /// Text of the first heading, if any
    pub title: Option<String>,
}

/// Drops markup and code blocks, keeping prose and heading text.
pub fn strip_markdown(content: &str) -> MarkdownText {
    let parser = Parser::new(content);

    let mut plain_text = String::new();
    let mut title: Option<String> = None;
    let mut current_heading: Option<String> = None;
    let mut in_code_block = false;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                current_heading = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(text) = current_heading.take() {
                    let text = text.trim().to_string();
                    if title.is_none() && !text.is_empty() {
                        title = Some(text);
                    }
                }
                plain_text.push('\n');
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) | Event::Code(text) => {
                if in_code_block {
                    continue;
                }
                if let Some(heading) = current_heading.as_mut() {
                    heading.push_str(&text);
                }
                plain_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak => plain_text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) => plain_text.push('\n'),
            _ => {}
        }
    }

    MarkdownText {
        plain_text: plain_text.trim().to_string(),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_first_heading() {
        let parsed = strip_markdown("# Release Plan\n\nShip **v2** by Friday.\n\n## Risks\n");
        assert_eq!(parsed.title.as_deref(), Some("Release Plan"));
        assert!(parsed.plain_text.contains("Ship v2 by Friday."));
        assert!(!parsed.plain_text.contains("**"));
    }

    #[test]
    fn test_code_blocks_dropped() {
        let parsed = strip_markdown("Intro text\n\n```rust\nfn main() {}\n```\n");
        assert_eq!(parsed.plain_text, "Intro text");
        assert!(parsed.title.is_none());
    }

    #[test]
    fn test_links_keep_text() {
        let parsed = strip_markdown("See [the runbook](https://wiki.example/runbook).");
        assert_eq!(parsed.plain_text, "See the runbook.");
    }
}
