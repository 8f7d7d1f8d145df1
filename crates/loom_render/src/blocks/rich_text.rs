//! Rich text block
//!
//! Fields: `content` (markdown, required), `align`.
//!
//! Markdown is converted with pulldown-cmark (tables, strikethrough and task
//! lists enabled). Raw HTML in the source is dropped rather than passed
//! through, and `javascript:` links are neutralised, since block content is
//! tenant-authored.

use loom_core::DataExt;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

use super::{pick, ALIGN_VALUES};
use crate::context::RenderContext;
use crate::markup::{el, Element, Node};
use crate::registry::{BlockRenderer, BlockView};

pub struct RichTextBlock;

impl BlockRenderer for RichTextBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(content) = block.data.str_field("content") else {
            return block.invalid_field(cx, "content");
        };

        el("div")
            .data("rich-text", "")
            .data("align", pick(block.data.str_field("align"), ALIGN_VALUES, "left"))
            .children(markdown_to_nodes(content))
            .into()
    }
}

/// Convert markdown into markup nodes
pub fn markdown_to_nodes(source: &str) -> Vec<Node> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut state = ConvertState::new();
    for event in Parser::new_ext(source, options) {
        state.handle_event(event);
    }
    state.finish()
}

// ============================================================================
// Conversion state
// ============================================================================

/// An open element waiting for its end event
struct Frame {
    element: Element,
    /// Dropped on close (raw HTML, metadata, footnote definitions)
    discard: bool,
}

struct ConvertState {
    /// Root frame is never popped
    stack: Vec<Frame>,
    in_table_head: bool,
}

impl ConvertState {
    fn new() -> Self {
        Self {
            stack: vec![Frame {
                element: el("div"),
                discard: false,
            }],
            in_table_head: false,
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(_) => self.end_tag(),
            Event::Text(text) => self.push(Node::Text(text.into_string())),
            Event::Code(code) => self.push(el("code").text(code.into_string()).into()),
            Event::SoftBreak => self.push(Node::Text("\n".to_string())),
            Event::HardBreak => self.push(el("br").into()),
            Event::Rule => self.push(el("hr").into()),
            Event::TaskListMarker(checked) => self.push(
                el("input")
                    .attr("type", "checkbox")
                    .flag("checked", checked)
                    .flag("disabled", true)
                    .into(),
            ),
            Event::Html(_) | Event::InlineHtml(_) => {}
            Event::FootnoteReference(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let mut discard = false;
        let element = match tag {
            Tag::Paragraph => el("p"),
            Tag::Heading { level, .. } => el(heading_tag(level)),
            Tag::BlockQuote => el("blockquote"),
            Tag::CodeBlock(kind) => match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                    el("pre").data("language", lang.into_string())
                }
                _ => el("pre"),
            },
            Tag::List(Some(start)) if start != 1 => el("ol").attr("start", start.to_string()),
            Tag::List(Some(_)) => el("ol"),
            Tag::List(None) => el("ul"),
            Tag::Item => el("li"),
            Tag::Table(_) => el("table"),
            Tag::TableHead => {
                self.in_table_head = true;
                el("thead")
            }
            Tag::TableRow => el("tr"),
            Tag::TableCell => {
                if self.in_table_head {
                    el("th")
                } else {
                    el("td")
                }
            }
            Tag::Emphasis => el("em"),
            Tag::Strong => el("strong"),
            Tag::Strikethrough => el("del"),
            Tag::Link {
                dest_url, title, ..
            } => el("a")
                .attr("href", safe_url(&dest_url))
                .attr_opt("title", (!title.is_empty()).then(|| title.into_string())),
            Tag::Image {
                dest_url, title, ..
            } => el("img")
                .attr("src", safe_url(&dest_url))
                .attr_opt("title", (!title.is_empty()).then(|| title.into_string())),
            Tag::HtmlBlock | Tag::FootnoteDefinition(_) | Tag::MetadataBlock(_) => {
                discard = true;
                el("div")
            }
        };
        self.stack.push(Frame { element, discard });
    }

    fn end_tag(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        if frame.discard {
            return;
        }

        let mut element = frame.element;
        match element.tag() {
            "img" => {
                // Image alt text arrives as child text events
                let alt = element.text_content();
                element.take_children();
                element.set_attr("alt", alt);
            }
            "thead" => {
                // Header cells are emitted without a row of their own
                self.in_table_head = false;
                let cells = element.take_children();
                element.push(el("tr").children(cells));
            }
            _ => {}
        }
        self.push(element.into());
    }

    fn push(&mut self, node: Node) {
        if let Some(frame) = self.stack.last_mut() {
            frame.element.push(node);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        // Close anything left open by a truncated event stream
        while self.stack.len() > 1 {
            self.end_tag();
        }
        match self.stack.pop() {
            Some(root) => root.element.into_child_nodes(),
            None => Vec::new(),
        }
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Drop script-capable URL schemes.
///
/// The scheme is read the way a browser's URL parser reads it: leading and
/// trailing C0 controls and spaces are ignored, and tabs and newlines are
/// removed anywhere.
pub(crate) fn safe_url(url: &str) -> String {
    let scheme: String = url
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    if scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") || scheme.starts_with("data:text/html") {
        "#".to_string()
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::render;
    use serde_json::json;

    fn html(md: &str) -> String {
        markdown_to_nodes(md).iter().map(Node::to_html).collect()
    }

    #[test]
    fn test_inline_styles() {
        assert_eq!(
            html("Hello *world* and **bold** ~~gone~~ `code`"),
            "<p>Hello <em>world</em> and <strong>bold</strong> <del>gone</del> <code>code</code></p>"
        );
    }

    #[test]
    fn test_headings_and_lists() {
        assert_eq!(html("## Title"), "<h2>Title</h2>");
        assert_eq!(html("- one\n- two"), "<ul><li>one</li><li>two</li></ul>");
        assert_eq!(
            html("3. three\n4. four"),
            "<ol start=\"3\"><li>three</li><li>four</li></ol>"
        );
    }

    #[test]
    fn test_links_are_sanitized() {
        assert_eq!(
            html("[ok](/about \"About\") [bad](javascript:alert(1))"),
            "<p><a href=\"/about\" title=\"About\">ok</a> <a href=\"#\">bad</a></p>"
        );
    }

    #[test]
    fn test_obfuscated_schemes_are_dropped() {
        for url in [
            "javascript:alert(1)",
            "JaVaScRiPt:alert(1)",
            "  javascript:alert(1)",
            "java\tscript:alert(1)",
            "java\nscript:alert(1)",
            "java\r\nscript:alert(1)",
            "\u{1}javascript:alert(1)",
            "\u{0}\u{1f} vbscript:msgbox(1)",
            "data:text/html,<script>alert(1)</script>",
        ] {
            assert_eq!(safe_url(url), "#", "{:?}", url);
        }

        assert_eq!(safe_url("/about"), "/about");
        assert_eq!(safe_url("https://example.com/javascript:"), "https://example.com/javascript:");
        assert_eq!(safe_url("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_image_alt_from_text() {
        assert_eq!(
            html("![A cat](/cat.png)"),
            "<p><img src=\"/cat.png\" alt=\"A cat\"></p>"
        );
    }

    #[test]
    fn test_raw_html_dropped() {
        assert_eq!(html("<script>alert(1)</script>\n\ntext"), "<p>text</p>");
    }

    #[test]
    fn test_table_header_row() {
        let out = html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.starts_with("<table><thead><tr><th>a</th><th>b</th></tr></thead>"));
        assert!(out.contains("<tr><td>1</td><td>2</td></tr>"));
    }

    #[test]
    fn test_block_wrapper() {
        let (node, diags) = render(&RichTextBlock, json!({ "content": "Hi", "align": "center" }));
        assert_eq!(
            node.to_html(),
            "<div data-rich-text data-align=\"center\"><p>Hi</p></div>"
        );
        assert!(diags.is_empty());

        let (node, diags) = render(&RichTextBlock, json!({}));
        assert!(node.is_empty());
        assert_eq!(diags.len(), 1);
    }
}
