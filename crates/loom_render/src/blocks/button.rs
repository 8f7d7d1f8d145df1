//! Button block
//!
//! Fields: `label` (required), `href` (default `#`), `variant`, `size`,
//! `newTab`.

use loom_core::DataExt;

use super::pick;
use super::rich_text::safe_url;
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub const BUTTON_VARIANTS: &[&str] = &["primary", "secondary", "outline", "ghost", "link"];
pub const BUTTON_SIZES: &[&str] = &["sm", "md", "lg"];

pub struct ButtonBlock;

impl BlockRenderer for ButtonBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(label) = block.data.str_field("label") else {
            return block.invalid_field(cx, "label");
        };

        let new_tab = block.data.bool_field("newTab").unwrap_or(false);

        let mut button = el("a")
            .attr("href", safe_url(block.data.str_or("href", "#")))
            .attr("role", "button")
            .data("variant", pick(block.data.str_field("variant"), BUTTON_VARIANTS, "primary"))
            .data("size", pick(block.data.str_field("size"), BUTTON_SIZES, "md"));

        if new_tab {
            button = button.attr("target", "_blank").attr("rel", "noopener noreferrer");
        }

        button.text(label).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::render;
    use serde_json::json;

    #[test]
    fn test_button() {
        let (node, _) = render(
            &ButtonBlock,
            json!({ "label": "Sign up", "href": "/join", "variant": "outline", "newTab": true }),
        );
        assert_eq!(
            node.to_html(),
            r#"<a href="/join" role="button" data-variant="outline" data-size="md" target="_blank" rel="noopener noreferrer">Sign up</a>"#
        );
    }

    #[test]
    fn test_defaults_and_unknown_variant() {
        let (node, _) = render(&ButtonBlock, json!({ "label": "Go", "variant": "neon" }));
        let e = node.as_element().unwrap();
        assert_eq!(e.get_attr("href"), Some("#"));
        assert_eq!(e.get_data("variant"), Some("primary"));
        assert_eq!(e.get_attr("target"), None);
    }

    #[test]
    fn test_missing_label() {
        let (node, diags) = render(&ButtonBlock, json!({ "href": "/x" }));
        assert!(node.is_empty());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_script_href_is_replaced() {
        for href in ["java\tscript:alert(1)", "\u{1}javascript:alert(1)"] {
            let (node, _) = render(&ButtonBlock, json!({ "label": "Go", "href": href }));
            assert_eq!(node.as_element().unwrap().get_attr("href"), Some("#"));
        }
    }
}
