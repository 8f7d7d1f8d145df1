//! Quote block
//!
//! Fields: `text` (required), `cite`, `align`.

use loom_core::DataExt;

use super::{pick, ALIGN_VALUES};
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub struct QuoteBlock;

impl BlockRenderer for QuoteBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(text) = block.data.str_field("text") else {
            return block.invalid_field(cx, "text");
        };

        let quote = el("blockquote")
            .data("align", pick(block.data.str_field("align"), ALIGN_VALUES, "left"))
            .child(el("p").text(text));

        match block.data.str_field("cite") {
            Some(cite) => quote.child(el("cite").text(cite)).into(),
            None => quote.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::render;
    use serde_json::json;

    #[test]
    fn test_quote() {
        let (node, _) = render(&QuoteBlock, json!({ "text": "Ship it.", "cite": "Everyone" }));
        assert_eq!(
            node.to_html(),
            r#"<blockquote data-align="left"><p>Ship it.</p><cite>Everyone</cite></blockquote>"#
        );
    }

    #[test]
    fn test_missing_text() {
        let (node, diags) = render(&QuoteBlock, json!({ "cite": "Nobody" }));
        assert!(node.is_empty());
        assert_eq!(diags.len(), 1);
    }
}
