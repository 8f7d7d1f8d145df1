//! Spacer block
//!
//! Fields: `size`. Always renders; an unknown size falls back to `md`.

use loom_core::DataExt;

use super::{pick, SIZE_VALUES};
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub struct SpacerBlock;

impl BlockRenderer for SpacerBlock {
    fn render(&self, block: &BlockView<'_>, _cx: &mut RenderContext<'_>) -> Node {
        el("div")
            .data("spacer", "")
            .data("size", pick(block.data.str_field("size"), SIZE_VALUES, "md"))
            .attr("aria-hidden", "true")
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::render;
    use serde_json::json;

    #[test]
    fn test_spacer() {
        let (node, _) = render(&SpacerBlock, json!({ "size": "xl" }));
        assert_eq!(
            node.to_html(),
            r#"<div data-spacer data-size="xl" aria-hidden="true"></div>"#
        );

        let (node, diags) = render(&SpacerBlock, json!({}));
        assert_eq!(node.as_element().unwrap().get_data("size"), Some("md"));
        assert!(diags.is_empty());
    }
}
