//! Divider block

use loom_core::DataExt;

use super::pick;
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub const DIVIDER_VARIANTS: &[&str] = &["solid", "dashed", "dotted"];

pub struct DividerBlock;

impl BlockRenderer for DividerBlock {
    fn render(&self, block: &BlockView<'_>, _cx: &mut RenderContext<'_>) -> Node {
        el("hr")
            .data("variant", pick(block.data.str_field("variant"), DIVIDER_VARIANTS, "solid"))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::test_support::render;
    use serde_json::json;

    #[test]
    fn test_divider() {
        let (node, _) = render(&DividerBlock, json!({ "variant": "dashed" }));
        assert_eq!(node.to_html(), r#"<hr data-variant="dashed">"#);

        let (node, _) = render(&DividerBlock, json!({ "variant": 3 }));
        assert_eq!(node.to_html(), r#"<hr data-variant="solid">"#);
    }
}
