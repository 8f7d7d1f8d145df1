//! Heading block
//!
//! Fields: `text` (required), `level` (1-6, default 2), `size`, `align`.

use loom_core::DataExt;

use super::{pick, ALIGN_VALUES, SIZE_VALUES};
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

const LEVEL_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

pub struct HeadingBlock;

impl BlockRenderer for HeadingBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(text) = block.data.str_field("text") else {
            return block.invalid_field(cx, "text");
        };

        let level = block.data.u64_field("level").unwrap_or(2).clamp(1, 6) as usize;

        el(LEVEL_TAGS[level - 1])
            .data("size", pick(block.data.str_field("size"), SIZE_VALUES, "lg"))
            .data("align", pick(block.data.str_field("align"), ALIGN_VALUES, "left"))
            .text(text)
            .into()
    }
}
