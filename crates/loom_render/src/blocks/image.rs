//! Image block
//!
//! Fields: `src` (required), `alt`, `caption`, `width`, `height`, `radius`.

use loom_core::DataExt;

use super::pick;
use super::rich_text::safe_url;
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub const RADIUS_VALUES: &[&str] = &["none", "sm", "md", "lg", "full"];

pub struct ImageBlock;

impl BlockRenderer for ImageBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(src) = block.data.str_field("src") else {
            return block.invalid_field(cx, "src");
        };

        let img = el("img")
            .attr("src", safe_url(src))
            .attr("alt", block.data.str_or("alt", ""))
            .attr("loading", "lazy")
            .attr_opt("width", block.data.u64_field("width").map(|w| w.to_string()))
            .attr_opt("height", block.data.u64_field("height").map(|h| h.to_string()));

        let figure = el("figure")
            .data("image", "")
            .data("radius", pick(block.data.str_field("radius"), RADIUS_VALUES, "none"))
            .child(img);

        match block.data.str_field("caption") {
            Some(caption) => figure.child(el("figcaption").text(caption)).into(),
            None => figure.into(),
        }
    }
}
