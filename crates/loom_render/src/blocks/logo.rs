//! Logo block
//!
//! Fields: `logoId` (required), `href`, `size`.
//!
//! The logo itself comes from the tenant's [`crate::LogoRegistry`]. An id
//! that is not registered renders nothing and logs a warning; it never
//! fails the page.

use loom_core::DataExt;
use tracing::warn;

use super::pick;
use super::rich_text::safe_url;
use crate::context::{Diagnostic, RenderContext};
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub const LOGO_SIZES: &[&str] = &["sm", "md", "lg"];

pub struct LogoBlock;

impl BlockRenderer for LogoBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(logo_id) = block.data.str_field("logoId") else {
            return block.invalid_field(cx, "logoId");
        };

        let Some(logo) = cx.logos().get(logo_id) else {
            warn!(block = block.key, logo_id, "logo not found in registry");
            cx.report(Diagnostic::MissingResource {
                key: block.key.to_string(),
                kind: "logo",
                id: logo_id.to_string(),
            });
            return Node::Empty;
        };

        let img = el("img")
            .attr("src", safe_url(&logo.src))
            .attr("alt", logo.alt.as_str())
            .attr_opt("width", logo.width.map(|w| w.to_string()))
            .attr_opt("height", logo.height.map(|h| h.to_string()));

        let size = pick(block.data.str_field("size"), LOGO_SIZES, "md");

        match block.data.str_field("href") {
            Some(href) => el("a")
                .attr("href", safe_url(href))
                .data("logo", logo_id)
                .data("size", size)
                .child(img)
                .into(),
            None => el("span")
                .data("logo", logo_id)
                .data("size", size)
                .child(img)
                .into(),
        }
    }
}
