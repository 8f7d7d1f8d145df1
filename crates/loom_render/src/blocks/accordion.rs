//! Accordion block
//!
//! Fields: `items` (required, `[{ title, content }]`), `allowMultiple`,
//! `defaultOpen` (item index).
//!
//! Items render as `<details>` elements. In single-open mode they share a
//! `name` so the browser keeps at most one open. Item content is markdown.

use loom_core::DataExt;
use serde_json::Value;

use super::rich_text::markdown_to_nodes;
use crate::context::RenderContext;
use crate::markup::{el, Node};
use crate::registry::{BlockRenderer, BlockView};

pub struct AccordionBlock;

impl BlockRenderer for AccordionBlock {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        let Some(items) = block.data.array_field("items") else {
            return block.invalid_field(cx, "items");
        };

        let multi = block.data.bool_field("allowMultiple").unwrap_or(false);
        let default_open = block.data.u64_field("defaultOpen");
        let group = format!("accordion-{}", block.key);

        let mut rendered = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let Some(title) = item_str(item, "title") else {
                block.invalid_field(cx, "items");
                continue;
            };

            let body = el("div")
                .data("accordion-content", "")
                .children(markdown_to_nodes(item_str(item, "content").unwrap_or("")));

            let details = el("details")
                .data("accordion-item", index.to_string())
                .attr_opt("name", (!multi).then(|| group.clone()))
                .flag("open", default_open == Some(index as u64))
                .child(el("summary").text(title))
                .child(body);

            rendered.push(details.into());
        }

        if rendered.is_empty() {
            return Node::Empty;
        }

        el("div")
            .data("accordion", "")
            .data("mode", if multi { "multi" } else { "single" })
            .children(rendered)
            .into()
    }
}

fn item_str<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
