//! Built-in block renderers
//!
//! Each block type lives in its own module and reads only the fields it
//! declares. Style choices (size, variant, alignment) are passed through as
//! `data-*` hints restricted to a known set of values, so arbitrary editor
//! input never leaks into the style layer.

pub mod accordion;
pub mod button;
pub mod divider;
pub mod heading;
pub mod image;
pub mod logo;
pub mod media;
pub mod quote;
pub mod rich_text;
pub mod spacer;

pub use accordion::AccordionBlock;
pub use button::ButtonBlock;
pub use divider::DividerBlock;
pub use heading::HeadingBlock;
pub use image::ImageBlock;
pub use logo::LogoBlock;
pub use media::{AudioBlock, VideoBlock};
pub use quote::QuoteBlock;
pub use rich_text::RichTextBlock;
pub use spacer::SpacerBlock;

use crate::registry::BlockRegistry;

pub const ALIGN_VALUES: &[&str] = &["left", "center", "right"];
pub const SIZE_VALUES: &[&str] = &["xs", "sm", "md", "lg", "xl"];

pub(crate) fn register_defaults(registry: &mut BlockRegistry) {
    registry.register("accordion", AccordionBlock);
    registry.register("audio", AudioBlock);
    registry.register("button", ButtonBlock);
    registry.register("divider", DividerBlock);
    registry.register("heading", HeadingBlock);
    registry.register("image", ImageBlock);
    registry.register("logo", LogoBlock);
    registry.register("quote", QuoteBlock);
    registry.register("rich_text", RichTextBlock);
    registry.register("spacer", SpacerBlock);
    registry.register("video", VideoBlock);
}

/// `value` if it is one of `allowed`, otherwise `fallback`
pub(crate) fn pick<'a>(value: Option<&'a str>, allowed: &[&str], fallback: &'a str) -> &'a str {
    match value {
        Some(v) if allowed.contains(&v) => v,
        _ => fallback,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use loom_core::{BlockData, Breakpoint};
    use serde_json::Value;

    use crate::context::{Diagnostic, LogoRegistry, RenderContext};
    use crate::markup::Node;
    use crate::registry::{BlockRenderer, BlockView};

    pub fn data(value: Value) -> BlockData {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    /// Render one block against an empty logo registry
    pub fn render(renderer: &dyn BlockRenderer, value: Value) -> (Node, Vec<Diagnostic>) {
        render_with(renderer, value, &LogoRegistry::new())
    }

    pub fn render_with(
        renderer: &dyn BlockRenderer,
        value: Value,
        logos: &LogoRegistry,
    ) -> (Node, Vec<Diagnostic>) {
        let data = data(value);
        let mut cx = RenderContext::new(Breakpoint::Desktop, logos);
        let node = renderer.render(&BlockView::new("b1", "test", &data), &mut cx);
        (node, cx.into_diagnostics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick() {
        assert_eq!(pick(Some("lg"), SIZE_VALUES, "md"), "lg");
        assert_eq!(pick(Some("huge"), SIZE_VALUES, "md"), "md");
        assert_eq!(pick(None, ALIGN_VALUES, "left"), "left");
    }
}
