//! Block renderer registry
//!
//! Maps a block's type discriminator to the renderer that draws it. Lookup
//! never fails loudly: an unregistered type renders as [`Node::Empty`] and
//! leaves a [`Diagnostic::UnknownBlockType`] behind, so one malformed block
//! cannot stop the rest of the page from rendering.
//!
//! # Example
//!
//! ```rust
//! use loom_core::{BlockData, Breakpoint};
//! use loom_render::markup::el;
//! use loom_render::{renderer_fn, BlockRegistry, BlockView, LogoRegistry, RenderContext};
//!
//! let mut registry = BlockRegistry::with_defaults();
//! registry.register("badge", renderer_fn(|block: &BlockView<'_>, _cx: &mut RenderContext<'_>| {
//!     el("span").data("badge", block.key).text("new").into()
//! }));
//!
//! let logos = LogoRegistry::new();
//! let mut cx = RenderContext::new(Breakpoint::Desktop, &logos);
//! let data = BlockData::new();
//! let node = registry.render(&BlockView::new("b1", "badge", &data), &mut cx);
//! assert_eq!(node.to_html(), r#"<span data-badge="b1">new</span>"#);
//! ```

use loom_core::BlockData;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::blocks;
use crate::context::{Diagnostic, RenderContext};
use crate::markup::Node;

/// A block as seen by its renderer: identity plus already-resolved data
#[derive(Clone, Copy, Debug)]
pub struct BlockView<'a> {
    pub key: &'a str,
    pub block_type: &'a str,
    /// Data with the active breakpoint's overrides applied
    pub data: &'a BlockData,
}

impl<'a> BlockView<'a> {
    pub fn new(key: &'a str, block_type: &'a str, data: &'a BlockData) -> Self {
        Self {
            key,
            block_type,
            data,
        }
    }

    /// Record that a field this block needs is unusable
    pub fn invalid_field(&self, cx: &mut RenderContext<'_>, field: &'static str) -> Node {
        debug!(block = self.key, block_type = self.block_type, field, "block field missing or invalid");
        cx.report(Diagnostic::InvalidField {
            key: self.key.to_string(),
            field,
        });
        Node::Empty
    }
}

/// Renders one block type
///
/// Implementations must be total over their data: absent or malformed
/// fields produce empty or fallback output, never a panic.
pub trait BlockRenderer: Send + Sync {
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node;
}

/// Adapter turning a closure into a [`BlockRenderer`]
pub struct FnRenderer<F>(F);

/// Wrap a closure as a renderer
pub fn renderer_fn<F>(f: F) -> FnRenderer<F>
where
    F: Fn(&BlockView<'_>, &mut RenderContext<'_>) -> Node + Send + Sync,
{
    FnRenderer(f)
}

impl<F> BlockRenderer for FnRenderer<F>
where
    F: Fn(&BlockView<'_>, &mut RenderContext<'_>) -> Node + Send + Sync,
{
    fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        (self.0)(block, cx)
    }
}

/// Dispatch table from type discriminator to renderer
#[derive(Default)]
pub struct BlockRegistry {
    renderers: FxHashMap<String, Box<dyn BlockRenderer>>,
}

impl BlockRegistry {
    /// Registry with no renderers
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in block type registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        blocks::register_defaults(&mut registry);
        registry
    }

    /// Register a renderer, returning the one it replaced
    pub fn register(
        &mut self,
        block_type: impl Into<String>,
        renderer: impl BlockRenderer + 'static,
    ) -> Option<Box<dyn BlockRenderer>> {
        self.renderers.insert(block_type.into(), Box::new(renderer))
    }

    pub fn unregister(&mut self, block_type: &str) -> Option<Box<dyn BlockRenderer>> {
        self.renderers.remove(block_type)
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.renderers.contains_key(block_type)
    }

    /// Registered type discriminators, sorted
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Render a block, falling back to empty output for unknown types
    pub fn render(&self, block: &BlockView<'_>, cx: &mut RenderContext<'_>) -> Node {
        match self.renderers.get(block.block_type) {
            Some(renderer) => renderer.render(block, cx),
            None => {
                debug!(
                    block = block.key,
                    block_type = block.block_type,
                    "no renderer registered, rendering nothing"
                );
                cx.report(Diagnostic::UnknownBlockType {
                    key: block.key.to_string(),
                    block_type: block.block_type.to_string(),
                });
                Node::Empty
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LogoRegistry;
    use crate::markup::el;
    use loom_core::Breakpoint;

    fn stub(label: &'static str) -> impl BlockRenderer {
        renderer_fn(move |_block: &BlockView<'_>, _cx: &mut RenderContext<'_>| {
            el("p").text(label).into()
        })
    }

    #[test]
    fn test_unknown_type_is_empty_with_diagnostic() {
        let registry = BlockRegistry::new();
        let logos = LogoRegistry::new();
        let mut cx = RenderContext::new(Breakpoint::Desktop, &logos);
        let data = BlockData::new();

        let node = registry.render(&BlockView::new("x", "carousel", &data), &mut cx);

        assert!(node.is_empty());
        assert_eq!(
            cx.diagnostics(),
            &[Diagnostic::UnknownBlockType {
                key: "x".into(),
                block_type: "carousel".into()
            }]
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = BlockRegistry::new();
        assert!(registry.register("note", stub("first")).is_none());
        assert!(registry.register("note", stub("second")).is_some());
        assert_eq!(registry.len(), 1);

        let logos = LogoRegistry::new();
        let mut cx = RenderContext::new(Breakpoint::Desktop, &logos);
        let data = BlockData::new();
        let node = registry.render(&BlockView::new("n", "note", &data), &mut cx);
        assert_eq!(node.to_html(), "<p>second</p>");
        assert!(cx.diagnostics().is_empty());

        registry.unregister("note");
        assert!(!registry.contains("note"));
    }

    #[test]
    fn test_defaults_registered() {
        let registry = BlockRegistry::with_defaults();
        assert_eq!(
            registry.types(),
            vec![
                "accordion",
                "audio",
                "button",
                "divider",
                "heading",
                "image",
                "logo",
                "quote",
                "rich_text",
                "spacer",
                "video"
            ]
        );
    }
}
