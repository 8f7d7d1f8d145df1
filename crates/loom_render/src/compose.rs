//! Page composition
//!
//! Walks Page → Section → Container → Block in document order and wraps each
//! level in a structural element annotated with its layout hints:
//!
//! ```text
//! <main data-page data-breakpoint>
//!   <section data-section data-spacing data-background data-width>
//!     <div data-container data-direction data-align data-max-width>
//!       <div data-block data-block-key data-breakpoint> ...renderer output... </div>
//! ```
//!
//! Every block's data is resolved for the active breakpoint before it is
//! handed to its renderer. A block that renders nothing leaves an
//! [`Node::Empty`] placeholder in its slot. Nothing is reordered, filtered or
//! deduplicated.

use loom_core::responsive::resolve_block;
use loom_core::{Block, Breakpoint, Container, Page, Section};
use tracing::debug;

use crate::context::{Diagnostic, LogoRegistry, RenderContext};
use crate::markup::{el, Node};
use crate::registry::{BlockRegistry, BlockView};

/// Output of a full page render
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub root: Node,
    pub breakpoint: Breakpoint,
    /// Non-fatal problems hit while rendering, in document order
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderedPage {
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Number of blocks that produced output
    pub fn visible_block_count(&self) -> usize {
        self.root.elements_with_data("block").len()
    }
}

/// Renders page documents through a block registry
pub struct PageRenderer {
    registry: BlockRegistry,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new(BlockRegistry::with_defaults())
    }
}

impl PageRenderer {
    pub fn new(registry: BlockRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut BlockRegistry {
        &mut self.registry
    }

    /// Render a whole page for one breakpoint
    pub fn render_page(
        &self,
        page: &Page,
        breakpoint: Breakpoint,
        logos: &LogoRegistry,
    ) -> RenderedPage {
        let mut cx = RenderContext::new(breakpoint, logos);

        let root = el("main")
            .data("page", page.id.as_str())
            .data("breakpoint", breakpoint.as_str())
            .children(
                page.sections
                    .iter()
                    .map(|section| self.render_section(section, &mut cx)),
            );

        let diagnostics = cx.into_diagnostics();
        debug!(
            page = page.id.as_str(),
            breakpoint = breakpoint.as_str(),
            blocks = page.block_count(),
            diagnostics = diagnostics.len(),
            "page rendered"
        );

        RenderedPage {
            root: root.into(),
            breakpoint,
            diagnostics,
        }
    }

    pub fn render_section(&self, section: &Section, cx: &mut RenderContext<'_>) -> Node {
        el("section")
            .data("section", section.key.as_str())
            .data("spacing", section.layout.spacing.as_str())
            .data("background", section.layout.background.as_str())
            .data("width", section.layout.width.as_str())
            .children(
                section
                    .containers
                    .iter()
                    .map(|container| self.render_container(container, cx)),
            )
            .into()
    }

    pub fn render_container(&self, container: &Container, cx: &mut RenderContext<'_>) -> Node {
        el("div")
            .data("container", container.key.as_str())
            .data("direction", container.layout.direction.as_str())
            .data("align", container.layout.align.as_str())
            .data("max-width", container.layout.max_width.as_str())
            .children(
                container
                    .blocks
                    .iter()
                    .map(|block| self.render_block(block, cx)),
            )
            .into()
    }

    /// Resolve a block for the active breakpoint and dispatch it
    pub fn render_block(&self, block: &Block, cx: &mut RenderContext<'_>) -> Node {
        let data = resolve_block(block, cx.breakpoint());
        let view = BlockView::new(&block.key, &block.block_type, &data);

        let output = self.registry.render(&view, cx);
        if output.is_empty() {
            return Node::Empty;
        }

        el("div")
            .data("block", block.block_type.as_str())
            .data("block-key", block.key.as_str())
            .data("breakpoint", cx.breakpoint().as_str())
            .child(output)
            .into()
    }
}
