//! Loom Renderer
//!
//! Turns a page document into a structural markup tree:
//!
//! - **Markup**: [`Node`]/[`Element`] tree with HTML serialization
//! - **Registry**: [`BlockRegistry`] dispatches a block's `_type` to a [`BlockRenderer`]
//! - **Blocks**: built-in renderers for headings, rich text, buttons, media, logos, ...
//! - **Composition**: [`PageRenderer`] walks sections, containers and blocks
//!
//! Rendering never fails. Problems local to a block (unknown type, missing
//! logo, absent required field) leave that block empty and are reported as
//! [`Diagnostic`]s on the [`RenderedPage`].
//!
//! # Example
//!
//! ```rust
//! use loom_core::{Breakpoint, Page};
//! use loom_render::{LogoRegistry, PageRenderer};
//!
//! let page = Page::from_json(r#"{
//!     "id": "home",
//!     "sections": [{ "key": "s", "containers": [{ "key": "c", "blocks": [
//!         { "key": "a", "_type": "heading", "data": { "text": "Hello" } },
//!         { "key": "b", "_type": "unheard_of" }
//!     ]}]}]
//! }"#).unwrap();
//!
//! let out = PageRenderer::default().render_page(&page, Breakpoint::Mobile, &LogoRegistry::new());
//! assert_eq!(out.visible_block_count(), 1);
//! assert_eq!(out.diagnostics.len(), 1);
//! ```

pub mod blocks;
pub mod compose;
pub mod context;
pub mod markup;
pub mod registry;

pub use compose::{PageRenderer, RenderedPage};
pub use context::{Diagnostic, Logo, LogoRegistry, RenderContext};
pub use markup::{el, Element, Node};
pub use registry::{renderer_fn, BlockRegistry, BlockRenderer, BlockView, FnRenderer};
