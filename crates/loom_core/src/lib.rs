//! Loom Core
//!
//! The page document and the rules for reading it at a given viewport size:
//!
//! - **Document model**: [`Page`] → [`Section`] → [`Container`] → [`Block`]
//! - **Breakpoints**: [`Breakpoint`] tiers ordered from widest to narrowest
//! - **Responsive resolution**: [`responsive::resolve`] layers a block's
//!   per-breakpoint overrides on top of its base data
//!
//! # Example
//!
//! ```rust
//! use loom_core::{responsive, Breakpoint, Page};
//!
//! let page = Page::from_json(r#"{
//!     "id": "home",
//!     "sections": [{
//!         "key": "hero",
//!         "containers": [{
//!             "key": "main",
//!             "blocks": [{
//!                 "key": "title",
//!                 "_type": "heading",
//!                 "data": { "text": "Welcome", "size": "xl" },
//!                 "responsiveOverrides": { "mobile": { "size": "md" } }
//!             }]
//!         }]
//!     }]
//! }"#).unwrap();
//!
//! let block = page.blocks().next().unwrap();
//! let data = responsive::resolve_block(block, Breakpoint::Mobile);
//! assert_eq!(data["size"], "md");
//! assert_eq!(data["text"], "Welcome");
//! ```

pub mod breakpoint;
pub mod data;
pub mod error;
pub mod layout;
pub mod model;
pub mod responsive;

pub use breakpoint::Breakpoint;
pub use data::{BlockData, DataExt};
pub use error::{ModelError, Result};
pub use layout::{Align, Background, ContainerLayout, Direction, MaxWidth, SectionLayout, SectionWidth, Spacing};
pub use model::{Block, Container, Page, ResponsiveOverrides, Section};
