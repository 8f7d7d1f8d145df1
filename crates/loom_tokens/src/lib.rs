//! Loom Design Tokens
//!
//! Semantic style names mapped to concrete CSS values. Every block, container
//! and section renders against these names, never against raw colors or sizes,
//! so a tenant can restyle a site by supplying a different [`TokenSet`].
//!
//! - **Token names**: [`ColorToken`], [`SpacingToken`], [`RadiusToken`]
//! - **Default scales**: [`ColorTokens`], [`SpacingTokens`], [`RadiusTokens`]
//! - **Token sets**: [`TokenSet`] - an ordered name → value mapping
//! - **Applied scope**: [`TokenScope`] - the document-level values in effect
//!
//! # Example
//!
//! ```rust
//! use loom_tokens::{ColorToken, TokenScope, TokenSet};
//!
//! let mut scope = TokenScope::new();
//! scope.apply(&TokenSet::defaults());
//!
//! let mut tenant = TokenSet::new();
//! tenant.insert(ColorToken::Primary.name(), "#111");
//! scope.apply(&tenant);
//!
//! assert_eq!(scope.get("color-primary"), Some("#111"));
//! assert_eq!(ColorToken::Primary.css_var(), "var(--color-primary)");
//! ```

pub mod scope;
pub mod set;
pub mod tokens;

pub use scope::{TokenScope, TokenSnapshot};
pub use set::TokenSet;
pub use tokens::{
    css_var, is_valid_entry, normalize_name, ColorToken, ColorTokens, RadiusToken, RadiusTokens, SpacingToken,
    SpacingTokens,
};
