//! Loom Tenancy
//!
//! Per-tenant concerns around rendering:
//!
//! - **Tokens**: [`TenantTokenProvider`] applies a tenant's [`TokenSet`] to the
//!   shared [`TokenScope`] on enter and restores the prior scope on leave,
//!   discarding fetch results that arrive after their tenant was left
//! - **Membership**: [`TenantMemberGuard`] denies access to non-members
//!
//! # Example
//!
//! ```rust
//! use loom_tenant::{shared, mount, unmount, StaticTokenSource, TenantTokenProvider};
//! use loom_tokens::TokenSet;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = StaticTokenSource::new()
//!     .with("acme", [("color-primary", "#111")].into_iter().collect::<TokenSet>());
//! let provider = shared(TenantTokenProvider::new());
//!
//! mount(&provider, &source, "acme").await;
//! assert_eq!(provider.lock().await.scope().get("color-primary"), Some("#111"));
//!
//! unmount(&provider, &"acme".into()).await;
//! assert!(provider.lock().await.scope().is_empty());
//! # });
//! ```
//!
//! [`TokenSet`]: loom_tokens::TokenSet
//! [`TokenScope`]: loom_tokens::TokenScope

pub mod membership;
pub mod tokens;

pub use membership::{AccessError, InMemoryMembershipStore, Membership, MembershipStore, Role, TenantMemberGuard};
pub use tokens::{
    mount, shared, unmount, ApplyOutcome, FetchTicket, SharedTokenProvider, StaticTokenSource,
    TenantId, TenantTokenProvider, TokenFetchError, TokenSource,
};
