//! Tenant token application
//!
//! A [`TenantTokenProvider`] owns the document-level [`TokenScope`] and moves
//! it through an explicit lifecycle:
//!
//! 1. [`enter`](TenantTokenProvider::enter) a tenant, receiving a [`FetchTicket`]
//! 2. fetch the tenant's [`TokenSet`] from a [`TokenSource`] (no lock held)
//! 3. [`complete`](TenantTokenProvider::complete) the ticket with the result
//! 4. [`leave`](TenantTokenProvider::leave) the tenant, restoring the scope
//!
//! Every enter and leave bumps a generation counter. A ticket from an older
//! generation is stale: its result is discarded when it finally arrives, so a
//! slow fetch for a tenant that was already left can never bleed its tokens
//! into the next tenant's scope.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use loom_tokens::{TokenScope, TokenSet, TokenSnapshot};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Identifier of an isolated customer workspace
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TenantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Token fetch errors
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenFetchError {
    #[error("no token set for tenant {0}")]
    NotFound(TenantId),

    #[error("token service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed token set for tenant {tenant}: {reason}")]
    Malformed { tenant: TenantId, reason: String },
}

/// Producer of tenant token sets, typically a remote service
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn fetch(&self, tenant: &TenantId) -> Result<TokenSet, TokenFetchError>;
}

/// In-memory token source
#[derive(Clone, Debug, Default)]
pub struct StaticTokenSource {
    sets: FxHashMap<TenantId, TokenSet>,
}

impl StaticTokenSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tenant: impl Into<TenantId>, set: TokenSet) -> Option<TokenSet> {
        self.sets.insert(tenant.into(), set)
    }

    pub fn with(mut self, tenant: impl Into<TenantId>, set: TokenSet) -> Self {
        self.insert(tenant, set);
        self
    }

    pub fn get(&self, tenant: &TenantId) -> Option<&TokenSet> {
        self.sets.get(tenant)
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn fetch(&self, tenant: &TenantId) -> Result<TokenSet, TokenFetchError> {
        self.sets
            .get(tenant)
            .cloned()
            .ok_or_else(|| TokenFetchError::NotFound(tenant.clone()))
    }
}

/// Proof of an [`enter`](TenantTokenProvider::enter), redeemed by
/// [`complete`](TenantTokenProvider::complete)
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a ticket must be completed for its tokens to be applied"]
pub struct FetchTicket {
    tenant: TenantId,
    generation: u64,
}

impl FetchTicket {
    pub fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`TenantTokenProvider::complete`] did with a fetch result
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Tokens written into the scope
    Applied(usize),
    /// Fetch returned an empty set; scope untouched
    Empty,
    /// Fetch failed; scope untouched
    Failed(TokenFetchError),
    /// Tenant was left or re-entered since the ticket was issued; result discarded
    Stale,
}

/// Owner of the applied token scope
#[derive(Debug, Default)]
pub struct TenantTokenProvider {
    scope: TokenScope,
    active: Option<TenantId>,
    baseline: Option<TokenSnapshot>,
    generation: u64,
}

impl TenantTokenProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose scope starts from `scope`, e.g. the default token set
    pub fn with_scope(scope: TokenScope) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Make `tenant` the active tenant and issue a ticket for its fetch.
    ///
    /// A different tenant still active is left first. Re-entering the active
    /// tenant keeps its baseline and invalidates any fetch already in flight.
    pub fn enter(&mut self, tenant: impl Into<TenantId>) -> FetchTicket {
        let tenant = tenant.into();

        match &self.active {
            Some(current) if *current == tenant => {}
            Some(current) => {
                let current = current.clone();
                self.leave(&current);
                self.baseline = Some(self.scope.snapshot());
            }
            None => self.baseline = Some(self.scope.snapshot()),
        }

        self.generation += 1;
        self.active = Some(tenant.clone());
        debug!(tenant = tenant.as_str(), generation = self.generation, "tenant entered");

        FetchTicket {
            tenant,
            generation: self.generation,
        }
    }

    /// Apply a fetch result if its ticket is still current
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<TokenSet, TokenFetchError>,
    ) -> ApplyOutcome {
        if !self.is_current(&ticket) {
            debug!(
                tenant = ticket.tenant.as_str(),
                ticket = ticket.generation,
                generation = self.generation,
                "discarding stale token response"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Err(err) => {
                warn!(tenant = ticket.tenant.as_str(), error = %err, "token fetch failed");
                ApplyOutcome::Failed(err)
            }
            Ok(set) if set.is_empty() => {
                debug!(tenant = ticket.tenant.as_str(), "empty token set");
                ApplyOutcome::Empty
            }
            Ok(set) => {
                let rejected = set.invalid_names();
                if rejected.len() == set.len() {
                    let err = TokenFetchError::Malformed {
                        tenant: ticket.tenant.clone(),
                        reason: format!("no writable tokens ({})", rejected.join(", ")),
                    };
                    warn!(tenant = ticket.tenant.as_str(), error = %err, "token set rejected");
                    return ApplyOutcome::Failed(err);
                }
                if !rejected.is_empty() {
                    warn!(
                        tenant = ticket.tenant.as_str(),
                        rejected = %rejected.join(", "),
                        "skipping tokens that cannot be written"
                    );
                }

                let written = self.scope.apply(&set);
                debug!(tenant = ticket.tenant.as_str(), tokens = written, "tenant tokens applied");
                ApplyOutcome::Applied(written)
            }
        }
    }

    /// Tear down `tenant`'s context, restoring the scope to its state before
    /// the tenant was entered. Leaving a tenant that is not active is a no-op.
    pub fn leave(&mut self, tenant: &TenantId) -> bool {
        if self.active.as_ref() != Some(tenant) {
            return false;
        }

        if let Some(baseline) = self.baseline.take() {
            self.scope.restore(baseline);
        }
        self.active = None;
        self.generation += 1;
        debug!(tenant = tenant.as_str(), generation = self.generation, "tenant left");
        true
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && self.active.as_ref() == Some(&ticket.tenant)
    }

    pub fn scope(&self) -> &TokenScope {
        &self.scope
    }

    pub fn active_tenant(&self) -> Option<&TenantId> {
        self.active.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Provider shared between the render side and async fetches
pub type SharedTokenProvider = Arc<Mutex<TenantTokenProvider>>;

pub fn shared(provider: TenantTokenProvider) -> SharedTokenProvider {
    Arc::new(Mutex::new(provider))
}

/// Enter `tenant`, fetch its tokens and apply them.
///
/// The lock is released while the fetch is pending, so the tenant can be left
/// (or another entered) meanwhile; the late result then comes back
/// [`ApplyOutcome::Stale`].
pub async fn mount<S: TokenSource + ?Sized>(
    provider: &SharedTokenProvider,
    source: &S,
    tenant: impl Into<TenantId>,
) -> ApplyOutcome {
    let ticket = provider.lock().await.enter(tenant);
    let result = source.fetch(ticket.tenant()).await;
    provider.lock().await.complete(ticket, result)
}

/// Leave `tenant` on a shared provider
pub async fn unmount(provider: &SharedTokenProvider, tenant: &TenantId) -> bool {
    provider.lock().await.leave(tenant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> TokenSet {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_enter_complete_apply() {
        let mut provider = TenantTokenProvider::new();
        let ticket = provider.enter("acme");

        assert_eq!(provider.active_tenant(), Some(&TenantId::new("acme")));
        let outcome = provider.complete(ticket, Ok(set(&[("color-primary", "#111")])));

        assert_eq!(outcome, ApplyOutcome::Applied(1));
        assert_eq!(provider.scope().get("color-primary"), Some("#111"));
    }

    #[test]
    fn test_leave_restores_baseline() {
        let base = TokenScope::with_base(&set(&[("color-primary", "#000"), ("radius-md", "6px")]));
        let mut provider = TenantTokenProvider::with_scope(base.clone());

        let ticket = provider.enter("acme");
        provider.complete(ticket, Ok(set(&[("color-primary", "#111"), ("color-accent", "#f0f")])));
        assert!(provider.leave(&"acme".into()));

        assert_eq!(provider.scope(), &base);
        assert_eq!(provider.active_tenant(), None);
    }

    #[test]
    fn test_leave_inactive_is_noop() {
        let mut provider = TenantTokenProvider::new();
        let ticket = provider.enter("acme");
        provider.complete(ticket, Ok(set(&[("color-primary", "#111")])));
        let generation = provider.generation();

        assert!(!provider.leave(&"globex".into()));
        assert_eq!(provider.generation(), generation);
        assert_eq!(provider.scope().get("color-primary"), Some("#111"));
    }

    #[test]
    fn test_empty_set_keeps_prior_tokens() {
        let mut provider =
            TenantTokenProvider::with_scope(TokenScope::with_base(&set(&[("color-primary", "#000")])));

        let ticket = provider.enter("acme");
        assert_eq!(provider.complete(ticket, Ok(TokenSet::new())), ApplyOutcome::Empty);
        assert_eq!(provider.scope().get("color-primary"), Some("#000"));
    }

    #[test]
    fn test_failure_keeps_prior_tokens() {
        let mut provider = TenantTokenProvider::new();
        let ticket = provider.enter("acme");
        provider.complete(ticket, Ok(set(&[("color-primary", "#111")])));

        let refetch = provider.enter("acme");
        let err = TokenFetchError::Unavailable("timeout".into());
        assert_eq!(provider.complete(refetch, Err(err.clone())), ApplyOutcome::Failed(err));
        assert_eq!(provider.scope().get("color-primary"), Some("#111"));
    }

    #[test]
    fn test_unwritable_tokens_are_rejected() {
        let mut provider = TenantTokenProvider::new();
        let ticket = provider.enter("acme");
        let hostile = "#111;}</style><script>alert(1)</script><style>:root{";

        let outcome = provider.complete(
            ticket,
            Ok(set(&[("color-primary", hostile), ("color-accent", "#f0f")])),
        );
        assert_eq!(outcome, ApplyOutcome::Applied(1));
        assert_eq!(provider.scope().get("color-primary"), None);

        let refetch = provider.enter("acme");
        let outcome = provider.complete(refetch, Ok(set(&[("color-primary", hostile)])));
        assert!(matches!(outcome, ApplyOutcome::Failed(TokenFetchError::Malformed { .. })));
        assert_eq!(provider.scope().get("color-primary"), None);
        assert_eq!(provider.scope().get("color-accent"), Some("#f0f"));
    }

    #[test]
    fn test_result_after_leave_is_stale() {
        let mut provider = TenantTokenProvider::new();
        let ticket = provider.enter("acme");
        provider.leave(&"acme".into());

        let outcome = provider.complete(ticket, Ok(set(&[("color-primary", "#111")])));
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(provider.scope().is_empty());
    }

    #[test]
    fn test_reenter_invalidates_older_ticket() {
        let mut provider = TenantTokenProvider::new();
        let first = provider.enter("acme");
        let second = provider.enter("acme");

        assert!(!provider.is_current(&first));
        assert_eq!(
            provider.complete(first, Ok(set(&[("color-primary", "#old")]))),
            ApplyOutcome::Stale
        );
        assert_eq!(
            provider.complete(second, Ok(set(&[("color-primary", "#new")]))),
            ApplyOutcome::Applied(1)
        );
        assert_eq!(provider.scope().get("color-primary"), Some("#new"));
    }

    #[test]
    fn test_switching_tenant_leaves_previous() {
        let mut provider = TenantTokenProvider::new();
        let a = provider.enter("a");
        provider.complete(a, Ok(set(&[("color-primary", "#111"), ("color-accent", "#aaa")])));

        let b = provider.enter("b");
        assert_eq!(provider.active_tenant(), Some(&TenantId::new("b")));
        assert!(provider.scope().is_empty());

        provider.complete(b, Ok(set(&[("color-primary", "#222")])));
        assert_eq!(provider.scope().get("color-primary"), Some("#222"));
        assert_eq!(provider.scope().get("color-accent"), None);
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticTokenSource::new().with("acme", set(&[("color-primary", "#111")]));

        assert_eq!(source.fetch(&"acme".into()).await.map(|s| s.len()), Ok(1));
        assert_eq!(
            source.fetch(&"nobody".into()).await,
            Err(TokenFetchError::NotFound("nobody".into()))
        );
    }
}
