//! Tenant membership guard
//!
//! Before a tenant's pages are served the caller's identity is checked
//! against a [`MembershipStore`]. Denial is an [`AccessError`] handed back to
//! the route boundary; it is never retried here.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::tokens::TenantId;

/// Access level within a tenant, ordered from least to most privileged
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Viewer,
    Editor,
    Admin,
    Owner,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Viewer, Role::Editor, Role::Admin, Role::Owner];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
            Role::Owner => "owner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AccessError::UnknownRole(s.to_string()))
    }
}

/// A user's membership record in one tenant
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Membership {
    pub user_id: String,
    pub tenant_id: TenantId,
    pub role: Role,
}

/// Access denial
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("missing user or tenant identity")]
    MissingIdentity,

    #[error("user {user} is not a member of tenant {tenant}")]
    NotAMember { user: String, tenant: TenantId },

    #[error("user {user} has role {actual} in tenant {tenant}, {required} required")]
    InsufficientRole {
        user: String,
        tenant: TenantId,
        actual: Role,
        required: Role,
    },

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Lookup of `(user, tenant)` membership records, typically a database
#[async_trait]
pub trait MembershipStore: Send + Sync {
    async fn find(&self, user_id: &str, tenant: &TenantId) -> Option<Membership>;
}

/// In-memory membership store
#[derive(Clone, Debug, Default)]
pub struct InMemoryMembershipStore {
    records: FxHashMap<(String, TenantId), Role>,
}

impl InMemoryMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a membership, returning the previous role
    pub fn grant(
        &mut self,
        user_id: impl Into<String>,
        tenant: impl Into<TenantId>,
        role: Role,
    ) -> Option<Role> {
        self.records.insert((user_id.into(), tenant.into()), role)
    }

    pub fn revoke(&mut self, user_id: &str, tenant: &TenantId) -> Option<Role> {
        self.records.remove(&(user_id.to_string(), tenant.clone()))
    }

    pub fn with(mut self, user_id: impl Into<String>, tenant: impl Into<TenantId>, role: Role) -> Self {
        self.grant(user_id, tenant, role);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl MembershipStore for InMemoryMembershipStore {
    async fn find(&self, user_id: &str, tenant: &TenantId) -> Option<Membership> {
        self.records
            .get(&(user_id.to_string(), tenant.clone()))
            .map(|role| Membership {
                user_id: user_id.to_string(),
                tenant_id: tenant.clone(),
                role: *role,
            })
    }
}

/// Gate in front of tenant-scoped routes
#[derive(Clone, Debug)]
pub struct TenantMemberGuard<S> {
    store: S,
}

impl<S: MembershipStore> TenantMemberGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Any membership grants access
    pub async fn authorize(&self, user_id: &str, tenant: &TenantId) -> Result<Membership, AccessError> {
        self.authorize_role(user_id, tenant, Role::Viewer).await
    }

    /// Access requires at least `required`
    pub async fn authorize_role(
        &self,
        user_id: &str,
        tenant: &TenantId,
        required: Role,
    ) -> Result<Membership, AccessError> {
        if user_id.trim().is_empty() || tenant.as_str().trim().is_empty() {
            return Err(AccessError::MissingIdentity);
        }

        let Some(membership) = self.store.find(user_id, tenant).await else {
            debug!(user = user_id, tenant = tenant.as_str(), "access denied: not a member");
            return Err(AccessError::NotAMember {
                user: user_id.to_string(),
                tenant: tenant.clone(),
            });
        };

        if membership.role < required {
            debug!(
                user = user_id,
                tenant = tenant.as_str(),
                role = membership.role.as_str(),
                required = required.as_str(),
                "access denied: insufficient role"
            );
            return Err(AccessError::InsufficientRole {
                user: user_id.to_string(),
                tenant: tenant.clone(),
                actual: membership.role,
                required,
            });
        }

        Ok(membership)
    }
}
