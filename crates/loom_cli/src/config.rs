//! Loom configuration file handling
//!
//! `loom.toml` describes the site being rendered:
//!
//! ```toml
//! [site]
//! name = "Acme"
//!
//! [render]
//! breakpoint = "desktop"
//!
//! [logos.primary]
//! src = "/assets/acme.svg"
//! alt = "Acme"
//! width = 120
//!
//! [tenants.acme.tokens]
//! color-primary = "#111111"
//! ```

use anyhow::{Context, Result};
use indexmap::IndexMap;
use loom_core::Breakpoint;
use loom_render::LogoRegistry;
use loom_tenant::StaticTokenSource;
use loom_tokens::TokenSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration stored in loom.toml
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoomConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logos: LogoRegistry,
    #[serde(default)]
    pub tenants: IndexMap<String, TenantConfig>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

fn default_site_name() -> String {
    "loom".to_string()
}

/// Render defaults, overridable per command
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub breakpoint: Breakpoint,
}

/// Per-tenant settings
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TenantConfig {
    #[serde(default)]
    pub tokens: TokenSet,
}

impl LoomConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Token sets of every configured tenant
    pub fn token_source(&self) -> StaticTokenSource {
        self.tenants
            .iter()
            .fold(StaticTokenSource::new(), |source, (id, tenant)| {
                source.with(id.as_str(), tenant.tokens.clone())
            })
    }
}
