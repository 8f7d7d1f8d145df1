//! Render pass context
//!
//! One `RenderContext` lives for one render pass. It carries what renderers
//! may consult (active breakpoint, logo registry) and collects the non-fatal
//! [`Diagnostic`]s raised along the way. Nothing in a render pass returns an
//! error: a block that cannot render contributes empty output and a
//! diagnostic, and its siblings carry on.

use std::fmt;

use indexmap::IndexMap;
use loom_core::Breakpoint;
use serde::{Deserialize, Serialize};

/// A logo asset a tenant has uploaded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Logo {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width: None,
            height: None,
        }
    }
}

/// Logo assets keyed by logo id
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoRegistry {
    logos: IndexMap<String, Logo>,
}

impl LogoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, logo: Logo) -> Option<Logo> {
        self.logos.insert(id.into(), logo)
    }

    pub fn with(mut self, id: impl Into<String>, logo: Logo) -> Self {
        self.insert(id, logo);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Logo> {
        self.logos.get(id)
    }

    pub fn len(&self) -> usize {
        self.logos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }
}

/// Non-fatal outcome recorded during a render pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// No renderer registered for the block's type
    UnknownBlockType { key: String, block_type: String },
    /// A block referenced an asset that does not exist
    MissingResource {
        key: String,
        kind: &'static str,
        id: String,
    },
    /// A field the block needs is absent or has the wrong shape
    InvalidField { key: String, field: &'static str },
}

impl Diagnostic {
    /// Key of the block the diagnostic belongs to
    pub fn block_key(&self) -> &str {
        match self {
            Diagnostic::UnknownBlockType { key, .. }
            | Diagnostic::MissingResource { key, .. }
            | Diagnostic::InvalidField { key, .. } => key,
        }
    }

    /// Whether the renderer already logged this at warn level when recording it
    pub fn already_warned(&self) -> bool {
        matches!(self, Diagnostic::MissingResource { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownBlockType { key, block_type } => {
                write!(f, "block '{key}': no renderer for type '{block_type}'")
            }
            Diagnostic::MissingResource { key, kind, id } => {
                write!(f, "block '{key}': {kind} '{id}' not found")
            }
            Diagnostic::InvalidField { key, field } => {
                write!(f, "block '{key}': field '{field}' is missing or invalid")
            }
        }
    }
}

/// State shared by every renderer during one render pass
pub struct RenderContext<'a> {
    breakpoint: Breakpoint,
    logos: &'a LogoRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> RenderContext<'a> {
    pub fn new(breakpoint: Breakpoint, logos: &'a LogoRegistry) -> Self {
        Self {
            breakpoint,
            logos,
            diagnostics: Vec::new(),
        }
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn logos(&self) -> &'a LogoRegistry {
        self.logos
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
