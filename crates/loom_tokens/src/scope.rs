//! Applied token scope
//!
//! `TokenScope` is the document-level set of token values currently in
//! effect - what a browser would see as custom properties on `:root`. It is
//! an explicit value rather than process-wide state: whoever owns the scope
//! decides when tokens are applied and when a previous state is restored.
//!
//! Restoring works through snapshots:
//!
//! ```rust
//! use loom_tokens::{TokenScope, TokenSet};
//!
//! let mut scope = TokenScope::new();
//! let before = scope.snapshot();
//!
//! scope.apply(&[("color-primary", "#111")].into_iter().collect::<TokenSet>());
//! assert_eq!(scope.get("color-primary"), Some("#111"));
//!
//! scope.restore(before);
//! assert!(scope.is_empty());
//! ```

use indexmap::IndexMap;

use crate::set::TokenSet;
use crate::tokens::{is_valid_entry, normalize_name};

/// Document-level token values in effect
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenScope {
    applied: IndexMap<String, String>,
}

/// Frozen copy of a [`TokenScope`], used to undo later applications
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenSnapshot {
    applied: IndexMap<String, String>,
}

impl TokenScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope pre-populated with a base set (typically [`TokenSet::defaults`])
    pub fn with_base(base: &TokenSet) -> Self {
        let mut scope = Self::new();
        scope.apply(base);
        scope
    }

    /// Write every valid entry of `set` into the scope, replacing existing
    /// values. Entries failing [`is_valid_entry`] are skipped.
    ///
    /// Returns the number of entries written. An empty set changes nothing.
    pub fn apply(&mut self, set: &TokenSet) -> usize {
        let mut written = 0;
        for (name, value) in set.iter() {
            if !is_valid_entry(name, value) {
                continue;
            }
            self.applied.insert(name.to_string(), value.to_string());
            written += 1;
        }
        written
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.applied.get(normalize_name(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.applied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.applied.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn snapshot(&self) -> TokenSnapshot {
        TokenSnapshot {
            applied: self.applied.clone(),
        }
    }

    /// Return the scope to exactly the snapshot state
    pub fn restore(&mut self, snapshot: TokenSnapshot) {
        self.applied = snapshot.applied;
    }

    /// Render the scope as custom properties on `selector`
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::with_capacity(self.applied.len() * 32 + selector.len() + 4);
        css.push_str(selector);
        css.push_str(" {\n");
        for (name, value) in &self.applied {
            css.push_str("  --");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        // Safe to embed in a <style> element
        css.replace("</", "<\\/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> TokenSet {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_apply_replaces_keyed_by_name() {
        let mut scope = TokenScope::with_base(&set(&[("color-primary", "#000"), ("spacing-4", "16px")]));
        let written = scope.apply(&set(&[("color-primary", "#111")]));

        assert_eq!(written, 1);
        assert_eq!(scope.get("color-primary"), Some("#111"));
        assert_eq!(scope.get("spacing-4"), Some("16px"));
        assert_eq!(scope.len(), 2);
    }

    #[test]
    fn test_empty_set_leaves_scope_untouched() {
        let mut scope = TokenScope::with_base(&set(&[("color-primary", "#111")]));
        let before = scope.clone();
        assert_eq!(scope.apply(&TokenSet::new()), 0);
        assert_eq!(scope, before);
    }

    #[test]
    fn test_restore_drops_later_keys() {
        let mut scope = TokenScope::with_base(&set(&[("a", "1")]));
        let snap = scope.snapshot();
        scope.apply(&set(&[("a", "2"), ("b", "3")]));
        scope.restore(snap);

        assert_eq!(scope.get("a"), Some("1"));
        assert_eq!(scope.get("b"), None);
    }

    #[test]
    fn test_to_css() {
        let scope = TokenScope::with_base(&set(&[("color-primary", "#222"), ("radius-md", "6px")]));
        assert_eq!(
            scope.to_css(":root"),
            ":root {\n  --color-primary: #222;\n  --radius-md: 6px;\n}"
        );
    }

    #[test]
    fn test_hostile_values_cannot_end_the_rule() {
        let mut scope = TokenScope::with_base(&set(&[("color-primary", "#000")]));
        let written = scope.apply(&set(&[
            ("color-primary", "#111;}</style><script>alert(1)</script><style>:root{"),
            ("color-accent", "#f0f"),
            ("x}body{color", "red"),
        ]));

        assert_eq!(written, 1);
        assert_eq!(scope.get("color-primary"), Some("#000"));
        assert_eq!(scope.get("color-accent"), Some("#f0f"));

        let css = scope.to_css(":root");
        assert!(!css.contains("</style>"));
        assert!(!css.contains("script"));
        assert_eq!(css.matches('}').count(), 1);
    }

    #[test]
    fn test_to_css_escapes_closing_tags_in_selector() {
        let scope = TokenScope::with_base(&set(&[("a", "1")]));
        assert!(!scope.to_css("</style>:root").contains("</"));
    }
}
