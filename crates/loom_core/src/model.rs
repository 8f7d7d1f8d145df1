//! Page document model
//!
//! A page is a tree of sections, containers and blocks. Order at every level
//! is insertion order and is the order things render in. Containers hold
//! blocks only; there is no way to put a container inside a container.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;
use crate::data::BlockData;
use crate::error::{ModelError, Result};
use crate::layout::{ContainerLayout, SectionLayout};

/// Per-breakpoint partial data overrides for a block
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<BlockData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<BlockData>,
}

impl ResponsiveOverrides {
    /// Override defined for a breakpoint; desktop never has one
    pub fn for_breakpoint(&self, breakpoint: Breakpoint) -> Option<&BlockData> {
        match breakpoint {
            Breakpoint::Desktop => None,
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Mobile => self.mobile.as_ref(),
        }
    }
}

/// Smallest content unit in a page, tagged by type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Unique within the parent container
    pub key: String,
    /// Type discriminator used to pick a renderer
    #[serde(rename = "_type")]
    pub block_type: String,
    #[serde(default)]
    pub data: BlockData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_overrides: Option<ResponsiveOverrides>,
}

impl Block {
    pub fn new(key: impl Into<String>, block_type: impl Into<String>, data: BlockData) -> Self {
        Self {
            key: key.into(),
            block_type: block_type.into(),
            data,
            responsive_overrides: None,
        }
    }

    pub fn with_overrides(mut self, overrides: ResponsiveOverrides) -> Self {
        self.responsive_overrides = Some(overrides);
        self
    }
}

/// Ordered grouping of blocks with shared layout attributes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub key: String,
    #[serde(flatten)]
    pub layout: ContainerLayout,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Ordered grouping of containers with spacing/background attributes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    #[serde(flatten)]
    pub layout: SectionLayout,
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// Root aggregate of a page document, owned by a tenant
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every block in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections
            .iter()
            .flat_map(|s| s.containers.iter())
            .flat_map(|c| c.blocks.iter())
    }

    pub fn block_count(&self) -> usize {
        self.blocks().count()
    }

    /// Check structural rules the editor is expected to uphold.
    ///
    /// Keys must be unique among siblings and every block needs a type.
    /// Rendering does not depend on this passing.
    pub fn validate(&self) -> Result<()> {
        let page_label = format!("page '{}'", self.id);
        unique_keys("section", self.sections.iter().map(|s| s.key.as_str()), &page_label)?;

        for section in &self.sections {
            let section_label = format!("section '{}'", section.key);
            unique_keys(
                "container",
                section.containers.iter().map(|c| c.key.as_str()),
                &section_label,
            )?;

            for container in &section.containers {
                let container_label = format!("container '{}'", container.key);
                unique_keys(
                    "block",
                    container.blocks.iter().map(|b| b.key.as_str()),
                    &container_label,
                )?;

                if let Some(block) = container.blocks.iter().find(|b| b.block_type.trim().is_empty()) {
                    return Err(ModelError::EmptyBlockType {
                        key: block.key.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

fn unique_keys<'a>(
    kind: &'static str,
    keys: impl Iterator<Item = &'a str>,
    parent: &str,
) -> Result<()> {
    let mut seen = FxHashSet::default();
    for key in keys {
        if !seen.insert(key) {
            return Err(ModelError::DuplicateKey {
                kind,
                key: key.to_string(),
                parent: parent.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Background, Direction, Spacing};

    const DOC: &str = r#"{
        "id": "home",
        "tenantId": "acme",
        "slug": "/",
        "title": "Home",
        "sections": [
            {
                "key": "hero",
                "spacing": "lg",
                "background": "muted",
                "containers": [
                    {
                        "key": "main",
                        "direction": "row",
                        "blocks": [
                            { "key": "b1", "_type": "heading", "data": { "text": "Hi" } },
                            {
                                "key": "b2",
                                "_type": "button",
                                "data": { "label": "Go" },
                                "responsiveOverrides": { "mobile": { "size": "sm" } }
                            }
                        ]
                    }
                ]
            },
            { "key": "footer", "containers": [ { "key": "f", "blocks": [ { "key": "b3", "_type": "divider" } ] } ] }
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let page = Page::from_json(DOC).unwrap();
        assert_eq!(page.tenant_id.as_deref(), Some("acme"));
        assert_eq!(page.sections.len(), 2);

        let hero = &page.sections[0];
        assert_eq!(hero.layout.spacing, Spacing::Lg);
        assert_eq!(hero.layout.background, Background::Muted);
        assert_eq!(hero.containers[0].layout.direction, Direction::Row);

        let keys: Vec<_> = page.blocks().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["b1", "b2", "b3"]);
        assert_eq!(page.block_count(), 3);

        let b2 = page.blocks().nth(1).unwrap();
        let overrides = b2.responsive_overrides.as_ref().unwrap();
        assert!(overrides.tablet.is_none());
        assert_eq!(overrides.for_breakpoint(Breakpoint::Mobile).unwrap()["size"], "sm");
        assert!(overrides.for_breakpoint(Breakpoint::Desktop).is_none());

        // Missing data defaults to an empty map
        assert!(page.blocks().nth(2).unwrap().data.is_empty());
    }

    #[test]
    fn test_json_roundtrip_keeps_wire_names() {
        let page = Page::from_json(DOC).unwrap();
        let json = page.to_json().unwrap();
        assert!(json.contains("\"_type\""));
        assert!(json.contains("\"responsiveOverrides\""));
        assert_eq!(Page::from_json(&json).unwrap(), page);
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        Page::from_json(DOC).unwrap().validate().unwrap();
    }

    #[test]
    fn test_validate_duplicate_block_key() {
        let mut page = Page::from_json(DOC).unwrap();
        page.sections[0].containers[0].blocks[1].key = "b1".into();

        match page.validate() {
            Err(ModelError::DuplicateKey { kind, key, parent }) => {
                assert_eq!(kind, "block");
                assert_eq!(key, "b1");
                assert_eq!(parent, "container 'main'");
            }
            other => panic!("expected duplicate key, got {other:?}"),
        }
    }

    #[test]
    fn test_same_block_key_in_different_containers_is_fine() {
        let mut page = Page::from_json(DOC).unwrap();
        page.sections[1].containers[0].blocks[0].key = "b1".into();
        page.validate().unwrap();
    }

    #[test]
    fn test_validate_empty_type() {
        let mut page = Page::from_json(DOC).unwrap();
        page.sections[1].containers[0].blocks[0].block_type = " ".into();
        assert!(matches!(
            page.validate(),
            Err(ModelError::EmptyBlockType { key }) if key == "b3"
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Page::from_json("{"), Err(ModelError::Parse(_))));
    }
}
