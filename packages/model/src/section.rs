//! # Sections
//!
//! A `Section` is one block placed on the page. Its wire form is a flat
//! JSON object:
//!
//! ```text
//! { "id": "hero-lq2x9-1", "type": "hero", "order": 0,
//!   "title": "...", "description": "...", "imageUrl": "...",
//!   "backgroundColor": "...", "textColor": "...",
//!   "<any other override key>": ...,
//!   "content": { ...type-specific record... } }
//! ```
//!
//! Reading goes through [`WireSection`] so the `type` tag decides which
//! content record is parsed. An unknown type, or a missing `id`/`order`,
//! fails deserialization.

use crate::content::SectionContent;
use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Closed set of section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Hero,
    Features,
    About,
    Contact,
    Footer,
}

impl SectionType {
    /// Catalog order.
    pub const ALL: [SectionType; 6] = [
        SectionType::Header,
        SectionType::Hero,
        SectionType::Features,
        SectionType::About,
        SectionType::Contact,
        SectionType::Footer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::About => "about",
            SectionType::Contact => "contact",
            SectionType::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSectionType(s.to_string()))
    }
}

/// One placed block on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireSection", into = "WireSection")]
pub struct Section {
    pub id: String,
    pub section_type: SectionType,
    pub order: u32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    /// Any other top-level keys (per-type override colors and the like).
    pub overrides: BTreeMap<String, Value>,
    pub content: SectionContent,
}

impl Section {
    /// Bare section of a type with empty content.
    pub fn new(id: impl Into<String>, section_type: SectionType, order: u32) -> Self {
        Self {
            id: id.into(),
            section_type,
            order,
            title: String::new(),
            description: None,
            image_url: None,
            background_color: None,
            text_color: None,
            overrides: BTreeMap::new(),
            content: SectionContent::empty(section_type),
        }
    }

    /// Top-level value for a wire key: a core field or an override.
    pub fn top_level(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(self.title.as_str()),
            "description" => self.description.as_deref(),
            "imageUrl" => self.image_url.as_deref(),
            "backgroundColor" => self.background_color.as_deref(),
            "textColor" => self.text_color.as_deref(),
            other => self.overrides.get(other).and_then(Value::as_str),
        }
    }

    /// Resolve a display field: content key, then top-level field.
    /// Empty strings count as absent.
    pub fn resolve_opt(&self, key: &str) -> Option<&str> {
        self.content
            .text(key)
            .filter(|v| !v.is_empty())
            .or_else(|| self.top_level(key).filter(|v| !v.is_empty()))
    }

    /// Resolve a display field, falling back to `default`.
    pub fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.resolve_opt(key).unwrap_or(default)
    }

    /// Content record as its wire map.
    pub fn content_map(&self) -> ModelResult<Map<String, Value>> {
        self.content.to_map()
    }
}

/// Untyped wire record used to read and write [`Section`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSection {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub order: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub overrides: BTreeMap<String, Value>,
}

impl TryFrom<WireSection> for Section {
    type Error = ModelError;

    fn try_from(wire: WireSection) -> Result<Self, Self::Error> {
        let section_type: SectionType = wire.section_type.parse()?;
        let content = SectionContent::from_map(section_type, wire.content.unwrap_or_default())?;

        Ok(Section {
            id: wire.id,
            section_type,
            order: wire.order,
            title: wire.title,
            description: wire.description,
            image_url: wire.image_url,
            background_color: wire.background_color,
            text_color: wire.text_color,
            overrides: wire.overrides,
            content,
        })
    }
}

impl From<Section> for WireSection {
    fn from(section: Section) -> Self {
        // Typed records always serialize to objects, so this only drops
        // content if serde_json itself fails.
        let content = section.content.to_map().ok();

        WireSection {
            id: section.id,
            section_type: section.section_type.as_str().to_string(),
            order: section.order,
            title: section.title,
            description: section.description,
            image_url: section.image_url,
            background_color: section.background_color,
            text_color: section.text_color,
            content,
            overrides: section.overrides,
        }
    }
}

/// Sort sections into display order (stable, ascending `order`).
pub fn sort_by_order(sections: &mut [Section]) {
    sections.sort_by_key(|s| s.order);
}
