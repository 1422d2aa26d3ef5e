//! The exportable page document.

use crate::section::{sort_by_order, Section};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_NAME: &str = "My Website";

/// Whole page: ordered sections plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    pub id: String,
    pub name: String,
    pub sections: Vec<Section>,
    pub created_at: String,
    pub updated_at: String,
}

impl WebsiteConfig {
    /// Snapshot `sections` at `now`. The id embeds the timestamp and both
    /// timestamps are set to `now`; sections are sorted by `order`.
    pub fn snapshot(name: impl Into<String>, mut sections: Vec<Section>, now: DateTime<Utc>) -> Self {
        sort_by_order(&mut sections);
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        Self {
            id: format!("website-{}", now.timestamp_millis()),
            name: name.into(),
            sections,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
