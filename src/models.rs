use crate::constants::{FALLBACK_SLUG, FALLBACK_TITLE};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// A single collection item as returned by the Webflow items endpoint.
///
/// Only the fields the sitemap needs are modeled; everything else in the
/// response is ignored. `last_published` is kept as the raw string so the
/// rendered document carries the timestamp exactly as the API returned it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque item identifier
    #[serde(default)]
    pub id: String,
    /// Raw `lastPublished` timestamp; `None` for never-published items
    #[serde(default)]
    pub last_published: Option<String>,
    /// Nested editorial fields
    #[serde(default)]
    pub field_data: FieldData,
}

/// Editorial fields nested under `fieldData`. Both are optional in the
/// remote schema; rendering substitutes fixed fallbacks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldData {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Item {
    /// Parses `last_published` as an RFC 3339 timestamp.
    ///
    /// Returns `None` when the timestamp is absent or unparseable; the
    /// recency filter excludes such items rather than erroring.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        self.last_published
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
    }

    /// URL path segment, substituting the fixed fallback for absent or
    /// empty slugs.
    pub fn slug_or_default(&self) -> &str {
        match self.field_data.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug,
            _ => FALLBACK_SLUG,
        }
    }

    /// Display title, substituting the fixed fallback for absent or empty
    /// names.
    pub fn title_or_default(&self) -> &str {
        match self.field_data.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => FALLBACK_TITLE,
        }
    }
}
