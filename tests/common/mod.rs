//! Common test utilities for integration tests

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// Fixed reference instant used across tests in place of the wall clock
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-10T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// One collection item JSON object published `hours_ago` before [`fixed_now`]
#[allow(dead_code)]
pub fn item_json(slug: &str, name: &str, hours_ago: i64) -> String {
    let ts = (fixed_now() - Duration::hours(hours_ago))
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    format!(
        r#"{{"id": "item-{slug}", "lastPublished": "{ts}", "fieldData": {{"slug": "{slug}", "name": "{name}"}}}}"#
    )
}

/// API response body wrapping the given item objects
#[allow(dead_code)]
pub fn items_response(items: &[String]) -> String {
    format!(r#"{{"items": [{}]}}"#, items.join(", "))
}

/// Auth-failure style response body with no `items` key
#[allow(dead_code)]
pub const UNAUTHORIZED_RESPONSE: &str = r#"{"error": "unauthorized"}"#;
