use crate::models::Item;
use chrono::{DateTime, FixedOffset, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Keeps the items published within `window_hours` of `now`.
///
/// Pure and order-preserving: the result is a subsequence of the input.
/// `now` is captured once by the caller so every item ages against the
/// same instant. Items whose timestamp is absent or unparseable are
/// silently excluded. The window bound is inclusive: an item exactly
/// `window_hours` old is kept.
pub fn filter_recent_items(
    items: Vec<Item>,
    now: DateTime<Utc>,
    window_hours: f64,
) -> Vec<Item> {
    items
        .into_iter()
        .filter(|item| match item.published_at() {
            Some(published) => age_hours(now, published) <= window_hours,
            None => false,
        })
        .collect()
}

/// Signed age in hours. Future-dated timestamps yield a negative age and
/// pass the inclusive window bound.
fn age_hours(now: DateTime<Utc>, published: DateTime<FixedOffset>) -> f64 {
    now.signed_duration_since(published).num_milliseconds() as f64 / MILLIS_PER_HOUR
}
