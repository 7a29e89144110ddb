use crate::domain::model::Record;
use std::cmp::Ordering;

/// Stable ascending sort of `records` by the string value stored under `key`.
///
/// Nothing happens when the first record has no `key` at all. Past that check,
/// records whose `key` is missing or not a string are moved after the others
/// in their original relative order.
pub fn sort_records(records: &mut [Record], key: &str) {
    let Some(first) = records.first() else {
        return;
    };
    if !first.contains_key(key) {
        tracing::debug!("First record has no '{}' field, skipping sort", key);
        return;
    }

    records.sort_by(|a, b| compare_by_key(a, b, key));
}

fn compare_by_key(a: &Record, b: &Record, key: &str) -> Ordering {
    let a = a.get(key).and_then(|v| v.as_str());
    let b = b.get(key).and_then(|v| v.as_str());

    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
