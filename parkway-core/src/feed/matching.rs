//! Correlation of catalog attraction names with telemetry labels
//!
//! The feed's labels rarely equal catalog names exactly ("Transformers: The
//! Ride 3D" vs "Transformers"), so resolution runs in order: exact
//! case-insensitive match, then a substring match on the first token of the
//! attraction name, then the configured default. Multiple matching records
//! are averaged, truncated to whole minutes.

use chrono::{DateTime, Utc};
use hashbrown::HashMap;

use super::snapshot::WaitSnapshot;
use super::WaitRecord;
use crate::Minutes;

/// Resolves raw telemetry records into a snapshot covering `names`.
///
/// An empty record set yields a flat-default snapshot; per-name misses fall
/// back to `default_wait` individually.
pub fn resolve_snapshot<'a, I>(
    names: I,
    records: &[WaitRecord],
    default_wait: Minutes,
    as_of: DateTime<Utc>,
) -> WaitSnapshot
where
    I: IntoIterator<Item = &'a str>,
{
    if records.is_empty() {
        return WaitSnapshot::flat(default_wait, as_of);
    }

    let mut waits = HashMap::new();
    for name in names {
        let wait = match_wait(name, records).unwrap_or(default_wait);
        waits.insert(name.to_string(), wait);
    }
    WaitSnapshot::new(waits, default_wait, as_of)
}

/// Matches one attraction name against the record set.
///
/// Returns `None` when neither the exact name nor its first token appears
/// in any record label.
pub fn match_wait(name: &str, records: &[WaitRecord]) -> Option<Minutes> {
    let exact: Vec<Minutes> = records
        .iter()
        .filter(|record| record.label.eq_ignore_ascii_case(name))
        .map(|record| record.minutes)
        .collect();
    if !exact.is_empty() {
        return Some(truncated_mean(&exact));
    }

    let token = name.split_whitespace().next()?.to_lowercase();
    let partial: Vec<Minutes> = records
        .iter()
        .filter(|record| record.label.to_lowercase().contains(&token))
        .map(|record| record.minutes)
        .collect();
    if partial.is_empty() {
        None
    } else {
        Some(truncated_mean(&partial))
    }
}

fn truncated_mean(values: &[Minutes]) -> Minutes {
    let sum: u64 = values.iter().copied().map(u64::from).sum();
    (sum / values.len() as u64) as Minutes
}
