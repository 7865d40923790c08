// src/analytics/counts.rs
//! Frequency counting with a stable, first-seen tie-break.

use indexmap::IndexMap;

/// Value → count, ordered by count descending, ties in first-seen order.
pub type ValueCounts = IndexMap<String, usize>;

/// Counts each distinct value, then orders by count descending.
///
/// The sort is stable, so equal counts keep the order in which their values
/// first appeared.
pub fn value_counts<'a, I>(values: I) -> ValueCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = ValueCounts::new();
    for value in values {
        if let Some(count) = counts.get_mut(value) {
            *count += 1;
        } else {
            counts.insert(value.to_string(), 1);
        }
    }
    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
}

/// The first entry holding the maximum count.
#[must_use]
pub fn most_common(counts: &ValueCounts) -> Option<(&str, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (value, &count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value.as_str(), count));
        }
    }
    best
}
