//! Mention counting.
//!
//! Groups a sequence of names into `(name, count)` pairs with a deterministic
//! order: descending by count, ties broken by first occurrence in the input.
//! The order never depends on hash-map iteration.

use crate::types::CharacterStat;
use std::collections::HashMap;

/// Summarise mention counts for `names`.
///
/// With `ignore_case` set, names are grouped under their lowercased form while
/// the first-encountered original casing is kept as the display name. Empty
/// names are skipped, so the counts always sum to the number of non-empty
/// inputs.
///
/// Empty input produces an empty result, not an error.
#[must_use]
pub fn summarise(names: &[String], ignore_case: bool) -> Vec<CharacterStat> {
    // Stats in first-seen order; the map only resolves names to slots.
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut stats: Vec<CharacterStat> = Vec::new();

    for name in names {
        if name.is_empty() {
            continue;
        }
        let key = if ignore_case {
            name.to_lowercase()
        } else {
            name.clone()
        };
        match slots.get(&key) {
            Some(&idx) => stats[idx].count += 1,
            None => {
                slots.insert(key, stats.len());
                stats.push(CharacterStat::new(name.clone(), 1));
            }
        }
    }

    // Stable sort keeps first-seen order for equal counts.
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
