//! Report shaping: aggregated stats to a tabular structure.

use crate::types::{CharacterStat, TableData};

/// Header row of the frequency table.
pub const REPORT_HEADER: [&str; 2] = ["Character", "Mentions"];

/// Build the frequency table from aggregated stats.
///
/// Entries with `count < minimum_mentions` are dropped; the aggregator's sort
/// order is preserved for the rest. The result is a header row followed by one
/// `[name, count]` row per retained stat. When nothing survives the filter the
/// table is header-only, not an error. A threshold of 0 behaves like the
/// default of 1 because every stat counts at least one mention.
#[must_use]
pub fn build(stats: &[CharacterStat], minimum_mentions: usize) -> TableData {
    let mut rows = Vec::with_capacity(stats.len() + 1);
    rows.push(REPORT_HEADER.iter().map(ToString::to_string).collect());

    for stat in stats {
        if stat.count >= minimum_mentions {
            rows.push(vec![stat.name.clone(), stat.count.to_string()]);
        }
    }

    TableData::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(items: &[(&str, usize)]) -> Vec<CharacterStat> {
        items
            .iter()
            .map(|(name, count)| CharacterStat::new((*name).to_string(), *count))
            .collect()
    }

    #[test]
    fn test_header_and_rows_in_aggregator_order() {
        let table = build(&stats(&[("Alice", 3), ("Bob", 2)]), 1);
        assert_eq!(
            table.rows,
            vec![
                vec!["Character".to_string(), "Mentions".to_string()],
                vec!["Alice".to_string(), "3".to_string()],
                vec!["Bob".to_string(), "2".to_string()],
            ]
        );
    }

    #[test]
    fn test_minimum_mentions_filters() {
        let table = build(&stats(&[("Alice", 3), ("Bob", 2)]), 3);
        assert_eq!(
            table.rows,
            vec![
                vec!["Character".to_string(), "Mentions".to_string()],
                vec!["Alice".to_string(), "3".to_string()],
            ]
        );
    }

    #[test]
    fn test_threshold_zero_equivalent_to_one() {
        let input = stats(&[("Alice", 3), ("Bob", 1)]);
        assert_eq!(build(&input, 0), build(&input, 1));
    }

    #[test]
    fn test_nothing_surviving_yields_header_only() {
        let table = build(&stats(&[("Alice", 1)]), 10);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["Character", "Mentions"]);
    }

    #[test]
    fn test_empty_stats_yield_header_only() {
        let table = build(&[], 1);
        assert_eq!(table.rows, vec![vec!["Character", "Mentions"]]);
    }
}
