//! # Threshold Tables
//!
//! Ordered `(threshold, value)` tables used wherever a number is bucketed
//! into a discrete tier: SEAL levels, strategy labels, sub-score classes,
//! and chart marker sizes.
//!
//! Two lookup rules are supported:
//!
//! - [`TierTable::at_least`]: the entry with the **highest threshold that is
//!   ≤ the input** wins. Entries are kept sorted descending, so the first
//!   qualifying entry is the answer. A zero (or lowest) threshold acts as the
//!   catch-all; inputs below every threshold fall back to the last entry.
//! - [`TierTable::at_most`]: the entry with the **lowest ceiling that is ≥
//!   the input** wins. Entries are kept sorted ascending; inputs above every
//!   ceiling fall back to the last entry.
//!
//! Both rules are total for non-empty tables.

/// An ordered, non-empty threshold table.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<'a, T> {
    entries: &'a [(i64, T)],
}

impl<'a, T> TierTable<'a, T> {
    /// Wrap a static table.
    ///
    /// The caller provides the ordering required by the lookup it intends to
    /// use: descending thresholds for [`at_least`](Self::at_least), ascending
    /// ceilings for [`at_most`](Self::at_most). Both orderings are checked by
    /// unit tests on every table in the crate.
    pub const fn new(entries: &'a [(i64, T)]) -> Self {
        Self { entries }
    }

    /// Highest threshold ≤ `value` wins.
    ///
    /// Returns `None` only for an empty table.
    pub fn at_least(&self, value: i64) -> Option<&'a T> {
        self.entries
            .iter()
            .find(|(threshold, _)| *threshold <= value)
            .or_else(|| self.entries.last())
            .map(|(_, v)| v)
    }

    /// Lowest ceiling ≥ `value` wins.
    ///
    /// Returns `None` only for an empty table.
    pub fn at_most(&self, value: i64) -> Option<&'a T> {
        self.entries
            .iter()
            .find(|(ceiling, _)| value <= *ceiling)
            .or_else(|| self.entries.last())
            .map(|(_, v)| v)
    }

    /// The raw entries, in table order.
    pub fn entries(&self) -> &'a [(i64, T)] {
        self.entries
    }

    /// Whether thresholds strictly decrease in table order.
    pub fn is_descending(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 > w[1].0)
    }

    /// Whether ceilings strictly increase in table order.
    pub fn is_ascending(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRADES: TierTable<'static, char> = TierTable::new(&[(90, 'A'), (75, 'B'), (0, 'C')]);
    const BUCKETS: TierTable<'static, u32> = TierTable::new(&[(0, 36), (2, 32), (5, 28)]);

    #[test]
    fn at_least_picks_highest_qualifying_threshold() {
        assert_eq!(GRADES.at_least(100), Some(&'A'));
        assert_eq!(GRADES.at_least(90), Some(&'A'));
        assert_eq!(GRADES.at_least(89), Some(&'B'));
        assert_eq!(GRADES.at_least(75), Some(&'B'));
        assert_eq!(GRADES.at_least(74), Some(&'C'));
        assert_eq!(GRADES.at_least(0), Some(&'C'));
    }

    #[test]
    fn at_least_below_every_threshold_falls_back_to_last() {
        assert_eq!(GRADES.at_least(-5), Some(&'C'));
    }

    #[test]
    fn at_most_picks_lowest_qualifying_ceiling() {
        assert_eq!(BUCKETS.at_most(0), Some(&36));
        assert_eq!(BUCKETS.at_most(1), Some(&32));
        assert_eq!(BUCKETS.at_most(2), Some(&32));
        assert_eq!(BUCKETS.at_most(3), Some(&28));
        assert_eq!(BUCKETS.at_most(99), Some(&28));
    }

    #[test]
    fn empty_table_yields_none() {
        let empty: TierTable<'_, u8> = TierTable::new(&[]);
        assert_eq!(empty.at_least(10), None);
        assert_eq!(empty.at_most(10), None);
    }

    #[test]
    fn ordering_predicates() {
        assert!(GRADES.is_descending());
        assert!(!GRADES.is_ascending());
        assert!(BUCKETS.is_ascending());
        assert!(!BUCKETS.is_descending());
    }
}
