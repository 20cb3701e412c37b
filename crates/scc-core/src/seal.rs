//! # SEAL Classification
//!
//! Maps a control score onto one of five Sovereignty Effective Assurance
//! Levels. The table is evaluated with the "highest qualifying threshold
//! wins" rule of [`TierTable::at_least`]; the 0-threshold tier is the
//! catch-all, so classification is total.
//!
//! | Level | Min control | Label                      |
//! |-------|-------------|----------------------------|
//! | 4     | 90          | Full digital sovereignty   |
//! | 3     | 75          | Digital resilience         |
//! | 2     | 55          | Data sovereignty           |
//! | 1     | 40          | Jurisdictional sovereignty |
//! | 0     | 0           | No sovereignty             |

use serde::Serialize;

use crate::tier::TierTable;

/// A SEAL tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SealLevel {
    /// Tier number, 0 (lowest) to 4 (highest).
    pub level: u8,
    /// Minimum control score for the tier.
    pub min_control: u8,
    /// Full label.
    pub label: &'static str,
    /// Badge label, e.g. `SEAL-3`.
    pub short_label: &'static str,
    /// Foreground color for badges and zone borders.
    pub color: &'static str,
    /// Background color for badges and chart zone bands.
    pub background: &'static str,
}

/// Number of SEAL tiers.
pub const SEAL_LEVEL_COUNT: usize = 5;

const SEAL_4: SealLevel = SealLevel {
    level: 4,
    min_control: 90,
    label: "Full digital sovereignty",
    short_label: "SEAL-4",
    color: "#047857",
    background: "rgba(16, 185, 129, 0.12)",
};

const SEAL_3: SealLevel = SealLevel {
    level: 3,
    min_control: 75,
    label: "Digital resilience",
    short_label: "SEAL-3",
    color: "#15803d",
    background: "rgba(34, 197, 94, 0.10)",
};

const SEAL_2: SealLevel = SealLevel {
    level: 2,
    min_control: 55,
    label: "Data sovereignty",
    short_label: "SEAL-2",
    color: "#a16207",
    background: "rgba(234, 179, 8, 0.10)",
};

const SEAL_1: SealLevel = SealLevel {
    level: 1,
    min_control: 40,
    label: "Jurisdictional sovereignty",
    short_label: "SEAL-1",
    color: "#c2410c",
    background: "rgba(249, 115, 22, 0.10)",
};

const SEAL_0: SealLevel = SealLevel {
    level: 0,
    min_control: 0,
    label: "No sovereignty",
    short_label: "SEAL-0",
    color: "#b91c1c",
    background: "rgba(239, 68, 68, 0.08)",
};

/// The SEAL table, highest tier first.
pub const SEAL_TABLE: TierTable<'static, SealLevel> = TierTable::new(&[
    (90, SEAL_4),
    (75, SEAL_3),
    (55, SEAL_2),
    (40, SEAL_1),
    (0, SEAL_0),
]);

/// Classify a control score.
///
/// Scores below 0 classify as level 0, scores above 100 as level 4.
pub fn classify(control: i64) -> &'static SealLevel {
    SEAL_TABLE.at_least(control).unwrap_or(&SEAL_0)
}

/// All SEAL tiers, highest first.
pub fn seal_levels() -> impl Iterator<Item = &'static SealLevel> {
    SEAL_TABLE.entries().iter().map(|(_, level)| level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_descending_and_thresholds_match_entries() {
        assert!(SEAL_TABLE.is_descending());
        for (threshold, level) in SEAL_TABLE.entries() {
            assert_eq!(*threshold, i64::from(level.min_control));
        }
        assert_eq!(SEAL_TABLE.entries().len(), SEAL_LEVEL_COUNT);
    }

    #[test]
    fn exact_boundaries() {
        assert_eq!(classify(90).level, 4);
        assert_eq!(classify(89).level, 3);
        assert_eq!(classify(75).level, 3);
        assert_eq!(classify(74).level, 2);
        assert_eq!(classify(55).level, 2);
        assert_eq!(classify(54).level, 1);
        assert_eq!(classify(40).level, 1);
        assert_eq!(classify(39).level, 0);
        assert_eq!(classify(0).level, 0);
        assert_eq!(classify(100).level, 4);
    }

    #[test]
    fn out_of_range_inputs_are_clamped_equivalent() {
        assert_eq!(classify(-10).level, 0);
        assert_eq!(classify(250).level, 4);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = 0;
        for score in 0..=100 {
            let level = classify(score).level;
            assert!(level >= previous, "level dropped at {score}");
            previous = level;
        }
    }

    #[test]
    fn short_labels_match_levels() {
        for level in seal_levels() {
            assert_eq!(level.short_label, format!("SEAL-{}", level.level));
        }
    }
}
