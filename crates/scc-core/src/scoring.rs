//! # Scoring Engine
//!
//! Interpolates between a provider's control and performance scores with a
//! single slider, filters by category, and ranks with tie detection.
//!
//! ## Ranking
//!
//! Providers are sorted descending by score with a stable sort, so equal
//! scores keep dataset order. Ranks are assigned by comparing each entry
//! only with its immediate predecessor: when the two scores differ by less
//! than [`TIE_EPSILON`], the entry inherits the predecessor's rank; otherwise
//! its rank is its 1-based position. Scores `[80, 80, 70]` therefore rank
//! `[1, 1, 3]`. Chains of near-equal scores can share a rank even when the
//! first and last differ by more than the epsilon.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::category::ProviderCategory;
use crate::error::ValidationError;
use crate::provider::Provider;
use crate::tier::TierTable;

/// Two adjacent scores closer than this share a rank.
pub const TIE_EPSILON: f64 = 0.01;

/// Slider position, 0 (pure control) to 100 (pure performance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SliderValue(u8);

impl SliderValue {
    /// Control-only weighting.
    pub const CONTROL: Self = Self(0);
    /// Equal weighting.
    pub const BALANCED: Self = Self(50);
    /// Performance-only weighting.
    pub const PERFORMANCE: Self = Self(100);

    /// Validate a slider value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SliderOutOfRange`] outside 0..=100.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(ValidationError::SliderOutOfRange(value))
    }

    /// Clamp any integer into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// The raw value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for SliderValue {
    fn default() -> Self {
        Self::BALANCED
    }
}

impl TryFrom<i64> for SliderValue {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SliderValue> for i64 {
    fn from(v: SliderValue) -> Self {
        i64::from(v.0)
    }
}

impl std::fmt::Display for SliderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weighted score for one provider.
///
/// `control·(100−s)/100 + performance·s/100`. Slider 0 yields exactly the
/// control score; slider 100 exactly the performance score.
pub fn score(provider: &Provider, slider: SliderValue) -> f64 {
    score_values(provider.control, provider.performance, slider)
}

/// [`score`] over raw values.
pub fn score_values(control: u8, performance: u8, slider: SliderValue) -> f64 {
    let s = f64::from(slider.value());
    f64::from(control) * (100.0 - s) / 100.0 + f64::from(performance) * s / 100.0
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

/// The set of enabled categories. Defaults to all enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    enabled: BTreeSet<ProviderCategory>,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl CategoryFilter {
    /// Every category enabled.
    pub fn all() -> Self {
        Self {
            enabled: ProviderCategory::all().iter().copied().collect(),
        }
    }

    /// No category enabled.
    pub fn none() -> Self {
        Self {
            enabled: BTreeSet::new(),
        }
    }

    /// Only the given categories enabled.
    pub fn only(categories: impl IntoIterator<Item = ProviderCategory>) -> Self {
        Self {
            enabled: categories.into_iter().collect(),
        }
    }

    /// Whether a category is enabled.
    pub fn is_enabled(&self, category: ProviderCategory) -> bool {
        self.enabled.contains(&category)
    }

    /// Enable or disable a category.
    pub fn set_enabled(&mut self, category: ProviderCategory, enabled: bool) {
        if enabled {
            self.enabled.insert(category);
        } else {
            self.enabled.remove(&category);
        }
    }

    /// Flip a category. Returns the new state.
    pub fn toggle(&mut self, category: ProviderCategory) -> bool {
        let now = !self.is_enabled(category);
        self.set_enabled(category, now);
        now
    }

    /// Whether no category is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Enabled categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = ProviderCategory> + '_ {
        self.enabled.iter().copied()
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// A provider with its score and tie-aware rank for one slider position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProvider {
    /// The scored provider (overrides already applied).
    pub provider: Provider,
    /// Weighted score.
    pub score: f64,
    /// 1-based rank; tied entries share the predecessor's rank.
    pub rank: u32,
}

/// Filter, score, sort and rank.
///
/// Returns an empty list when no enabled category has providers.
pub fn rank_providers(
    providers: &[Provider],
    slider: SliderValue,
    filter: &CategoryFilter,
) -> Vec<RankedProvider> {
    let mut scored: Vec<(Provider, f64)> = providers
        .iter()
        .filter(|p| filter.is_enabled(p.category))
        .map(|p| (p.clone(), score(p, slider)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let scores: Vec<f64> = scored.iter().map(|(_, s)| *s).collect();
    let ranks = tie_aware_ranks(&scores);

    scored
        .into_iter()
        .zip(ranks)
        .map(|((provider, score), rank)| RankedProvider {
            provider,
            score,
            rank,
        })
        .collect()
}

/// Ranks for a score list already sorted descending.
pub fn tie_aware_ranks(sorted_scores: &[f64]) -> Vec<u32> {
    let mut ranks: Vec<u32> = Vec::with_capacity(sorted_scores.len());
    for (i, s) in sorted_scores.iter().enumerate() {
        let position = u32::try_from(i + 1).unwrap_or(u32::MAX);
        let rank = match (i.checked_sub(1), ranks.last()) {
            (Some(prev), Some(prev_rank)) if (s - sorted_scores[prev]).abs() < TIE_EPSILON => {
                *prev_rank
            }
            _ => position,
        };
        ranks.push(rank);
    }
    ranks
}

// ---------------------------------------------------------------------------
// Strategy label
// ---------------------------------------------------------------------------

const STRATEGY_TABLE: TierTable<'static, &str> = TierTable::new(&[
    (80, "Performance-focused"),
    (60, "Performance-oriented"),
    (40, "Balanced"),
    (20, "Control-oriented"),
    (0, "Control-focused"),
]);

/// Label describing the slider position.
pub fn strategy_label(slider: SliderValue) -> &'static str {
    STRATEGY_TABLE
        .at_least(i64::from(slider.value()))
        .copied()
        .unwrap_or("Balanced")
}

/// Label plus the control:performance ratio, e.g. `Balanced (50:50)`.
pub fn strategy_text(slider: SliderValue) -> String {
    let v = slider.value();
    format!("{} ({}:{})", strategy_label(slider), 100 - v, v)
}
