//! # scc-core — Sovereign Cloud Compass Core
//!
//! Pure computation for the compass: the provider dataset, SOV criteria and
//! the weighted control aggregator, SEAL classification, slider scoring with
//! tie-aware ranking, and the chart coordinate mapper.
//!
//! ## Design Principles
//!
//! - **No rendering, no I/O.** Every function here is a total function over
//!   plain values. Storage lives in `scc-store`, element trees in
//!   `scc-render`, page state in `scc-app`.
//!
//! - **Thresholds as data.** SEAL tiers, strategy labels, sub-score classes
//!   and marker sizes are [`TierTable`]s, each with one documented lookup
//!   rule, rather than chains of `if` statements.
//!
//! - **Exact aggregation.** SOV weights are integer percentages; the
//!   aggregate rounds half-up in integer arithmetic, so `89.5` is always 90.
//!
//! - **Sanitized at the boundary.** Overrides from storage or user input are
//!   clamped when parsed; nothing downstream re-validates.
//!
//! ## Crate Policy
//!
//! - Depends only on `serde`, `serde_json` and `thiserror`.
//! - No `unsafe`.

pub mod category;
pub mod criteria;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod overrides;
pub mod provider;
pub mod scoring;
pub mod seal;
pub mod tier;

pub use category::ProviderCategory;
pub use criteria::{compute_control, SovCriterion, SovereigntyScores, SOV_WEIGHTS};
pub use dataset::{anonymize, base_providers, provider_by_id, LegendEntry};
pub use error::{SccError, ValidationError};
pub use layout::{marker_size, position, z_index, Position, ZoneBand, ZONE_BANDS};
pub use overrides::{apply_overrides, sanitize_score, OverrideMap, ScoreOverride};
pub use provider::{Provider, ProviderId};
pub use scoring::{rank_providers, score, CategoryFilter, RankedProvider, SliderValue};
pub use seal::{classify, SealLevel};
pub use tier::TierTable;

/// Sub-score class used by the sovereignty detail panel and score tables:
/// `high` from 70, `medium` from 40, else `low`.
pub fn score_class(value: u8) -> &'static str {
    const CLASSES: TierTable<'static, &str> =
        TierTable::new(&[(70, "high"), (40, "medium"), (0, "low")]);
    CLASSES.at_least(i64::from(value)).copied().unwrap_or("low")
}
