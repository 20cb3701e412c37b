//! # SOV Criteria and the Weighted Control Aggregator
//!
//! A provider's control score is the weighted aggregate of eight
//! sovereignty sub-scores ("SOV criteria"). The weights are fixed and sum to
//! exactly 100 percent:
//!
//! | Key              | Short  | Weight |
//! |------------------|--------|--------|
//! | `strategic`      | SOV-1  | 15 %   |
//! | `legal`          | SOV-2  | 10 %   |
//! | `data_ai`        | SOV-3  | 10 %   |
//! | `operational`    | SOV-4  | 15 %   |
//! | `supply_chain`   | SOV-5  | 20 %   |
//! | `technology`     | SOV-6  | 15 %   |
//! | `security`       | SOV-7  | 10 %   |
//! | `sustainability` | SOV-8  | 5 %    |
//!
//! Weights are held as integer percentages so the aggregate is computed in
//! exact integer arithmetic. Rounding is to nearest, ties away from zero
//! (all inputs are non-negative, so this is round-half-up): a weighted sum of
//! 89.5 yields 90.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ValidationError;

/// One of the eight sovereignty sub-dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SovCriterion {
    /// Strategic sovereignty: ownership, control and decision rights.
    Strategic,
    /// Legal and jurisdictional exposure (e.g. extraterritorial access).
    Legal,
    /// Data and AI sovereignty: residency, key custody, model hosting.
    DataAi,
    /// Operational autonomy: who runs, supports and can stop the service.
    Operational,
    /// Supply-chain independence: hardware, software and staffing origin.
    SupplyChain,
    /// Technology openness: open standards, portability, source access.
    Technology,
    /// Security and compliance: certifications and auditability.
    Security,
    /// Environmental sustainability of the operation.
    Sustainability,
}

/// Number of SOV criteria.
pub const SOV_CRITERION_COUNT: usize = 8;

/// Fixed weights in integer percent. Sum is exactly 100.
pub const SOV_WEIGHTS: [(SovCriterion, u32); SOV_CRITERION_COUNT] = [
    (SovCriterion::Strategic, 15),
    (SovCriterion::Legal, 10),
    (SovCriterion::DataAi, 10),
    (SovCriterion::Operational, 15),
    (SovCriterion::SupplyChain, 20),
    (SovCriterion::Technology, 15),
    (SovCriterion::Security, 10),
    (SovCriterion::Sustainability, 5),
];

impl SovCriterion {
    /// All criteria in canonical (SOV-1 … SOV-8) order.
    pub fn all() -> &'static [SovCriterion] {
        &[
            Self::Strategic,
            Self::Legal,
            Self::DataAi,
            Self::Operational,
            Self::SupplyChain,
            Self::Technology,
            Self::Security,
            Self::Sustainability,
        ]
    }

    /// The snake_case key, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strategic => "strategic",
            Self::Legal => "legal",
            Self::DataAi => "data_ai",
            Self::Operational => "operational",
            Self::SupplyChain => "supply_chain",
            Self::Technology => "technology",
            Self::Security => "security",
            Self::Sustainability => "sustainability",
        }
    }

    /// Short code shown under the criterion name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Strategic => "SOV-1",
            Self::Legal => "SOV-2",
            Self::DataAi => "SOV-3",
            Self::Operational => "SOV-4",
            Self::SupplyChain => "SOV-5",
            Self::Technology => "SOV-6",
            Self::Security => "SOV-7",
            Self::Sustainability => "SOV-8",
        }
    }

    /// Human-readable criterion name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strategic => "Strategic sovereignty",
            Self::Legal => "Legal & jurisdictional sovereignty",
            Self::DataAi => "Data & AI sovereignty",
            Self::Operational => "Operational sovereignty",
            Self::SupplyChain => "Supply-chain sovereignty",
            Self::Technology => "Technology sovereignty",
            Self::Security => "Security & compliance",
            Self::Sustainability => "Environmental sustainability",
        }
    }

    /// Generic explanation, shown when a provider has no specific text.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Strategic => {
                "Ownership structure, governance and the ability to take independent strategic decisions."
            }
            Self::Legal => {
                "Exposure to non-EU jurisdictions and extraterritorial access laws such as the US CLOUD Act."
            }
            Self::DataAi => {
                "Control over data residency, encryption keys and the location of AI models and inference."
            }
            Self::Operational => {
                "Who operates, supports and can suspend the service, and under which legal regime."
            }
            Self::SupplyChain => {
                "Origin of hardware, software and personnel, and dependence on single foreign suppliers."
            }
            Self::Technology => {
                "Use of open standards, portability of workloads and access to source code."
            }
            Self::Security => {
                "Recognised certifications (BSI C5, ISO 27001), auditability and incident transparency."
            }
            Self::Sustainability => {
                "Energy sourcing, efficiency reporting and environmental commitments of the data centres."
            }
        }
    }

    /// Weight in integer percent.
    pub fn weight_percent(&self) -> u32 {
        match self {
            Self::Strategic => 15,
            Self::Legal => 10,
            Self::DataAi => 10,
            Self::Operational => 15,
            Self::SupplyChain => 20,
            Self::Technology => 15,
            Self::Security => 10,
            Self::Sustainability => 5,
        }
    }

    /// Weight as a fraction of 1.0.
    pub fn weight(&self) -> f64 {
        f64::from(self.weight_percent()) / 100.0
    }
}

impl std::fmt::Display for SovCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SovCriterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strategic" => Ok(Self::Strategic),
            "legal" => Ok(Self::Legal),
            "data_ai" => Ok(Self::DataAi),
            "operational" => Ok(Self::Operational),
            "supply_chain" => Ok(Self::SupplyChain),
            "technology" => Ok(Self::Technology),
            "security" => Ok(Self::Security),
            "sustainability" => Ok(Self::Sustainability),
            other => Err(ValidationError::UnknownCriterion(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SovereigntyScores
// ---------------------------------------------------------------------------

/// Sub-scores per SOV criterion, each clamped to 0..=100.
///
/// Missing criteria read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SovereigntyScores(BTreeMap<SovCriterion, u8>);

impl SovereigntyScores {
    /// An empty score set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from eight values in canonical SOV-1 … SOV-8 order.
    pub fn from_ordered(values: [u8; SOV_CRITERION_COUNT]) -> Self {
        let mut scores = Self::new();
        for (criterion, value) in SovCriterion::all().iter().zip(values) {
            scores.set(*criterion, value);
        }
        scores
    }

    /// Set a sub-score, clamping it to 100.
    pub fn set(&mut self, criterion: SovCriterion, value: u8) {
        self.0.insert(criterion, value.min(100));
    }

    /// Sub-score for a criterion, 0 when absent.
    pub fn get(&self, criterion: SovCriterion) -> u8 {
        self.0.get(&criterion).copied().unwrap_or(0)
    }

    /// Whether no criterion has a score.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of criteria with a score.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over present `(criterion, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SovCriterion, u8)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Compute the control score from sub-scores using the fixed SOV weights.
///
/// Returns 0 for an empty score set.
pub fn compute_control(scores: &SovereigntyScores) -> u8 {
    weighted_control(scores, &SOV_WEIGHTS)
}

/// Compute a weighted, rounded aggregate for an arbitrary weight table.
///
/// The sum is divided by the total weight, so tables that do not sum to 100
/// are normalized. An empty score set or a zero total weight yields 0.
pub fn weighted_control(scores: &SovereigntyScores, weights: &[(SovCriterion, u32)]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let total_weight: u64 = weights.iter().map(|(_, w)| u64::from(*w)).sum();
    if total_weight == 0 {
        return 0;
    }
    let weighted_sum: u64 = weights
        .iter()
        .map(|(criterion, w)| u64::from(*w) * u64::from(scores.get(*criterion)))
        .sum();
    // Round half up: floor((2·sum + total) / (2·total)).
    let rounded = (2 * weighted_sum + total_weight) / (2 * total_weight);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}
