//! # Provider Categories
//!
//! The closed set of five provider categories. Every `match` on
//! [`ProviderCategory`] is exhaustive, so adding a category forces every
//! color, label and anonymization prefix to be declared alongside it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Category of a cloud offering.
///
/// | Tag           | Color     | Prefix | Label                   |
/// |---------------|-----------|--------|-------------------------|
/// | `hyperscaler` | `#ef4444` | H      | Hyperscaler             |
/// | `sovereign`   | `#3b82f6` | S      | Sovereign clouds        |
/// | `eu-regional` | `#10b981` | E      | EU / German providers   |
/// | `private`     | `#8b5cf6` | P      | Private cloud           |
/// | `hybrid`      | `#f59e0b` | Y      | Hybrid solutions        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCategory {
    /// Global public clouds (AWS, Azure, Google Cloud, Oracle).
    Hyperscaler,
    /// Sovereign offerings operated by or with hyperscalers.
    Sovereign,
    /// European and German regional providers.
    #[serde(alias = "eu")]
    EuRegional,
    /// Self-operated private cloud stacks.
    Private,
    /// Hyperscaler services delivered on-premises.
    Hybrid,
}

/// Number of provider categories.
pub const CATEGORY_COUNT: usize = 5;

impl ProviderCategory {
    /// All categories in display order.
    pub fn all() -> &'static [ProviderCategory] {
        &[
            Self::Hyperscaler,
            Self::Sovereign,
            Self::EuRegional,
            Self::Private,
            Self::Hybrid,
        ]
    }

    /// The kebab-case tag, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hyperscaler => "hyperscaler",
            Self::Sovereign => "sovereign",
            Self::EuRegional => "eu-regional",
            Self::Private => "private",
            Self::Hybrid => "hybrid",
        }
    }

    /// Display color shared by every provider in the category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Hyperscaler => "#ef4444",
            Self::Sovereign => "#3b82f6",
            Self::EuRegional => "#10b981",
            Self::Private => "#8b5cf6",
            Self::Hybrid => "#f59e0b",
        }
    }

    /// Plural label used by the legend and the filter controls.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hyperscaler => "Hyperscaler",
            Self::Sovereign => "Sovereign clouds",
            Self::EuRegional => "EU / German providers",
            Self::Private => "Private cloud",
            Self::Hybrid => "Hybrid solutions",
        }
    }

    /// Short label used by category badges in score tables.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Self::Hyperscaler => "Hyperscaler",
            Self::Sovereign => "Sovereign",
            Self::EuRegional => "EU/Germany",
            Self::Private => "Private Cloud",
            Self::Hybrid => "Hybrid",
        }
    }

    /// Prefix for anonymized provider codes in public mode.
    pub fn anonymous_prefix(&self) -> char {
        match self {
            Self::Hyperscaler => 'H',
            Self::Sovereign => 'S',
            Self::EuRegional => 'E',
            Self::Private => 'P',
            Self::Hybrid => 'Y',
        }
    }
}

impl std::fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderCategory {
    type Err = ValidationError;

    /// Parse a category tag. The legacy tag `eu` is accepted for
    /// `eu-regional`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hyperscaler" => Ok(Self::Hyperscaler),
            "sovereign" => Ok(Self::Sovereign),
            "eu-regional" | "eu" => Ok(Self::EuRegional),
            "private" => Ok(Self::Private),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}
