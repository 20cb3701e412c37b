//! # Providers
//!
//! The [`Provider`] record and its validated [`ProviderId`].
//!
//! A provider's `control` score is never stored independently of its
//! sub-scores in the dataset: [`Provider::new`] derives it once through
//! [`compute_control`]. Overrides later replace the aggregate (see
//! [`crate::overrides`]) without touching the sub-scores.

use serde::{Deserialize, Serialize};

use crate::category::ProviderCategory;
use crate::criteria::{compute_control, SovereigntyScores};
use crate::error::ValidationError;

/// Stable, lowercase-hyphenated provider identifier, e.g. `open-telekom-cloud`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);

impl ProviderId {
    /// Create a provider identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidProviderId`] unless the value is
    /// non-empty, consists of `a-z`, `0-9` and `-`, and has no leading,
    /// trailing or doubled hyphen.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let well_formed = !s.is_empty()
            && s
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
            && !s.starts_with('-')
            && !s.ends_with('-')
            && !s.contains("--");
        if !well_formed {
            return Err(ValidationError::InvalidProviderId(s));
        }
        Ok(Self(s))
    }

    /// Wrap a compile-time identifier from the built-in dataset. The dataset
    /// tests check every such id against [`ProviderId::new`].
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_string())
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProviderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderId> for String {
    fn from(id: ProviderId) -> Self {
        id.0
    }
}

/// A cloud offering with its scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable identifier.
    pub id: ProviderId,
    /// Display name. Replaced by an anonymized code in public mode.
    pub name: String,
    /// Category tag.
    pub category: ProviderCategory,
    /// Performance score, 0..=100.
    pub performance: u8,
    /// Control score, 0..=100. Derived from `sovereignty` unless overridden.
    pub control: u8,
    /// SOV sub-scores.
    pub sovereignty: SovereigntyScores,
    /// One-sentence description.
    pub description: String,
    /// Declutter slot for providers sharing identical coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_index: Option<u8>,
}

impl Provider {
    /// Build a provider, deriving `control` from the sub-scores.
    pub fn new(
        id: ProviderId,
        name: impl Into<String>,
        category: ProviderCategory,
        performance: u8,
        sovereignty: SovereigntyScores,
        description: impl Into<String>,
    ) -> Self {
        let control = compute_control(&sovereignty);
        Self {
            id,
            name: name.into(),
            category,
            performance: performance.min(100),
            control,
            sovereignty,
            description: description.into(),
            group_index: None,
        }
    }

    /// Assign a declutter group slot.
    pub fn with_group_index(mut self, index: u8) -> Self {
        self.group_index = Some(index);
        self
    }

    /// Display color, taken from the category.
    pub fn color(&self) -> &'static str {
        self.category.color()
    }

    /// Fallback override key derived from the display name: lowercase, with
    /// every whitespace run replaced by a single hyphen. Leading and
    /// trailing runs become hyphens too.
    pub fn name_key(&self) -> String {
        let mut key = String::with_capacity(self.name.len());
        let mut in_run = false;
        for ch in self.name.to_lowercase().chars() {
            if ch.is_whitespace() {
                if !in_run {
                    key.push('-');
                }
                in_run = true;
            } else {
                key.push(ch);
                in_run = false;
            }
        }
        key
    }
}
