//! # Score Overrides
//!
//! User-supplied replacements for a provider's control and performance
//! scores, keyed by provider id. Overrides replace the aggregate values
//! before scoring; SOV sub-scores are never touched, so the sovereignty
//! detail panel may disagree with an overridden control score.
//!
//! Every value entering an override passes through [`sanitize_score`]:
//! integer-prefix parsing for strings, truncation toward zero for
//! fractional numbers, clamping to 0..=100, and 0 for anything else.
//! Deserializing stored JSON applies the same rules, so a hand-edited or
//! corrupted blob can never place an out-of-range score into the ranking.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::error::SccError;
use crate::provider::Provider;

/// Override for one provider. Absent fields keep the dataset value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOverride {
    /// Replacement control score.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_score"
    )]
    pub control: Option<u8>,
    /// Replacement performance score.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_score"
    )]
    pub performance: Option<u8>,
}

impl ScoreOverride {
    /// Override both scores.
    pub fn both(control: u8, performance: u8) -> Self {
        Self {
            control: Some(control.min(100)),
            performance: Some(performance.min(100)),
        }
    }

    /// Whether neither field is set.
    pub fn is_empty(&self) -> bool {
        self.control.is_none() && self.performance.is_none()
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => None,
        other => Some(sanitize_score(&other)),
    })
}

/// Clamp an arbitrary JSON value into a score.
///
/// - numbers truncate toward zero, then clamp to 0..=100;
/// - strings go through [`sanitize_score_str`];
/// - everything else yields 0.
pub fn sanitize_score(value: &serde_json::Value) -> u8 {
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                clamp_score(i)
            } else if let Some(u) = n.as_u64() {
                clamp_score(i64::try_from(u).unwrap_or(i64::MAX))
            } else {
                n.as_f64().map(clamp_float).unwrap_or(0)
            }
        }
        serde_json::Value::String(s) => sanitize_score_str(s),
        _ => 0,
    }
}

/// Parse the leading integer of a string and clamp it.
///
/// Leading whitespace and one sign character are accepted; parsing stops at
/// the first non-digit. `"42abc"` → 42, `"3.9"` → 3, `"-5"` → 0,
/// `""` / `"abc"` → 0.
pub fn sanitize_score_str(input: &str) -> u8 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    if negative {
        return 0;
    }
    let significant = digits[..end].trim_start_matches('0');
    if significant.len() > 3 {
        return 100;
    }
    clamp_score(significant.parse().unwrap_or(0))
}

fn clamp_score(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

fn clamp_float(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.trunc().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// OverrideMap
// ---------------------------------------------------------------------------

/// All overrides, keyed by provider id (or, for legacy entries, by the
/// name-derived key; see [`apply_overrides`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideMap(BTreeMap<String, ScoreOverride>);

impl OverrideMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored JSON blob.
    ///
    /// Entries whose value is not an object are skipped; field values are
    /// sanitized.
    ///
    /// # Errors
    ///
    /// Returns [`SccError::Serialization`] when the blob is not JSON or its
    /// top level is not an object.
    pub fn from_json(json: &str) -> Result<Self, SccError> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .filter(|(_, v)| v.is_object())
            .map(|(k, v)| serde_json::from_value::<ScoreOverride>(v).map(|o| (k, o)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self(entries))
    }

    /// Serialize for storage.
    ///
    /// # Errors
    ///
    /// Returns [`SccError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, SccError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Override for a key.
    pub fn get(&self, key: &str) -> Option<&ScoreOverride> {
        self.0.get(key)
    }

    /// Whether a key has an override.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Replace the override for a key.
    pub fn insert(&mut self, key: impl Into<String>, value: ScoreOverride) {
        self.0.insert(key.into(), value);
    }

    /// Merge fields into the override for a key, keeping fields not given.
    pub fn merge(&mut self, key: impl Into<String>, control: Option<u8>, performance: Option<u8>) {
        let entry = self.0.entry(key.into()).or_default();
        if let Some(c) = control {
            entry.control = Some(c.min(100));
        }
        if let Some(p) = performance {
            entry.performance = Some(p.min(100));
        }
    }

    /// Drop the override for a key. Returns whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key).is_some()
    }

    /// Drop every override.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether no override exists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of overridden keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoreOverride)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Override applying to a provider: by id, else by name-derived key.
    pub fn for_provider(&self, provider: &Provider) -> Option<&ScoreOverride> {
        self.get(provider.id.as_str())
            .or_else(|| self.get(&provider.name_key()))
    }
}

/// Effective value of a score: the override when present, else the dataset
/// value.
pub fn effective(base: u8, replacement: Option<u8>) -> u8 {
    replacement.unwrap_or(base)
}

/// Copy providers with overrides applied to control and performance.
///
/// Lookup is by id first, then by the name-derived key. No writer in this
/// workspace produces name-keyed entries; the fallback keeps older stored
/// blobs readable.
pub fn apply_overrides(providers: &[Provider], overrides: &OverrideMap) -> Vec<Provider> {
    providers
        .iter()
        .map(|p| match overrides.for_provider(p) {
            Some(o) => Provider {
                control: effective(p.control, o.control),
                performance: effective(p.performance, o.performance),
                ..p.clone()
            },
            None => p.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sanitize_numbers() {
        assert_eq!(sanitize_score(&json!(150)), 100);
        assert_eq!(sanitize_score(&json!(-5)), 0);
        assert_eq!(sanitize_score(&json!(42)), 42);
        assert_eq!(sanitize_score(&json!(3.9)), 3);
        assert_eq!(sanitize_score(&json!(-0.5)), 0);
        assert_eq!(sanitize_score(&json!(1e300)), 100);
        assert_eq!(sanitize_score(&json!(u64::MAX)), 100);
    }

    #[test]
    fn sanitize_non_numeric_json() {
        assert_eq!(sanitize_score(&json!(true)), 0);
        assert_eq!(sanitize_score(&json!(null)), 0);
        assert_eq!(sanitize_score(&json!([1])), 0);
        assert_eq!(sanitize_score(&json!({"a": 1})), 0);
    }

    #[test]
    fn sanitize_strings_take_integer_prefix() {
        assert_eq!(sanitize_score_str("42abc"), 42);
        assert_eq!(sanitize_score_str("3.9"), 3);
        assert_eq!(sanitize_score_str(""), 0);
        assert_eq!(sanitize_score_str("abc"), 0);
        assert_eq!(sanitize_score_str("  77"), 77);
        assert_eq!(sanitize_score_str("+12"), 12);
        assert_eq!(sanitize_score_str("-5"), 0);
        assert_eq!(sanitize_score_str("150"), 100);
        assert_eq!(sanitize_score_str("0000099"), 99);
        assert_eq!(sanitize_score_str("99999999999999999999999"), 100);
        assert_eq!(sanitize_score_str("-"), 0);
    }

    #[test]
    fn stored_blob_is_sanitized_on_load() {
        let map = OverrideMap::from_json(
            r#"{"aws":{"control":"250","performance":-3},"stackit":{"control":12.7},"junk":5}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("aws"), Some(&ScoreOverride::both(100, 0)));
        assert_eq!(
            map.get("stackit"),
            Some(&ScoreOverride {
                control: Some(12),
                performance: None
            })
        );
    }

    #[test]
    fn malformed_blob_is_an_error() {
        assert!(OverrideMap::from_json("{not json").is_err());
        assert!(OverrideMap::from_json("[1,2]").is_err());
    }

    #[test]
    fn serialization_omits_absent_fields() {
        let mut map = OverrideMap::new();
        map.merge("aws", Some(60), None);
        assert_eq!(map.to_json().unwrap(), r#"{"aws":{"control":60}}"#);
    }

    #[test]
    fn merge_keeps_existing_fields() {
        let mut map = OverrideMap::new();
        map.merge("aws", Some(60), None);
        map.merge("aws", None, Some(70));
        assert_eq!(map.get("aws"), Some(&ScoreOverride::both(60, 70)));
        assert!(map.remove("aws"));
        assert!(!map.remove("aws"));
        assert!(map.is_empty());
    }

    #[test]
    fn apply_by_id_then_name_key() {
        let providers = crate::dataset::base_providers();
        let mut map = OverrideMap::new();
        map.insert("aws", ScoreOverride::both(99, 1));
        map.insert(
            "open-telekom-cloud",
            ScoreOverride {
                control: None,
                performance: Some(10),
            },
        );
        map.insert(
            "stackit",
            ScoreOverride {
                control: Some(5),
                performance: None,
            },
        );
        let applied = apply_overrides(&providers, &map);
        let get = |id: &str| applied.iter().find(|p| p.id.as_str() == id).unwrap();
        assert_eq!((get("aws").control, get("aws").performance), (99, 1));
        assert_eq!(get("open-telekom-cloud").control, 55);
        assert_eq!(get("open-telekom-cloud").performance, 10);
        assert_eq!(get("stackit").control, 5);
        assert_eq!(get("ionos-cloud").control, 65);
        // Sub-scores are untouched.
        assert_eq!(get("aws").sovereignty, providers[0].sovereignty);
    }

    #[test]
    fn name_key_fallback_applies_when_id_absent() {
        let providers = crate::dataset::base_providers();
        let mut map = OverrideMap::new();
        map.insert("microsoft-delos-cloud", ScoreOverride::both(1, 2));
        map.insert("google-dedicated-cloud", ScoreOverride::both(3, 4));
        let mut renamed = providers.clone();
        for p in &mut renamed {
            if p.id.as_str() == "azure-stack-hci" {
                p.name = "Google Dedicated Cloud".into();
            }
        }
        let applied = apply_overrides(&renamed, &map);
        let hci = applied.iter().find(|p| p.id.as_str() == "azure-stack-hci").unwrap();
        assert_eq!((hci.control, hci.performance), (3, 4));
    }
}
