//! # scc-cli — Sovereign Cloud Compass CLI
//!
//! Provides the `scc` command-line interface over a local data directory
//! holding `local_storage.json` (overrides, theme) and
//! `session_storage.json` (access flags).
//!
//! ## Subcommands
//!
//! - `scc rank` — ranked providers for a slider position.
//! - `scc seal` — SEAL level of a control score.
//! - `scc chart` — render the compass page to an HTML file.
//! - `scc criteria` — score tables, or the criteria page as HTML.
//! - `scc override` — set, list, clear and reset score overrides.
//! - `scc theme` — show, toggle or set the stored theme.
//! - `scc access` — unlock, public mode, logout, status.
//!
//! ```bash
//! scc access unlock --password "$PASSWORD"
//! scc rank --slider 30 --category sovereign --category eu-regional
//! scc override set stackit --control 95
//! scc chart --slider 70 --out compass.html
//! ```

pub mod access;
pub mod chart;
pub mod criteria;
pub mod overrides;
pub mod rank;
pub mod seal;
pub mod theme;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use scc_app::{AccessGate, AccessMode, CompassConfig};
use scc_core::{CategoryFilter, ProviderCategory, SliderValue};
use scc_store::{FileStore, StorageManager, LOCAL_STORAGE_FILE, SESSION_STORAGE_FILE};

/// Resolved configuration shared by every subcommand.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Settings from the config file (or defaults).
    pub config: CompassConfig,
    /// Directory of the storage files. The `--data-dir` flag wins over the
    /// config file.
    pub data_dir: PathBuf,
}

impl CliContext {
    /// Load the optional config file and apply flag overrides.
    pub fn resolve(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let config = CompassConfig::load_optional(config_path).context("failed to load configuration")?;
        let data_dir = data_dir.map_or_else(|| config.data_dir.clone(), Path::to_path_buf);
        tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
        Ok(Self { config, data_dir })
    }

    /// Context over `data_dir` with default settings.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config: CompassConfig::default(),
            data_dir: data_dir.into(),
        }
    }

    fn open(&self, file: &str) -> StorageManager {
        StorageManager::new(Arc::new(FileStore::open_or_empty(self.data_dir.join(file))))
    }

    /// Persistent scope: overrides and theme. An unreadable file opens
    /// empty, so defaults apply.
    pub fn local_storage(&self) -> StorageManager {
        self.open(LOCAL_STORAGE_FILE)
    }

    /// Session scope: access flags.
    pub fn session_storage(&self) -> StorageManager {
        self.open(SESSION_STORAGE_FILE)
    }

    /// Access gate over the session scope with the configured digest.
    pub fn access_gate(&self) -> AccessGate {
        AccessGate::with_digest(self.session_storage(), &self.config.password_sha256)
    }

    /// Presentation mode for names. A locked session shows anonymized
    /// names, as public mode does.
    pub fn display_mode(&self) -> AccessMode {
        let mode = self.access_gate().check_session();
        if mode == AccessMode::Locked {
            tracing::warn!("session is locked; provider names are anonymized (see `scc access unlock`)");
        }
        mode
    }
}

/// Slider and category flags shared by `rank` and `chart`.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Weighting from 0 (pure control) to 100 (pure performance).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub slider: Option<u8>,

    /// Only include these categories. Repeatable; all when omitted.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<ProviderCategory>,
}

impl ViewArgs {
    /// Slider from the flag, else the configured initial position.
    pub fn slider(&self, config: &CompassConfig) -> SliderValue {
        self.slider
            .map_or(config.initial_slider, |v| SliderValue::clamped(i64::from(v)))
    }

    /// Category filter from the flags.
    pub fn filter(&self) -> CategoryFilter {
        if self.categories.is_empty() {
            CategoryFilter::all()
        } else {
            CategoryFilter::only(self.categories.iter().copied())
        }
    }
}

/// Write a generated file, creating parent directories.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write output: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_flag_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("compass.yaml");
        std::fs::write(&config, "data_dir: /from/config\n").unwrap();

        let ctx = CliContext::resolve(Some(&config), None).unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/from/config"));

        let ctx = CliContext::resolve(Some(&config), Some(dir.path())).unwrap();
        assert_eq!(ctx.data_dir, dir.path());
    }

    #[test]
    fn bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("compass.yaml");
        std::fs::write(&config, "initial_slider: [1, 2]\n").unwrap();
        assert!(CliContext::resolve(Some(&config), None).is_err());
    }

    #[test]
    fn view_args_defaults() {
        let args = ViewArgs::default();
        assert_eq!(args.slider(&CompassConfig::default()), SliderValue::BALANCED);
        assert_eq!(args.filter(), CategoryFilter::all());

        let args = ViewArgs {
            slider: Some(0),
            categories: vec![ProviderCategory::Private],
        };
        assert_eq!(args.slider(&CompassConfig::default()), SliderValue::CONTROL);
        assert!(!args.filter().is_enabled(ProviderCategory::Hyperscaler));
    }

    #[test]
    fn locked_session_displays_anonymized() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CliContext::with_data_dir(dir.path());
        assert_eq!(ctx.display_mode(), AccessMode::Locked);
    }

    #[test]
    fn write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a").join("b.html");
        write_output(&out, "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(out).unwrap(), "<html></html>");
    }
}
