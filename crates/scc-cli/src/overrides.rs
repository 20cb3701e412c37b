//! # Override Subcommand
//!
//! Manages the persisted score overrides. Values are sanitized the same way
//! the edit modal sanitizes them: clamped into 0..=100, integer prefix of
//! free text.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use scc_core::overrides::{effective, sanitize_score_str};
use scc_core::{base_providers, provider_by_id, OverrideMap};
use scc_store::StorageManager;

use crate::CliContext;

/// Arguments for the `scc override` subcommand.
#[derive(Args, Debug)]
pub struct OverrideArgs {
    #[command(subcommand)]
    pub command: OverrideCommand,
}

/// Override subcommands.
#[derive(Subcommand, Debug)]
pub enum OverrideCommand {
    /// Set control and/or performance for a provider.
    Set {
        /// Provider id (see `scc rank --json`).
        id: String,
        /// Control score.
        #[arg(long, allow_hyphen_values = true)]
        control: Option<String>,
        /// Performance score.
        #[arg(long, allow_hyphen_values = true)]
        performance: Option<String>,
    },

    /// List stored overrides with dataset and effective values.
    List,

    /// Remove the override of one provider.
    Clear {
        /// Provider id.
        id: String,
    },

    /// Remove every override.
    Reset,
}

/// Execute the override subcommand.
pub fn run_override(args: &OverrideArgs, ctx: &CliContext) -> Result<u8> {
    let storage = ctx.local_storage();
    match &args.command {
        OverrideCommand::Set {
            id,
            control,
            performance,
        } => cmd_set(&storage, id, control.as_deref(), performance.as_deref()),
        OverrideCommand::List => {
            print!("{}", format_list(&storage.load_custom_scores()));
            Ok(0)
        }
        OverrideCommand::Clear { id } => cmd_clear(&storage, id),
        OverrideCommand::Reset => cmd_reset(&storage),
    }
}

fn persist(storage: &StorageManager, overrides: &OverrideMap) -> Result<()> {
    let saved = if overrides.is_empty() {
        storage.clear_custom_scores()
    } else {
        storage.save_custom_scores(overrides)
    };
    if !saved {
        bail!("failed to persist overrides");
    }
    Ok(())
}

fn cmd_set(storage: &StorageManager, id: &str, control: Option<&str>, performance: Option<&str>) -> Result<u8> {
    let Some(provider) = provider_by_id(id) else {
        bail!("unknown provider: {id}");
    };
    if control.is_none() && performance.is_none() {
        bail!("nothing to set: pass --control and/or --performance");
    }

    let control = control.map(sanitize_score_str);
    let performance = performance.map(sanitize_score_str);
    let mut overrides = storage.load_custom_scores();
    overrides.merge(id, control, performance);
    persist(storage, &overrides)?;

    let current = overrides.for_provider(&provider).copied().unwrap_or_default();
    println!(
        "OK: {} control={} performance={}",
        provider.name,
        effective(provider.control, current.control),
        effective(provider.performance, current.performance)
    );
    Ok(0)
}

fn cmd_clear(storage: &StorageManager, id: &str) -> Result<u8> {
    let mut overrides = storage.load_custom_scores();
    if !overrides.remove(id) {
        println!("No override stored for {id}.");
        return Ok(0);
    }
    persist(storage, &overrides)?;
    println!("OK: cleared override for {id}");
    Ok(0)
}

fn cmd_reset(storage: &StorageManager) -> Result<u8> {
    let count = storage.load_custom_scores().len();
    if !storage.clear_custom_scores() {
        bail!("failed to clear overrides");
    }
    println!("OK: removed {count} override(s)");
    Ok(0)
}

/// Text listing of the stored overrides.
pub fn format_list(overrides: &OverrideMap) -> String {
    if overrides.is_empty() {
        return "No overrides stored.\n".to_string();
    }
    let mut out = String::new();
    for provider in base_providers() {
        let Some(o) = overrides.for_provider(&provider) else {
            continue;
        };
        out.push_str(&format!(
            "{:<32} control {:>3} -> {:>3}  performance {:>3} -> {:>3}\n",
            provider.id.as_str(),
            provider.control,
            effective(provider.control, o.control),
            provider.performance,
            effective(provider.performance, o.performance)
        ));
    }
    let orphaned = overrides
        .iter()
        .filter(|(key, _)| provider_by_id(key).is_none())
        .count();
    if orphaned > 0 {
        out.push_str(&format!("({orphaned} entries not keyed by a provider id)\n"));
    }
    out
}
