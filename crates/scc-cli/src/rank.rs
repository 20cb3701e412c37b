//! # Rank Subcommand
//!
//! Prints the ranked providers for a slider position, with overrides from
//! the data directory applied and names shown per the access mode.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use scc_core::{anonymize, apply_overrides, base_providers, classify, rank_providers, RankedProvider};
use scc_core::scoring::strategy_text;

use crate::{CliContext, ViewArgs};

/// Arguments for the `scc rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Show at most this many providers (default: all).
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub rank: u32,
    pub id: String,
    pub name: String,
    pub category: String,
    pub control: u8,
    pub performance: u8,
    pub score: f64,
    pub seal: &'static str,
}

impl From<&RankedProvider> for RankRow {
    fn from(r: &RankedProvider) -> Self {
        Self {
            rank: r.rank,
            id: r.provider.id.to_string(),
            name: r.provider.name.clone(),
            category: r.provider.category.as_str().to_string(),
            control: r.provider.control,
            performance: r.provider.performance,
            score: r.score,
            seal: classify(i64::from(r.provider.control)).short_label,
        }
    }
}

/// Compute the rows shown by `scc rank`.
pub fn rank_rows(args: &RankArgs, ctx: &CliContext) -> Vec<RankRow> {
    let overrides = ctx.local_storage().load_custom_scores();
    let mut providers = apply_overrides(&base_providers(), &overrides);
    if ctx.display_mode().anonymized() {
        providers = anonymize(&providers);
    }
    let ranked = rank_providers(&providers, args.view.slider(&ctx.config), &args.view.filter());
    let limit = args.limit.unwrap_or(ranked.len());
    ranked.iter().take(limit).map(RankRow::from).collect()
}

/// Plain-text table.
pub fn format_table(rows: &[RankRow]) -> String {
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0).max(8);
    let mut out = format!(
        "{:>4}  {:<width$}  {:<12}  {:>7}  {:>11}  {:>6}  SEAL\n",
        "RANK", "PROVIDER", "CATEGORY", "CONTROL", "PERFORMANCE", "SCORE"
    );
    for r in rows {
        out.push_str(&format!(
            "{:>4}  {:<width$}  {:<12}  {:>7}  {:>11}  {:>6.1}  {}\n",
            r.rank, r.name, r.category, r.control, r.performance, r.score, r.seal
        ));
    }
    out
}

/// Execute the rank subcommand.
pub fn run_rank(args: &RankArgs, ctx: &CliContext) -> Result<u8> {
    let rows = rank_rows(args, ctx);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows).context("failed to serialize ranking")?);
        return Ok(0);
    }
    println!("Strategy: {}", strategy_text(args.view.slider(&ctx.config)));
    if rows.is_empty() {
        println!("No providers match the selected categories.");
    } else {
        print!("{}", format_table(&rows));
    }
    Ok(0)
}
