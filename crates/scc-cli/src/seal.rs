//! # Seal Subcommand
//!
//! Classifies a control score into its SEAL level.

use anyhow::Result;
use clap::Args;

use scc_core::{classify, SealLevel};

/// Arguments for the `scc seal` subcommand.
#[derive(Args, Debug)]
pub struct SealArgs {
    /// Control score. Values outside 0..=100 saturate to the nearest level.
    #[arg(allow_negative_numbers = true)]
    pub score: i64,
}

/// One-line description of a level.
pub fn describe(seal: &SealLevel) -> String {
    format!("{} {} (control >= {})", seal.short_label, seal.label, seal.min_control)
}

/// Execute the seal subcommand.
pub fn run_seal(args: &SealArgs) -> Result<u8> {
    println!("{}", describe(classify(args.score)));
    Ok(0)
}
