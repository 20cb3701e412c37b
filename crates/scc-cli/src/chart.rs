//! # Chart Subcommand
//!
//! Renders the compass page for a slider position and category selection to
//! a standalone HTML file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use scc_app::CompassSession;

use crate::{write_output, CliContext, ViewArgs};

/// Arguments for the `scc chart` subcommand.
#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output HTML file.
    #[arg(long, value_name = "FILE")]
    pub out: PathBuf,
}

/// Build the compass page for the given view.
pub fn build_page(view: &ViewArgs, ctx: &CliContext) -> Result<CompassSession> {
    let mut config = ctx.config.clone();
    config.initial_slider = view.slider(&ctx.config);
    let mut session = CompassSession::new(ctx.local_storage(), ctx.display_mode(), &config);
    if !view.categories.is_empty() {
        session.set_filter(view.filter());
    }
    Ok(session)
}

/// Execute the chart subcommand.
pub fn run_chart(args: &ChartArgs, ctx: &CliContext) -> Result<u8> {
    let session = build_page(&args.view, ctx)?;
    write_output(&args.out, &session.html())?;
    report(&args.out, session.ranked().len());
    Ok(0)
}

fn report(out: &Path, shown: usize) {
    tracing::info!(out = %out.display(), providers = shown, "compass page written");
    println!("OK: wrote {} ({shown} providers)", out.display());
}

#[cfg(test)]
mod tests {
    use scc_core::ProviderCategory;

    use super::*;

    #[test]
    fn writes_compass_page() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CliContext::with_data_dir(dir.path().join("data"));
        let out = dir.path().join("out").join("compass.html");
        let args = ChartArgs {
            view: ViewArgs {
                slider: Some(20),
                categories: vec![ProviderCategory::Private],
            },
            out: out.clone(),
        };
        assert_eq!(run_chart(&args, &ctx).unwrap(), 0);

        let html = std::fs::read_to_string(out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Control-oriented (80:20)"));
        assert_eq!(html.matches("class=\"provider-point").count(), 2);
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let ctx = CliContext::with_data_dir(dir.path().join("data"));
        let args = ChartArgs {
            view: ViewArgs::default(),
            out: blocker.join("compass.html"),
        };
        assert!(run_chart(&args, &ctx).is_err());
    }
}
