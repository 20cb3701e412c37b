//! # Criteria Subcommand
//!
//! Prints the control, performance and detail tables with effective scores,
//! or writes the criteria page as HTML.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use scc_app::CriteriaSession;
use scc_core::criteria::SovCriterion;
use scc_render::criteria::{ScoreRow, ScoreTable};

use crate::{write_output, CliContext};

/// Arguments for the `scc criteria` subcommand.
#[derive(Args, Debug)]
pub struct CriteriaArgs {
    /// Write the criteria page to this HTML file instead of printing tables.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

fn table_title(table: ScoreTable) -> &'static str {
    match table {
        ScoreTable::Control => "Control scores",
        ScoreTable::Performance => "Performance scores",
        ScoreTable::Details => "Provider details",
    }
}

/// Text rendering of one table. Customized rows are marked with `*`.
pub fn format_table(table: ScoreTable, rows: &[ScoreRow<'_>]) -> String {
    let mut out = format!("{}\n", table_title(table));
    for (i, row) in rows.iter().enumerate() {
        let mark = if row.custom { "*" } else { " " };
        let line = match table {
            ScoreTable::Control => format!("{:>3}. {:<32} {:>3}{mark}\n", i + 1, row.provider.name, row.control),
            ScoreTable::Performance => {
                format!("{:>3}. {:<32} {:>3}{mark}\n", i + 1, row.provider.name, row.performance)
            }
            ScoreTable::Details => format!(
                "     {:<32} {:<12} control {:>3}  performance {:>3}{mark}\n",
                row.provider.name,
                row.provider.category.as_str(),
                row.control,
                row.performance
            ),
        };
        out.push_str(&line);
    }
    out
}

/// SOV criteria with weights, one per line.
pub fn format_criteria() -> String {
    SovCriterion::all()
        .iter()
        .map(|c| format!("{:<6} {:>3} %  {}\n", c.short_name(), c.weight_percent(), c.name()))
        .collect()
}

/// Execute the criteria subcommand.
pub fn run_criteria(args: &CriteriaArgs, ctx: &CliContext) -> Result<u8> {
    let session = CriteriaSession::new(ctx.local_storage());
    if let Some(out) = &args.out {
        write_output(out, &session.html())?;
        println!("OK: wrote {}", out.display());
        return Ok(0);
    }
    print!("{}", format_criteria());
    for table in [ScoreTable::Control, ScoreTable::Performance, ScoreTable::Details] {
        println!();
        print!("{}", format_table(table, &session.table_rows(table)));
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_table_lists_every_provider() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CliContext::with_data_dir(dir.path());
        let session = CriteriaSession::new(ctx.local_storage());
        let text = format_table(ScoreTable::Control, &session.table_rows(ScoreTable::Control));
        assert_eq!(text.lines().count(), 15);
        assert!(text.lines().nth(1).unwrap().contains("OpenStack Private Cloud"));
    }

    #[test]
    fn criteria_lines() {
        assert_eq!(format_criteria().lines().count(), 8);
        assert!(format_criteria().starts_with("SOV-1"));
    }

    #[test]
    fn writes_page() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CliContext::with_data_dir(dir.path());
        let out = dir.path().join("criteria.html");
        let args = CriteriaArgs { out: Some(out.clone()) };
        assert_eq!(run_criteria(&args, &ctx).unwrap(), 0);
        assert!(std::fs::read_to_string(out).unwrap().contains("Compass Criteria"));
    }
}
