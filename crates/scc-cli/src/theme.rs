//! # Theme Subcommand

use anyhow::Result;
use clap::{Args, Subcommand};

use scc_app::ThemeManager;

use crate::CliContext;

/// Arguments for the `scc theme` subcommand.
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

/// Theme subcommands. Defaults to `show`.
#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the stored theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Set the theme by name (`light` or `dark`).
    Set { name: String },
}

/// Execute the theme subcommand.
pub fn run_theme(args: &ThemeArgs, ctx: &CliContext) -> Result<u8> {
    let mut themes = ThemeManager::load(ctx.local_storage());
    match args.command.as_ref().unwrap_or(&ThemeCommand::Show) {
        ThemeCommand::Show => println!("{}", themes.current()),
        ThemeCommand::Toggle => println!("{}", themes.toggle()),
        ThemeCommand::Set { name } => match themes.set(name) {
            Some(theme) => println!("{theme}"),
            None => return Ok(2),
        },
    }
    Ok(0)
}
