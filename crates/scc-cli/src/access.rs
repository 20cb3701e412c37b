//! # Access Subcommand
//!
//! Session flags in `session_storage.json`: unlock with the password,
//! switch to public mode, log out, or show the current mode.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::CliContext;

/// Arguments for the `scc access` subcommand.
#[derive(Args, Debug)]
pub struct AccessArgs {
    #[command(subcommand)]
    pub command: AccessCommand,
}

/// Access subcommands.
#[derive(Subcommand, Debug)]
pub enum AccessCommand {
    /// Unlock full mode with the access password.
    Unlock {
        #[arg(long)]
        password: String,
    },
    /// Continue without the password; names are anonymized.
    Public,
    /// Clear the session flags.
    Logout,
    /// Print the current mode.
    Status,
}

/// Execute the access subcommand.
pub fn run_access(args: &AccessArgs, ctx: &CliContext) -> Result<u8> {
    let gate = ctx.access_gate();
    match &args.command {
        AccessCommand::Unlock { password } => {
            if !gate.authenticate(password) {
                eprintln!("Incorrect password.");
                return Ok(1);
            }
            println!("OK: full access");
        }
        AccessCommand::Public => {
            gate.enable_public_mode();
            println!("OK: public mode");
        }
        AccessCommand::Logout => {
            gate.logout();
            println!("OK: logged out");
        }
        AccessCommand::Status => println!("{}", gate.check_session()),
    }
    Ok(0)
}
