//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod scan;
pub mod text;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Scan(cmd) => scan::run(ctx, &cmd),
        Commands::Text(cmd) => text::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
        Commands::Config => config::run(ctx),
    }
}
