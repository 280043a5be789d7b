//! Command-line interface for the `kwp` keyword phrase picker.

use std::process::ExitCode;

use clap::Parser;
use kwp::cli::{CommandContext, args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
