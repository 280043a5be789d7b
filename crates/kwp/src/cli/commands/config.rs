//! Implementation of `kwp config`.

use std::process::ExitCode;

use kwp_config::discover_config_files;
use kwp_highlight::{Highlighter, dim, rule, subheader};

use crate::cli::context::CommandContext;

/// Shows the config files in effect and the merged settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let files = discover_config_files(&ctx.cwd);

    println!("{}", subheader("Config files (highest precedence first):"));
    if files.is_empty() {
        println!("  {}", dim("(none, using defaults)"));
    } else {
        for path in &files {
            println!("  {}", path.display());
        }
    }
    println!();

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    print!(
        "{}",
        Highlighter::default().highlight_toml(&ctx.config.settings_to_toml())
    );
    println!("{}", rule(40));

    ExitCode::SUCCESS
}
