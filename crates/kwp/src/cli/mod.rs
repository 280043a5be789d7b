//! CLI support for the `kwp` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

pub use context::CommandContext;
