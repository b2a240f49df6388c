//! dialogue-cli - CLI for converting dialogue transcripts

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    colored::control::set_override(cli.use_color());

    match &cli.command {
        Command::ToText { input } => commands::to_text::run(&cli, input.as_deref()),
        Command::ToHtml { input } => commands::to_html::run(&cli, input.as_deref()),
        Command::ToMessages {
            input,
            assistant_name,
        } => commands::to_messages::run(&cli, input.as_deref(), assistant_name.as_deref()),
        Command::FromMessages { input } => commands::from_messages::run(&cli, input.as_deref()),
        Command::Sanitize { input } => commands::sanitize::run(&cli, input.as_deref()),
    }
}

/// Logs go to stderr so stdout stays pipeable. `RUST_LOG` overrides `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
