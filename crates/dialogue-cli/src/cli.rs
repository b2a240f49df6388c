//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Convert dialogue transcripts between HTML, plain text and message lists
#[derive(Parser, Debug)]
#[command(name = "dialogue")]
#[command(version)]
#[command(about = "Convert dialogue transcripts between HTML, plain text and message lists")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (auto-detects based on TTY if not specified)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON with indentation
    #[arg(long, short = 'p', global = true)]
    pub pretty: bool,

    /// Force color output
    #[arg(long, global = true, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Get the effective output format
    pub fn effective_format(&self) -> OutputFormat {
        if let Some(f) = self.format {
            return f;
        }
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Human
        } else {
            OutputFormat::Minimal
        }
    }

    /// Check if colors should be used
    pub fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        atty::is(atty::Stream::Stdout)
    }
}

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored turn listing
    Human,
    /// JSON object, or the message array
    Json,
    /// Raw conversion result
    Minimal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an HTML dialogue document to plain text
    ToText {
        /// Input file ("-" or omitted for stdin)
        input: Option<PathBuf>,
    },

    /// Convert plain text turns to an HTML dialogue document
    ToHtml {
        /// Input file ("-" or omitted for stdin)
        input: Option<PathBuf>,
    },

    /// Convert an HTML dialogue document to role-tagged messages
    ToMessages {
        /// Input file ("-" or omitted for stdin)
        input: Option<PathBuf>,

        /// Speaker name that maps to the assistant role
        #[arg(long, short = 'a', env = "DIALOGUE_ASSISTANT_NAME")]
        assistant_name: Option<String>,
    },

    /// Render a JSON message array as plain text turns
    FromMessages {
        /// Input file ("-" or omitted for stdin)
        input: Option<PathBuf>,
    },

    /// Strip markdown from model output
    Sanitize {
        /// Input file ("-" or omitted for stdin)
        input: Option<PathBuf>,
    },
}
