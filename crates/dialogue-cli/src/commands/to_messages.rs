//! to-messages command - Document form to role-tagged messages

use anyhow::{Context, Result};
use dialogue_core::document_to_messages;
use std::path::Path;

use super::read_input;
use crate::cli::{Cli, OutputFormat};
use crate::output::colors::{header, warning};
use crate::output::{human, json, minimal};

pub fn run(cli: &Cli, input: Option<&Path>, assistant_name: Option<&str>) -> Result<()> {
    let html = read_input(input)?;
    let messages = document_to_messages(&html, assistant_name.unwrap_or_default())
        .context("failed to convert document to messages (is --assistant-name set?)")?;

    match cli.effective_format() {
        OutputFormat::Human => {
            if messages.is_empty() {
                println!("{}", warning("No messages found"));
            } else {
                println!(
                    "{}",
                    header(&format!("Messages ({})", messages.len()))
                );
                println!();
                for message in &messages {
                    println!("{}", human::format_message(message));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_messages(&messages, cli.pretty)?);
        }
        OutputFormat::Minimal => {
            println!("{}", minimal::format_messages(&messages)?);
        }
    }

    Ok(())
}
