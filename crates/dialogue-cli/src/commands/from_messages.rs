//! from-messages command - Messages JSON to Text form

use anyhow::{Context, Result};
use dialogue_core::messages_json_to_text;
use std::path::Path;

use super::read_input;
use crate::cli::Cli;
use crate::output::{human_text, print_result};

pub fn run(cli: &Cli, input: Option<&Path>) -> Result<()> {
    let raw = read_input(input)?;
    let text = messages_json_to_text(&raw).context("input is not valid JSON")?;
    print_result(cli, "text", &text, human_text)?;
    Ok(())
}
