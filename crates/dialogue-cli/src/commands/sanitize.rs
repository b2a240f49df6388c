//! sanitize command - strip markdown from model output

use anyhow::Result;
use std::path::Path;

use super::read_input;
use crate::cli::Cli;
use crate::output::{human, print_result};

pub fn run(cli: &Cli, input: Option<&Path>) -> Result<()> {
    let raw = read_input(input)?;
    let text = dialogue_core::sanitize(&raw);
    print_result(cli, "text", &text, human::format_sanitized)?;
    Ok(())
}
