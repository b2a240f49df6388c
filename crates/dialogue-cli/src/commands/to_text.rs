//! to-text command - Document form to Text form

use anyhow::Result;
use dialogue_core::document_to_text;
use std::path::Path;

use super::read_input;
use crate::cli::Cli;
use crate::output::{human_text, print_result};

pub fn run(cli: &Cli, input: Option<&Path>) -> Result<()> {
    let html = read_input(input)?;
    let text = document_to_text(&html);
    print_result(cli, "text", &text, human_text)?;
    Ok(())
}
