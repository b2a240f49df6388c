//! to-html command - Text form to Document form

use anyhow::Result;
use dialogue_core::text_to_document;
use std::path::Path;

use super::read_input;
use crate::cli::Cli;
use crate::output::colors::{header, warning};
use crate::output::print_result;

pub fn run(cli: &Cli, input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    let html = text_to_document(&text);
    print_result(cli, "html", &html, |doc| {
        if doc.is_empty() {
            warning("No dialogue turns found")
        } else {
            let count = doc.lines().count();
            format!("{}\n\n{}", header(&format!("Document ({} turns)", count)), doc)
        }
    })?;
    Ok(())
}
