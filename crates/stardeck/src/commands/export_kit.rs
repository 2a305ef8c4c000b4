use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::deck::Deck;
use crate::export;

pub fn run(file: Option<&Path>, output: &Path) -> Result<()> {
    let deck = match file {
        Some(path) => Deck::load(path)?,
        None => Deck::builtin(),
    };

    let bytes = export::build_kit_archive(&deck)?;
    std::fs::write(output, &bytes)?;

    println!(
        "{} {} ({} slides, {} bytes)",
        "Investor kit written to".green(),
        output.display(),
        deck.len(),
        bytes.len()
    );
    Ok(())
}
