use std::path::Path;

use anyhow::Result;

use crate::deck::Deck;

/// Print the catalog in the same JSON form the investor kit embeds.
pub fn run(file: Option<&Path>) -> Result<()> {
    let deck = match file {
        Some(path) => Deck::load(path)?,
        None => Deck::builtin(),
    };
    println!("{}", serde_json::to_string_pretty(&deck)?);
    Ok(())
}
