//! Punctuation commands: verbalize, reverse and strip.

use anyhow::Result;
use punctuation::PunctuationModel;

/// Verbalize punctuation symbols into words.
pub fn verbalize(input: &str) -> Result<()> {
    let model = PunctuationModel::default();
    println!("{}", model.to_spoken(input));
    Ok(())
}

/// Turn verbalized punctuation back into symbols.
pub fn symbols(input: &str) -> Result<()> {
    let model = PunctuationModel::default();
    println!("{}", model.to_symbols(input));
    Ok(())
}

/// Remove verbalized punctuation words.
pub fn strip(input: &str) -> Result<()> {
    let model = PunctuationModel::default();
    println!("{}", model.strip(input));
    Ok(())
}
