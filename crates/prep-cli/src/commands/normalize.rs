//! Normalize command: run one text through the pipeline (dry run).

use anyhow::Result;
use lm_formula::PreparationFormula;
use prep_core::Lang;

/// Run the normalize command.
pub fn run(input: &str, lang: Lang, expand_numbers: bool) -> Result<()> {
    let formula = PreparationFormula::new(lang).with_expand_numbers(expand_numbers);
    let result = formula.prepare_text(input);

    println!("Input:      {input}");
    println!("Normalized: {result}");
    println!("Language:   {lang}");

    Ok(())
}
