//! Info command: version and supported languages.

use prep_core::Lang;

/// Run the info command.
pub fn run() {
    println!("prep {}", env!("CARGO_PKG_VERSION"));
    println!("Supported languages:");
    for lang in Lang::known() {
        let speller = if number_speller::has_speller(lang) {
            "numeral speller"
        } else {
            "label only"
        };
        println!("  {:<10} (id {}) - {}", lang.to_string(), lang.code(), speller);
    }
}
