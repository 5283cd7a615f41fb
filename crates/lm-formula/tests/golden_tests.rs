//! Golden tests for the preparation pipeline.
//!
//! These verify end-to-end output for a corpus of representative inputs in
//! each supported language.

use lm_formula::PreparationFormula;
use prep_core::Lang;

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    lang: Lang,
    expand: bool,
    description: &'static str,
}

const FR_GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "1er",
        expected: "premier",
        lang: Lang::French,
        expand: true,
        description: "Masculine first ordinal",
    },
    GoldenTestCase {
        input: "20ème",
        expected: "vingtième",
        lang: Lang::French,
        expand: true,
        description: "Regular ordinal",
    },
    GoldenTestCase {
        input: "18-age",
        expected: "dix huit age",
        lang: Lang::French,
        expand: true,
        description: "Hyphenated mixed token splits in expand mode",
    },
    GoldenTestCase {
        input: "le 25 mars 2015 2.5 XXème",
        expected: "le vingt cinq mars deux mille quinze deux point cinq vingtième",
        lang: Lang::French,
        expand: true,
        description: "Cardinals, years, decimals and Roman ordinals",
    },
    GoldenTestCase {
        input: "10h15 : pouët !!!! pouët",
        expected: "10h15 pouët pouët",
        lang: Lang::French,
        expand: false,
        description: "Noise words and stray colons vanish",
    },
    GoldenTestCase {
        input: "Prix : 25 $",
        expected: "prix vingt cinq dollars",
        lang: Lang::French,
        expand: true,
        description: "Currency symbol verbalized",
    },
];

const DE_GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "am 2. Dezember",
        expected: "am zweiten dezember",
        lang: Lang::German,
        expand: true,
        description: "Context-dependent ordinal inflection",
    },
    GoldenTestCase {
        input: "das 21. Jahrhundert",
        expected: "das ein und zwanzigste jahrhundert",
        lang: Lang::German,
        expand: true,
        description: "Compound ordinal after an article",
    },
    GoldenTestCase {
        input: "18-jähriger",
        expected: "achtzehn jähriger",
        lang: Lang::German,
        expand: true,
        description: "Mixed token splits and spells",
    },
    GoldenTestCase {
        input: "18-jähriger",
        expected: "18-jähriger",
        lang: Lang::German,
        expand: false,
        description: "Keep mode protects hyphenated compounds",
    },
    GoldenTestCase {
        input: "50'000 Franken",
        expected: "fünfzig tausend franken",
        lang: Lang::German,
        expand: true,
        description: "Thousands separator stripped before spelling",
    },
];

const EN_GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "1st",
        expected: "first",
        lang: Lang::English,
        expand: true,
        description: "First ordinal",
    },
    GoldenTestCase {
        input: "2.5",
        expected: "two point five",
        lang: Lang::English,
        expand: true,
        description: "Decimal number",
    },
    GoldenTestCase {
        input: "the 25 march 2015 2.5 XXth",
        expected: "the twenty five march two thousand and fifteen two point five twentieth",
        lang: Lang::English,
        expand: true,
        description: "Cardinals, years, decimals and Roman ordinals",
    },
    GoldenTestCase {
        input: "Mr. Smith owns 20% of it",
        expected: "mister smith owns twenty percent of it",
        lang: Lang::English,
        expand: true,
        description: "Abbreviation and percent sign",
    },
    GoldenTestCase {
        input: "18-year-old",
        expected: "18-year-old",
        lang: Lang::English,
        expand: false,
        description: "Keep mode protects hyphenated compounds",
    },
];

fn run(cases: &[GoldenTestCase]) {
    for (i, test) in cases.iter().enumerate() {
        let formula = PreparationFormula::new(test.lang).with_expand_numbers(test.expand);
        let result = formula.prepare_text(test.input);
        assert_eq!(
            result,
            test.expected,
            "\nGolden test #{} FAILED: {}\nInput:    '{}'\nExpected: '{}'\nGot:      '{}'",
            i + 1,
            test.description,
            test.input,
            test.expected,
            result
        );
    }
}

#[test]
fn test_french_golden_corpus() {
    run(FR_GOLDEN_TESTS);
}

#[test]
fn test_german_golden_corpus() {
    run(DE_GOLDEN_TESTS);
}

#[test]
fn test_english_golden_corpus() {
    run(EN_GOLDEN_TESTS);
}

#[test]
fn test_edge_cases() {
    let formula = PreparationFormula::new(Lang::French).with_expand_numbers(true);

    // Empty and whitespace-only input stay empty.
    assert_eq!(formula.prepare_text(""), "");
    assert_eq!(formula.prepare_text("   "), "");

    // No normalizable content passes through (lowercased).
    assert_eq!(formula.prepare_text("Bonjour tout le monde"), "bonjour tout le monde");

    // Languages without a speller leave digits alone but still clean.
    let formula = PreparationFormula::new(Lang::Italian);
    assert_eq!(formula.prepare_text("il 25 marzo !!!!"), "il 25 marzo");
}
