//! Prepare command: file in, per-language sentence files out.

use crate::document::{cleaned_per_language, TextDocument};
use crate::langid::WhatlangIdentifier;
use crate::segment::RegexSegmenter;
use anyhow::{Context, Result};
use prep_core::{FilterConfig, Lang, PrepareOptions, SentenceOutcome};
use rule_engine::{load_rule_file, RuleTable, SubstitutionEngine};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options collected from the command line.
#[derive(Debug)]
pub struct PrepareArgs {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub options: PrepareOptions,
    pub filter_config: Option<PathBuf>,
}

/// Run the prepare command.
pub fn run(args: &PrepareArgs) -> Result<()> {
    let filter = load_filter_config(args.filter_config.as_deref())?;

    let (user_rules, validator) = match &args.options.rule_file {
        Some(path) => {
            let table = load_rule_file(path).context("loading rule table")?;
            let engine = table
                .substitution_engine()
                .context("compiling rule table")?;
            (engine, table.validator())
        }
        None => (
            SubstitutionEngine::default(),
            RuleTable::default().validator(),
        ),
    };

    let mut document = TextDocument::from_file(&args.input, &RegexSegmenter)
        .context("loading input document")?;

    if args.options.lang == Lang::Unknown {
        document.classify(&WhatlangIdentifier);
    } else {
        document.set_language(args.options.lang);
    }

    let outcomes = document.prepare(&args.options, &user_rules, &validator, &filter);

    let total = outcomes.len();
    let rejected: Vec<String> = outcomes
        .iter()
        .filter_map(|o| match o {
            SentenceOutcome::Rejected { reason } => Some(reason.clone()),
            SentenceOutcome::Accepted(_) => None,
        })
        .collect();
    info!(total, rejected = rejected.len(), "prepared document");

    std::fs::create_dir_all(&args.output_dir).context("creating output directory")?;
    let by_lang = cleaned_per_language(outcomes);
    for (lang, sentences) in &by_lang {
        let path = args.output_dir.join(format!("sentences_{lang}.txt"));
        std::fs::write(&path, sentences.join("\n") + "\n")
            .with_context(|| format!("writing {}", path.display()))?;
        println!("{}: {} sentences", path.display(), sentences.len());
    }
    println!("{} sentences in, {} rejected", total, rejected.len());

    Ok(())
}

fn load_filter_config(path: Option<&Path>) -> Result<FilterConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&content).context("parsing filter configuration")
        }
        None => Ok(FilterConfig::default()),
    }
}
