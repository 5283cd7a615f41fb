//! Corpus preparation command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prep_core::{Lang, PrepareOptions};
use std::path::PathBuf;
use tracing::info;

mod commands;
mod document;
mod langid;
mod logging;
mod segment;

/// Multilingual text preparation for speech corpora
#[derive(Debug, Parser)]
#[command(name = "prep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, default_value = "text", global = true)]
    log_format: LogFormatArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prepare a document into per-language sentence files
    Prepare {
        /// Input text file
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Language (fr, de, en, it); omit to auto-detect per sentence
        #[arg(long, default_value = "unknown")]
        lang: String,

        /// Rule-table file (substitution and validation rows)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Filter configuration file (JSON)
        #[arg(long)]
        filter_config: Option<PathBuf>,

        /// Apply sentence filtering bounds
        #[arg(long)]
        filter: bool,

        /// Run the LM preparation pipeline
        #[arg(long)]
        lm: bool,

        /// Split mixed letter+digit tokens and expand acronyms
        #[arg(long)]
        expand_numbers: bool,

        /// Verbalize punctuation symbols into words
        #[arg(long)]
        verbalize: bool,

        /// Remove verbalized punctuation words
        #[arg(long)]
        strip_verbalized: bool,
    },

    /// Normalize one text without file output (dry run)
    Normalize {
        /// Input text
        input: String,

        /// Language (fr, de, en, it)
        #[arg(long, default_value = "fr")]
        lang: String,

        /// Split mixed letter+digit tokens and expand acronyms
        #[arg(long)]
        expand_numbers: bool,
    },

    /// Verbalize punctuation symbols into words
    Verbalize {
        /// Input text
        input: String,
    },

    /// Turn verbalized punctuation back into symbols
    Symbols {
        /// Input text
        input: String,
    },

    /// Remove verbalized punctuation words
    Strip {
        /// Input text
        input: String,
    },

    /// Show version and language support
    Info,
}

fn parse_lang(label: &str) -> Result<Lang> {
    label
        .parse::<Lang>()
        .map_err(|e| anyhow::anyhow!(e))
        .context("unknown language")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = match cli.log_format {
        LogFormatArg::Json => logging::LogFormat::Json,
        LogFormatArg::Text => logging::LogFormat::Text,
    };
    logging::init_logging(&cli.log_level, format);

    info!(version = env!("CARGO_PKG_VERSION"), "starting prep CLI");

    match cli.command {
        Commands::Prepare {
            input,
            output_dir,
            lang,
            rules,
            filter_config,
            filter,
            lm,
            expand_numbers,
            verbalize,
            strip_verbalized,
        } => {
            let options = PrepareOptions {
                lang: parse_lang(&lang)?,
                expand_numbers_in_words: expand_numbers,
                filter_sentences: filter,
                lm_mode: lm,
                verbalize_punctuation: verbalize,
                strip_verbalized,
                rule_file: rules,
            };
            let args = commands::prepare::PrepareArgs {
                input,
                output_dir,
                options,
                filter_config,
            };
            commands::prepare::run(&args).context("preparation failed")?;
        }
        Commands::Normalize {
            input,
            lang,
            expand_numbers,
        } => {
            commands::normalize::run(&input, parse_lang(&lang)?, expand_numbers)
                .context("normalization failed")?;
        }
        Commands::Verbalize { input } => {
            commands::punct::verbalize(&input).context("verbalization failed")?;
        }
        Commands::Symbols { input } => {
            commands::punct::symbols(&input).context("symbol restoration failed")?;
        }
        Commands::Strip { input } => {
            commands::punct::strip(&input).context("strip failed")?;
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
