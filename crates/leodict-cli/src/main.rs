use clap::{ArgAction, Parser};
use std::process::ExitCode;
use thiserror::Error;

use leodict_acquire::FetchError;
use leodict_model::{lang, QueryOptions};

const EXIT_TIMEOUT: u8 = 10;
const EXIT_HTTP: u8 = 15;
const EXIT_NOT_FOUND: u8 = 20;

#[derive(Parser, Debug)]
#[command(name = "leodict")]
#[command(about = "Look up a word on pda.leo.org and print the bilingual result table")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Include any definitions in the result
    #[arg(short = 'D', long)]
    with_defs: bool,

    /// Include examples in the result
    #[arg(short = 'E', long)]
    with_examples: bool,

    /// Include phrases in the result
    #[arg(short = 'P', long)]
    with_phrases: bool,

    /// Raise verbosity level (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Source language, as a short code or full name; German is always the
    /// target. Unrecognized values fall back to English.
    #[arg(short, long, default_value_t = lang::default_code())]
    language: String,

    /// Query string
    #[arg(value_name = "QUERYSTRING")]
    query: String,
}

#[derive(Debug, Error)]
enum LookupError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no translation for \"{query}\" was found")]
    NotFound { query: String },
}

impl LookupError {
    fn exit_code(&self) -> u8 {
        match self {
            LookupError::Fetch(FetchError::Timeout { .. }) => EXIT_TIMEOUT,
            LookupError::Fetch(_) => EXIT_HTTP,
            LookupError::NotFound { .. } => EXIT_NOT_FOUND,
        }
    }
}

/// Map the `-v` counter to a default filter directive. `RUST_LOG` still
/// wins when set. The HTML-parsing crates stay quiet below warn even at
/// full verbosity.
fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug,selectors=warn,html5ever=warn",
    }
}

fn init_tracing(verbose: u8) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directive(verbose)));

    // Diagnostics go to stderr; stdout carries only the word table
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<(), LookupError> {
    let language_name = lang::name_for(&cli.language);
    let url = leodict_acquire::build_url(language_name, &cli.query);

    let html = leodict_acquire::fetch_page(&url).await?;

    let options = QueryOptions {
        language: lang::code_for(&cli.language).to_string(),
        with_defs: cli.with_defs,
        with_examples: cli.with_examples,
        with_phrases: cli.with_phrases,
        ..QueryOptions::default()
    };
    let sections = leodict_parse::extract_sections(&html, &options).map_err(|_| {
        LookupError::NotFound {
            query: cli.query.clone(),
        }
    })?;

    print!("{}", leodict_parse::render_sections(&sections));
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(?cli, "parsed command line");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
