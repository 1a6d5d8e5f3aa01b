mod repl;

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wc_app::{AppResult, ChainConfig, ChainOutcome, load_config, load_words, solve};

#[derive(Parser)]
#[command(name = "wc-cli")]
#[command(about = "WordChain CLI - arrange words into a closed letter chain", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log solver decisions
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chain the words given on the command line
    Chain {
        /// Words to arrange
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Chain the words listed in a file
    File {
        /// Path to a word-list file
        path: PathBuf,
    },
    /// Read word lists interactively, one attempt per line
    Repl,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ChainConfig::default(),
    };

    match cli.command {
        Commands::Chain { words } => cmd_chain(&words, &config, cli.json),
        Commands::File { path } => cmd_file(&path, &config, cli.json),
        Commands::Repl => cmd_repl(&config, cli.json),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_chain(words: &[String], config: &ChainConfig, json: bool) -> AppResult<()> {
    let outcome = solve(words, config)?;
    print_outcome(&outcome, json)
}

fn cmd_file(path: &Path, config: &ChainConfig, json: bool) -> AppResult<()> {
    let words = load_words(path)?;
    if !json {
        println!("Loaded {} words from {}", words.len(), path.display());
    }
    let outcome = solve(&words, config)?;
    print_outcome(&outcome, json)
}

fn cmd_repl(config: &ChainConfig, json: bool) -> AppResult<()> {
    let stdin = io::stdin();
    repl::run_repl(stdin.lock(), &mut io::stdout(), config, json)
}

fn print_outcome(outcome: &ChainOutcome, json: bool) -> AppResult<()> {
    repl::write_outcome(&mut io::stdout(), outcome, json)
}
