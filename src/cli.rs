//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use codetint::config::Config;
use codetint::output::OutputMode;

/// codetint - Syntax highlighting for documentation snippets
#[derive(Parser, Debug)]
#[command(
    name = "codetint",
    version,
    about = "Syntax highlighting for documentation snippets",
    long_about = "Render code snippets as HTML with token spans.\n\n\
                  Each grammar is an ordered list of rules; text claimed by an earlier\n\
                  rule is never reclassified, and everything else is HTML-escaped."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./codetint.toml, then ~/.config/codetint/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Highlight a snippet and print the markup
    Highlight {
        /// File to read (stdin when absent or `-`)
        file: Option<PathBuf>,

        /// Grammar identifier (detected from the file name and content when absent)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// List grammars, their identifiers and rules
    Grammars,

    /// Validate the grammar table
    Check,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Highlight { file, lang }) => {
            let config = Config::discover(cli.config.as_deref())?;
            commands::highlight(&config, file.as_deref(), lang.as_deref(), output_mode)
        },
        Some(Command::Grammars) => commands::grammars(output_mode),
        Some(Command::Check) => commands::check(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("codetint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("codetint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'codetint --help' for usage");
                println!("Run 'codetint highlight <file>' to get started");
            }
            Ok(())
        },
    }
}
