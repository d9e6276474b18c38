use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Rivet Lab developer tool.
///
/// Validates declarative permission manifests for sandboxed components
/// and appends structured entries to append-only decision logs.
///
/// EXAMPLES:
///     rivet validate-manifest manifest.yaml     Validate a manifest
///     rivet append-decision --log logs/2026-01-31.md \
///         --what "adopt clap" --why "standard CLI stack"
///
/// ENVIRONMENT VARIABLES:
///     RIVET_JSON   Set to '1' for JSON validation reports by default
#[derive(Parser)]
#[command(name = "rivet")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a permission manifest (YAML/JSON)
    ///
    /// Decodes the manifest (`.json` as JSON, anything else as YAML)
    /// and checks its structure. Prints VALID on success; prints one
    /// stderr line per finding, prefixed INVALID:, and exits nonzero
    /// otherwise. Decode failures exit nonzero with a single
    /// `error:` line.
    ///
    /// EXAMPLES:
    ///     rivet validate-manifest manifest.yaml
    ///     rivet validate-manifest manifest.json --json
    #[command(visible_alias = "v")]
    ValidateManifest {
        /// Path to the manifest file
        path: String,
        /// Output the report as JSON
        #[arg(long, env = "RIVET_JSON")]
        json: bool,
    },

    /// Append a decision log entry
    ///
    /// Creates the log file (and parent directories) if absent and
    /// appends one human-readable block. The log is append-only and
    /// meant to be git-diffed, not parsed.
    ///
    /// EXAMPLES:
    ///     rivet append-decision --log logs/2026-01-31.md \
    ///         --what "split validator crate" --why "reuse from CI"
    #[command(visible_alias = "a")]
    AppendDecision {
        /// Path to the log file, e.g. logs/2026-01-31.md
        #[arg(long)]
        log: PathBuf,
        /// What was decided
        #[arg(long)]
        what: String,
        /// Why it was decided
        #[arg(long)]
        why: String,
        /// Lesson learned
        #[arg(long, default_value = "")]
        lesson: String,
        /// ISO8601 time; defaults to now UTC
        #[arg(long)]
        when: Option<String>,
    },

    /// Generate shell completion scripts
    ///
    /// EXAMPLES:
    ///     rivet completions bash > /etc/bash_completion.d/rivet
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            // Single fatal-error boundary: decode and I/O failures from
            // any subcommand surface as one uniform stderr line.
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::ValidateManifest { path, json } => {
            let valid = commands::validate::run(&path, json)?;
            Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::AppendDecision {
            log,
            what,
            why,
            lesson,
            when,
        } => {
            commands::append::run(commands::append::AppendArgs {
                log,
                what,
                why,
                lesson,
                when,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "rivet", &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
