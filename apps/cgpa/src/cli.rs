//! # CLI Module
//!
//! Command-line parsing and command implementations.
//!
//! ```text
//! cgpa [--host H] [--port P]      run the HTTP API (default)
//! cgpa serve [--host H] [--port P]
//! cgpa console                    interactive entry
//! cgpa calculate FILE [--json]    compute from a JSON file
//! ```

use crate::api::{self, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use crate::console::{ConsoleSession, SessionOutcome};
use cgpa_core::{OverallResult, ValidationError, compute_overall_result, validate_json};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// ARGUMENTS
// =============================================================================

/// SGPA/CGPA calculator: HTTP API and interactive console.
#[derive(Debug, Parser)]
#[command(name = "cgpa", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Server options used when no subcommand is given.
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API server.
    Serve(ServeArgs),

    /// Enter grades interactively.
    Console,

    /// Compute results for a JSON file shaped like the API request body.
    Calculate {
        /// Path to the input file.
        file: PathBuf,

        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind.
    #[arg(long, env = "CGPA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "CGPA_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
        }
    }
}

impl Cli {
    /// Run the selected command; no subcommand means `serve`.
    pub async fn run(self) -> Result<(), CliError> {
        match self.command.unwrap_or(Command::Serve(self.serve)) {
            Command::Serve(args) => cmd_serve(args).await,
            Command::Console => cmd_console().await,
            Command::Calculate { file, json } => cmd_calculate(&file, json),
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors from CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run the HTTP server until Ctrl-C.
pub async fn cmd_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = ServerConfig::from(args);
    info!(host = %config.host, port = config.port, "Starting CGPA Calculator API server");
    api::serve(&config).await?;
    Ok(())
}

/// Run an interactive session on stdin/stdout.
///
/// Ctrl-C ends the session with a goodbye instead of an error.
pub async fn cmd_console() -> Result<(), CliError> {
    // Stdout is locked per write so the interrupt path can still print
    // while the session is parked on a stdin read.
    let session = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        ConsoleSession::new(stdin.lock(), io::stdout()).run()
    });

    tokio::select! {
        joined = session => {
            let outcome = joined.map_err(|e| CliError::Internal(e.to_string()))??;
            match outcome {
                SessionOutcome::Completed(result) => {
                    debug!(cgpa = result.cgpa, "Console session completed");
                }
                SessionOutcome::Rejected(reason) => {
                    debug!(%reason, "Console session rejected input");
                }
                SessionOutcome::Ended => debug!("Console input closed"),
            }
            Ok(())
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n\nGoodbye!");
            // The blocking stdin read cannot be cancelled; leave directly.
            std::process::exit(0);
        }
    }
}

/// Read, validate and compute a record from a JSON file.
pub fn calculate_file(path: &Path) -> Result<OverallResult, CliError> {
    let bytes = std::fs::read(path)?;
    let record = validate_json(&bytes)?;
    let result = compute_overall_result(&record);
    if !result.is_finite() {
        return Err(CliError::Internal(
            "calculation produced a non-finite value".to_string(),
        ));
    }
    Ok(result)
}

/// Print results for a JSON file as a table or as JSON.
pub fn cmd_calculate(path: &Path, json: bool) -> Result<(), CliError> {
    debug!(path = %path.display(), "Calculating from file");
    let result = calculate_file(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.to_table());
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_serves_on_defaults() {
        let cli = Cli::try_parse_from(["cgpa"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(
            ServerConfig::from(cli.serve),
            ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            }
        );
    }

    #[test]
    fn serve_flags_override_defaults() {
        let cli = Cli::try_parse_from(["cgpa", "serve", "--host", "127.0.0.1", "--port", "8080"])
            .unwrap();
        let Some(Command::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn top_level_port_flag() {
        let cli = Cli::try_parse_from(["cgpa", "--port", "9000"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.serve.port, 9000);
    }

    #[test]
    fn calculate_and_console_parse() {
        let cli = Cli::try_parse_from(["cgpa", "calculate", "grades.json", "--json"]).unwrap();
        let Some(Command::Calculate { file, json }) = cli.command else {
            panic!("expected calculate");
        };
        assert_eq!(file, PathBuf::from("grades.json"));
        assert!(json);

        let cli = Cli::try_parse_from(["cgpa", "console", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Command::Console)));
    }

    #[test]
    fn invalid_port_rejected() {
        assert!(Cli::try_parse_from(["cgpa", "serve", "--port", "70000"]).is_err());
    }
}
