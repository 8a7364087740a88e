//! CLI module for the KPL compiler.
//!
//! `kplc <FILE>` compiles a source file. A compile error prints exactly one
//! `<line>-<col>:<message>` line on stdout and exits with status 1; success
//! is silent unless a dump flag asks for output.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. The compile
//! function returns `CliResult<T>` instead of calling `process::exit`. Only
//! the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser as ClapParser;

use crate::frontend::{dump, lexer, parser};

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The KPL compiler front-end
#[derive(ClapParser, Debug)]
#[command(name = "kplc")]
#[command(version = VERSION)]
#[command(about = "The KPL compiler front-end", long_about = None)]
pub struct Cli {
    /// Source file to compile
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Dump the token stream instead of compiling (debug)
    #[arg(long)]
    pub tokens: bool,

    /// Print the symbol table tree after a successful compile
    #[arg(long = "dump-symbols")]
    pub dump_symbols: bool,
}

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

fn execute(cli: Cli) -> CliResult<ExitCode> {
    let source = fs::read_to_string(&cli.file)
        .map_err(|e| CliError::failure(format!("Can't read input file {:?}: {e}", cli.file)))?;

    if cli.tokens {
        return dump_tokens(&source);
    }

    match parser::parse(&source) {
        Ok(table) => {
            if cli.dump_symbols {
                print!("{}", dump::dump(&table));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            // The one-line diagnostic contract: errors go on stdout.
            println!("{}", err.report());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn dump_tokens(source: &str) -> CliResult<ExitCode> {
    match lexer::lex(source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{} {}", token.pos, token.kind);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", err.report());
            Ok(ExitCode::FAILURE)
        }
    }
}
