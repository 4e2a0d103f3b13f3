//! Command-line front end for uitree markup.
//!
//! Usage:
//!   uitree check `<path>`...   - parse each file and report the first error in each
//!   uitree tree `<path>`       - print an indented outline of the parsed tree

mod check;
mod logging;
mod outline;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use check::{check_all, read_source};
use logging::{ColorChoice, LoggingConfig, init_logging};
use outline::render_outline;
use report::render_error;

#[derive(Debug, Parser)]
#[command(name = "uitree", version, about = "Check and inspect uitree markup files")]
struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    /// Color log output
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse files and report syntax errors
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Print the parsed element tree
    Tree { path: PathBuf },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { filter: cli.log, color: cli.color });

    match cli.command {
        Command::Check { paths } => {
            let (outcomes, failed) = check_all(&paths);
            for outcome in &outcomes {
                if outcome.passed {
                    println!("{}", outcome.message);
                } else {
                    eprintln!("{}\n", outcome.message);
                }
            }
            log::info!("checked {} file(s), {} failed", paths.len(), failed);
            Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Tree { path } => {
            let source = read_source(&path)?;
            match uitree_markup::parse_str(&source) {
                Ok(roots) => {
                    print!("{}", render_outline(&roots));
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", render_error(&e, &path.display().to_string(), &source));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
