use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use two_color_graph::config::Config;
use two_color_graph::utils::logging;
use two_color_graph::TwoColorChecker;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Two Color Graph Contributors")]
struct Cli {
    /// TOML configuration file
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a single graph description
    Check {
        /// Graph description, e.g. "a - b, b - c"; read from stdin when omitted
        input: Option<String>,
        /// Read the graph description from a file
        #[clap(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,
    },
    /// Check every stdin line as its own graph; invalid lines print nothing
    Lines,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    logging::init(&config.log).map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;

    let checker = TwoColorChecker::new(config.parser.clone());
    let result = match cli.command {
        Command::Check { input, file } => run_check(&checker, input, file),
        Command::Lines => run_lines(&checker),
    };

    logging::shutdown();
    result
}

fn run_check(
    checker: &TwoColorChecker,
    input: Option<String>,
    file: Option<PathBuf>,
) -> Result<ExitCode> {
    let input = match (input, file) {
        (Some(input), _) => input,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match check_line(checker, &input) {
        Some(line) => {
            println!("{}", line);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

/// Rendered result, or `None` when the input is rejected (the error is only logged).
fn check_line(checker: &TwoColorChecker, input: &str) -> Option<String> {
    match checker.check(input) {
        Ok(colorable) => Some(render(input, colorable)),
        Err(e) => {
            log::info!("跳过无效输入 {:?}: {}", input, e);
            None
        }
    }
}

fn run_lines(checker: &TwoColorChecker) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rendered) = check_line(checker, &line) {
            writeln!(stdout, "{}", rendered)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn render(input: &str, colorable: bool) -> String {
    format!(
        "{:?} IS{} a connected, two-colorable graph",
        input.trim(),
        if colorable { "" } else { " NOT" }
    )
}
