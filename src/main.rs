use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use monkey_parser::{display_error, lexer::lexer::Lexer, parser::parser::parse};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">> ";

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "Tokenizer and parser front end for the Monkey language", version)]
struct Cli {
    /// What to print for each input
    #[arg(short, long, value_enum, default_value_t = Mode::Tokens)]
    mode: Mode,

    /// Process a source file instead of starting the interactive prompt
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Print every token
    Tokens,
    /// Print the parsed program, or its errors
    Ast,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.file {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());

            info!(file = %path.display(), bytes = source.len(), "processing file");
            run(cli.mode, source, file_name, &mut out)
        }
        None => repl(cli.mode, io::stdin().lock(), &mut out),
    }
}

/// Reads lines until end of input, processing each one on its own.
fn repl(mode: Mode, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };

        run(mode, line.context("failed to read from stdin")?, None, out)?;
    }
}

fn run(mode: Mode, source: String, file: Option<String>, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();

    match mode {
        Mode::Tokens => {
            for token in Lexer::new(source, file) {
                writeln!(out, "{}", token)?;
            }
            debug!(elapsed = ?start.elapsed(), "tokenized");
        }
        Mode::Ast => {
            let (program, errors) = parse(source.clone(), file);
            debug!(
                elapsed = ?start.elapsed(),
                statements = program.len(),
                errors = errors.len(),
                "parsed"
            );

            if errors.is_empty() {
                writeln!(out, "{}", program)?;
            } else {
                for error in &errors {
                    writeln!(out, "{}", display_error(error, &source))?;
                }
            }
        }
    }

    Ok(())
}
