//! Command-line front end: evaluate lines from a file or standard input.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use incunabulum::context::DEFAULT_MAX_DEPTH;
use incunabulum::repl::{self, ReaderSource, TerminalSource};
use incunabulum::{EvalContext, Interpreter};

/// Interpreter for a tiny APL/J-style array language.
#[derive(Debug, Parser)]
#[command(name = "incunabulum", version, about)]
struct Cli {
    /// Read expressions from this file instead of standard input
    file: Option<PathBuf>,

    /// Maximum expression nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut interp = Interpreter::with_context(EvalContext::with_max_depth(cli.max_depth));
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let mut input = ReaderSource::new(BufReader::new(file));
            repl::run(&mut interp, &mut input, &mut out, &mut err)?;
        }
        None if io::stdin().is_terminal() => {
            let mut input = TerminalSource::new().context("failed to start line editor")?;
            repl::run(&mut interp, &mut input, &mut out, &mut err)?;
        }
        None => {
            let mut input = ReaderSource::new(io::stdin().lock());
            repl::run(&mut interp, &mut input, &mut out, &mut err)?;
        }
    }
    Ok(())
}

/// Install a stderr log subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}
