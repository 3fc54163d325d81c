//! Command-line calculator.
//!
//! Reads statements line by line from standard input (or a file, or a single
//! `--expr`), prints the value of every expression statement, and points a
//! caret at each error. Variables assigned on one line stay defined for the
//! lines after it.

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use parser_example::{caret_line, parser, CalcEnv};
use parser_framework::ParserConfig;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this line and exit
    #[arg(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// Read statements from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Values a statement may emit before the caller pulls them
    #[arg(short, long, default_value_t = 2)]
    capacity: usize,
}

fn run_line(
    line: &str,
    env: &mut CalcEnv,
    config: ParserConfig,
    out: &mut impl Write,
) -> Result<()> {
    let mut parser = parser(line, config).context("can't create parser")?;
    loop {
        let value = parser.try_next_with(env);
        for diagnostic in env.take_diagnostics() {
            writeln!(out, "{}", caret_line(&diagnostic))?;
        }
        match value.context("parsing error")? {
            Some(value) => writeln!(out, "{}", value)?,
            None => break,
        }
    }
    log::debug!("line done: {:?}", parser.stats());
    Ok(())
}

fn run_lines(reader: impl BufRead, env: &mut CalcEnv, config: ParserConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in reader.lines() {
        let line = line.context("can't read input")?;
        if line.is_empty() {
            continue;
        }
        run_line(&line, env, config, &mut out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = ParserConfig::default().with_mailbox_capacity(args.capacity);
    let mut env = CalcEnv::new();

    match (args.expr, args.input) {
        (Some(expr), _) => run_line(&expr, &mut env, config, &mut io::stdout().lock()),
        (None, Some(path)) => {
            let file = File::open(&path).with_context(|| format!("can't open {:?}", path))?;
            run_lines(BufReader::new(file), &mut env, config)
        }
        (None, None) => run_lines(io::stdin().lock(), &mut env, config),
    }
}
