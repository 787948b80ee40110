//! `tabsniff [--strict] [PATH|-]`
//!
//! Reads CSV text or a `data:` URL from PATH (stdin when absent or `-`) and
//! prints the parsed table as JSON. Log level comes from `RUST_LOG`.

use std::fs::File;
use std::io;
use std::process::ExitCode;

use tabsniff::{load_table_from_reader, CsvParser, ParseMode};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: tabsniff [--strict] [PATH|-]";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tabsniff: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut mode = ParseMode::Lenient;
    let mut path = None;
    for arg in args {
        match arg.as_str() {
            "--strict" => mode = ParseMode::Strict,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if path.is_none() => path = Some(arg),
            _ => return Err(USAGE.into()),
        }
    }

    let parser = CsvParser::default();
    let table = match path.as_deref() {
        None | Some("-") => load_table_from_reader(io::stdin().lock(), &parser, mode)?,
        Some(path) => load_table_from_reader(File::open(path)?, &parser, mode)?,
    };
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
