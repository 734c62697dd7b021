//! `hl7` — parse HL7 v2 pipe-encoded messages and extract field values.

use std::fs;
use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hl7_toolchain_core::{parse_str, scan_str, to_pretty_json};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "hl7",
    version,
    about = "HL7 toolchain — parse HL7 v2 messages and extract field values"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse a message file and print its tree as pretty JSON.
    Parse {
        /// Message file, or `-` for stdin.
        file: String,
    },

    /// Extract one field value by address (e.g. "OBR.7" or "/.OBR-7").
    Get {
        /// Message file, or `-` for stdin.
        file: String,
        /// Field address in dotted or terser syntax.
        address: String,
        /// Extraction strategy.
        #[arg(long, value_enum, default_value_t = Mode::Scan)]
        mode: Mode,
    },

    /// Parse a message file and report its segment count.
    Check {
        /// Message file, or `-` for stdin.
        file: String,
    },
}

/// How `get` reaches the addressed value.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// One linear pass over the text; no tree is built.
    Scan,
    /// Full parse into a message tree, then resolve the address.
    Tree,
}

// ── Input helpers ───────────────────────────────────────────────────────

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("failed to read '{file}'"))
    }
}

// ── Entry point ─────────────────────────────────────────────────────────

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Parse { file } => {
            let text = read_input(&file)?;
            let message =
                parse_str(&text).with_context(|| format!("failed to parse '{file}'"))?;
            println!("{}", to_pretty_json(&message));
        }
        Cmd::Get {
            file,
            address,
            mode,
        } => {
            let text = read_input(&file)?;
            let value = match mode {
                Mode::Scan => scan_str(&text, &address),
                Mode::Tree => parse_str(&text).and_then(|m| m.query_str(&address)),
            }
            .with_context(|| format!("failed to resolve '{address}'"))?;
            println!("{value}");
        }
        Cmd::Check { file } => {
            let text = read_input(&file)?;
            let message =
                parse_str(&text).with_context(|| format!("failed to parse '{file}'"))?;
            println!("ok: {} segments", message.segments.len());
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
