//! Command-line driver: `veclang [--tokens] [FILE]`
//!
//! Reads the program from FILE, or from stdin when no file is given.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use veclang::{Interpreter, Lexer};

const USAGE: &str = "Usage: veclang [--tokens] [FILE]";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut dump_tokens = false;
    let mut path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--tokens" => dump_tokens = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            "-V" | "--version" => {
                println!("veclang {}", veclang::VERSION);
                return Ok(());
            }
            other => {
                if path.is_some() {
                    bail!("unexpected argument '{}'\n{}", other, USAGE);
                }
                path = Some(other.to_string());
            }
        }
    }

    let source = match &path {
        Some(file) => fs::read_to_string(file)
            .with_context(|| format!("failed to read '{}'", file))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read program from stdin")?;
            buf
        }
    };
    let name = path.as_deref().unwrap_or("<stdin>");

    if dump_tokens {
        let dump = token_dump(&source).with_context(|| format!("failed to tokenize {}", name))?;
        print!("{}", dump);
        return Ok(());
    }

    let mut interpreter = Interpreter::new();
    interpreter
        .run(&source)
        .with_context(|| format!("failed to run {}", name))?;

    Ok(())
}

/// Renders every token before EOF as one JSON object per line
fn token_dump(source: &str) -> Result<String> {
    let mut out = String::new();
    for token in Lexer::new(source) {
        out.push_str(&serde_json::to_string(&token?)?);
        out.push('\n');
    }
    Ok(out)
}
