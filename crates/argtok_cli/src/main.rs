//! argtok CLI
//!
//! Splits command lines into arguments from the shell prompt or a pipe.
//! One result per output line, so the output composes with other tools.

use std::io::{self, BufRead};
use std::sync::Once;

use argtok::{normalize, tokenize, tokenize_strict};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=argtok=trace`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    let status = match command {
        "split" => with_each_line(rest, split_line),
        "parse" => with_each_line(rest, parse_line),
        "normalize" => {
            if rest.is_empty() {
                eprintln!("Usage: argtok normalize <text>");
                2
            } else {
                normalize_text(&rest.join(" "))
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        unknown => {
            eprintln!("error: unknown command `{unknown}`");
            print_usage();
            2
        }
    };

    std::process::exit(status);
}

fn print_usage() {
    eprintln!("Usage: argtok <command> [line]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  split [line]      Print raw arguments, quotes and escapes intact");
    eprintln!("  parse [line]      Print normalized arguments (quotes/escapes removed)");
    eprintln!("  normalize <text>  Print the logical value of one piece of text");
    eprintln!("  help              Show this message");
    eprintln!();
    eprintln!("With no line on the command line, split and parse read stdin,");
    eprintln!("treating each input line as one command line.");
}

/// Run `process` over the joined argument line, or over every stdin line.
fn with_each_line(rest: &[String], process: fn(&str) -> i32) -> i32 {
    if !rest.is_empty() {
        return process(&rest.join(" "));
    }
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                eprintln!("error: failed to read stdin: {error}");
                return 1;
            }
        };
        let status = process(&line);
        if status != 0 {
            return status;
        }
    }
    0
}

/// Raw split. Masking iteration plus an explicit stopped-short check, so a
/// malformed line still fails loudly instead of quietly losing its tail.
fn split_line(line: &str) -> i32 {
    let mut arguments = tokenize(line);
    for raw in arguments.by_ref() {
        println!("{raw}");
    }
    if arguments.stopped_short() {
        eprintln!("error: unterminated quote in argument list");
        return 1;
    }
    0
}

/// Strict split and normalize.
fn parse_line(line: &str) -> i32 {
    for result in tokenize_strict(line) {
        let value = match result.map(normalize) {
            Ok(Ok(value)) => value,
            Ok(Err(error)) | Err(error) => {
                eprintln!("error: {error}");
                return 1;
            }
        };
        println!("{value}");
    }
    0
}

fn normalize_text(text: &str) -> i32 {
    match normalize(text) {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    }
}
