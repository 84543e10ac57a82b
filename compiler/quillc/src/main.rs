//! Quill CLI

use std::io::{self, BufRead, Write};

use quill_eval::StdioSink;
use quillc::commands::{lex_file, parse_run_options, run_file, CommandError};
use quillc::{init_tracing, Feed, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("repl", String::as_str);
    let rest = args.get(2..).unwrap_or_default();

    let result = match command {
        "run" => run_file(&parse_run_options(rest)),
        "tokens" => lex_file(&parse_run_options(rest)),
        "repl" => repl(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CommandError::MissingPath) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: quill <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file> [--strict] [--tokens]   Parse and evaluate a script");
    eprintln!("  tokens <file> [--strict]           Print the token stream");
    eprintln!("  repl                               Interactive session (default)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=quill_eval=debug) for trace output.");
}

fn repl() -> Result<(), CommandError> {
    let mut session = Session::new();
    session.environment_mut().register_output_sink(StdioSink);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let prompt = if session.is_continuing() { "... " } else { ">>> " };
        print!("{prompt}");
        // A failed flush only loses the prompt.
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            println!();
            if session.is_continuing() {
                if let Feed::Rejected(err) = session.feed("") {
                    eprintln!("{err}");
                }
            }
            return Ok(());
        };
        let line = line.map_err(|source| CommandError::Read {
            path: "<stdin>".to_string(),
            source,
        })?;
        if let Feed::Rejected(err) = session.feed(&line) {
            eprintln!("{err}");
        }
    }
}
