//! The `tokens` command: print the token stream of a script.

use std::fmt::Write;

use quill_ir::Token;
use quill_lexer::{lex_all, LexError, LexOptions};

use super::{read_file, CommandError, RunOptions};

/// Print the tokens of the script named by `options.path`.
pub fn lex_file(options: &RunOptions) -> Result<(), CommandError> {
    let path = options.path.as_deref().ok_or(CommandError::MissingPath)?;
    let source = read_file(path)?;
    let tokens = lex_all(&source, options.lex_options())?;
    println!("Tokens for '{path}' ({} tokens):", tokens.len());
    print!("{}", render(&tokens));
    Ok(())
}

/// One line per token: `<line>: <token>`.
pub fn token_listing(source: &str, options: LexOptions) -> Result<String, LexError> {
    lex_all(source, options).map(|tokens| render(&tokens))
}

fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:>4}: {}", token.line, token.kind);
    }
    out
}
