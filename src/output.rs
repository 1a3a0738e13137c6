//! Terminal rendering of tokens, rewritten expressions, and keyspace tables.

use crate::mapping::{DesignatorTable, TokenKind};
use crate::query::rewriter::{TokenConstraint, TokenExpr};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print encoded tokens, one per line, designator symbol highlighted.
pub fn print_tokens(tokens: &[String], color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    for token in tokens {
        let mut chars = token.chars();
        if let Some(designator) = chars.next() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            write!(out, "{designator}")?;
            out.reset()?;
            writeln!(out, "{}", chars.as_str())?;
        }
    }
    Ok(())
}

/// Print a rewritten expression as one line per constraint.
pub fn print_expr(expr: &TokenExpr, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    match expr {
        TokenExpr::All => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(out, "match_all")?;
            out.reset()?;
        }
        TokenExpr::And(constraints) => {
            for constraint in constraints {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                write!(out, "AND ")?;
                out.reset()?;
                match constraint {
                    TokenConstraint::Term(token) => writeln!(out, "term {token}")?,
                    TokenConstraint::AnyOf(tokens) => {
                        writeln!(out, "any_of {}", tokens.join(" | "))?
                    }
                }
            }
        }
    }
    Ok(())
}

/// Print the designator keyspace: symbol, chunk position, and meaning.
pub fn print_keyspace(table: &DesignatorTable, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    writeln!(
        out,
        "chunk length {}, up to {} chunks",
        table.chunk_length(),
        table.max_chunks()
    )?;
    for position in 0..table.max_chunks() {
        for len in (1..=table.chunk_length()).rev() {
            print_assignment(&mut out, table.prefix(position, len), position, TokenKind::Prefix { len })?;
        }
        print_assignment(&mut out, table.terminal(position), position, TokenKind::Terminal)?;
    }
    Ok(())
}

fn print_assignment(
    out: &mut StandardStream,
    symbol: char,
    position: usize,
    kind: TokenKind,
) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(out, "  {symbol}")?;
    out.reset()?;
    match kind {
        TokenKind::Prefix { len } => {
            writeln!(out, "  chunk {position}, prefix of {len}")
        }
        TokenKind::Terminal => writeln!(out, "  chunk {position}, final chunk content"),
    }
}
