// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::lexer::{closes_quote, is_numeric, is_quoted, opens_quote, unquote};

/// Outcome of coercing one raw value token.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Value(Value),
    /// Quote opened but not closed on this line; the rest comes from the
    /// following lines.
    Multiline { quote: char, seed: String },
}

/// Decide the representation of a raw value token. Checks run in a fixed
/// order: quoted, open quote, numeric, boolean, plain string.
pub fn coerce(raw: &str) -> Coerced {
    if is_quoted(raw) {
        return Coerced::Value(Value::String(unquote(raw)));
    }

    if let Some(quote) = opens_quote(raw) {
        return Coerced::Multiline {
            quote,
            seed: raw[quote.len_utf8()..].to_string(),
        };
    }

    if is_numeric(raw) {
        if let Some(n) = coerce_number(raw) {
            return Coerced::Value(n);
        }
    }

    if raw.eq_ignore_ascii_case("true") {
        return Coerced::Value(Value::Boolean(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return Coerced::Value(Value::Boolean(false));
    }

    Coerced::Value(Value::String(raw.to_string()))
}

fn coerce_number(raw: &str) -> Option<Value> {
    let token = raw.trim();
    if token.contains('.') {
        return token.parse::<f64>().ok().map(Value::Float);
    }

    if let Ok(n) = token.parse::<i64>() {
        return Some(Value::Integer(n));
    }

    // Exponent form or out of i64 range: only whole, in-range results stay integers.
    let f = token.parse::<f64>().ok()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(Value::Integer(f as i64))
    } else {
        Some(Value::Float(f))
    }
}

/// Pull lines until one ends with a quote character. Lines that do not close
/// the value keep a trailing `\n`, and all fragments are joined with `\n`.
pub(super) fn read_multiline<S: LineSource>(
    parser: &mut Parser<S>,
    quote: char,
    seed: String,
) -> Result<String> {
    let opened_at = parser.line();
    let mut fragments = Vec::new();
    if !seed.is_empty() {
        fragments.push(seed);
    }

    while let Some(raw) = parser.next_line()? {
        let line = raw.trim();
        if closes_quote(line) {
            fragments.push(line[..line.len() - 1].to_string());
            tracing::trace!(from = opened_at, to = parser.line(), "closed multiline value");
            return Ok(fragments.join("\n"));
        }
        fragments.push(format!("{}\n", line));
    }

    Err(IniError::UnclosedString {
        quote,
        line: parser.line(),
        hint: Some(format!(
            "Value opened on line {} is never closed with a quote",
            opened_at
        )),
        code: Some(201),
    })
}
