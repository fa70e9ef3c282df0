// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

pub const QUOTE_CHARS: [char; 2] = ['\'', '"'];

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});

fn is_quote(c: char) -> bool {
    QUOTE_CHARS.contains(&c)
}

/// Whole token is wrapped in one matching, unescaped pair of quotes and holds
/// no unescaped quote of the same kind inside.
pub fn is_quoted(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(open) = chars.next().filter(|c| is_quote(*c)) else {
        return false;
    };
    if token.len() < 2 || !token.ends_with(open) {
        return false;
    }

    let inner = &token[1..token.len() - 1];
    let mut iter = inner.chars();
    while let Some(c) = iter.next() {
        if c == '\\' {
            match iter.next() {
                Some(q) if is_quote(q) => {}
                // Trailing backslash escapes the last quote, so the token is not closed.
                None => return false,
                Some(_) => {}
            }
        } else if c == open {
            return false;
        }
    }
    true
}

/// Opening quote of a value that does not close on the same line.
pub fn opens_quote(token: &str) -> Option<char> {
    let open = token.chars().next().filter(|c| is_quote(*c))?;
    if is_quoted(token) {
        return None;
    }
    if token.len() == 1 || !token.ends_with(open) {
        Some(open)
    } else {
        None
    }
}

/// Continuation line that terminates a multiline value. Either quote
/// character closes it, whichever one opened the value.
pub fn closes_quote(line: &str) -> bool {
    line.ends_with(QUOTE_CHARS)
}

/// Strip the outer quote pair and turn `\'` / `\"` into literal quotes.
pub fn unquote(token: &str) -> String {
    let inner = &token[1..token.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut iter = inner.chars().peekable();
    while let Some(c) = iter.next() {
        if c == '\\' {
            if let Some(&q) = iter.peek() {
                if is_quote(q) {
                    out.push(q);
                    iter.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Signed decimal literal with optional fraction and exponent. Surrounding
/// whitespace is tolerated.
pub fn is_numeric(token: &str) -> bool {
    NUMBER.is_match(token.trim())
}
