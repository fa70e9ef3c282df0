// Author: Dustin Pilgrim
// License: MIT

//! Line classification for the INI grammar.
//!
//! Every recognizer here is a pure function over one line (or one value token)
//! that has already been trimmed of surrounding whitespace.

mod quotes;
mod scanner;

pub use quotes::{closes_quote, is_numeric, is_quoted, opens_quote, unquote, QUOTE_CHARS};
pub use scanner::{parse_key, section_header, split_entry};

/// What a single trimmed line is.
#[derive(Debug, Clone, PartialEq)]
pub enum LineToken<'a> {
    /// Blank line or `;` comment.
    Skip,
    /// `[name]`, inner name verbatim.
    Header(&'a str),
    Entry { key: Key<'a>, value: &'a str },
}

/// Left-hand side of an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Key<'a> {
    Plain(&'a str),
    /// `name[]`
    Append(&'a str),
    /// `name[id]`
    Assoc { name: &'a str, id: &'a str },
}

impl Key<'_> {
    /// The map key the entry is written under.
    pub fn name(&self) -> &str {
        match self {
            Key::Plain(name) | Key::Append(name) | Key::Assoc { name, .. } => *name,
        }
    }
}

pub fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with(';')
}

pub fn classify(line: &str) -> LineToken<'_> {
    if is_skippable(line) {
        return LineToken::Skip;
    }

    if let Some(name) = section_header(line) {
        return LineToken::Header(name);
    }

    let (key, value) = split_entry(line);
    LineToken::Entry {
        key: parse_key(key),
        value,
    }
}

#[cfg(test)]
mod tests;
