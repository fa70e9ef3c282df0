// Author: Dustin Pilgrim
// License: MIT

use std::mem;

use crate::ast::{Map, Value};
use crate::error::{IniError, Result};
use crate::lexer::{self, LineToken};
use crate::source::LineSource;

mod document;
mod section;
mod value;

pub use document::{merge_deep, merge_shallow, wrap};
pub use section::{KeyConflict, SectionPath, SectionState};
pub use value::{coerce, Coerced};

use document::MergeKind;

pub const DEFAULT_DELIMITER: char = ':';

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOptions {
    /// Splits a header name into nested section segments.
    pub delimiter: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Single-pass, line-oriented parser.
///
/// Owns the line source for the duration of the parse and releases it on
/// every exit path of [`Parser::parse_document`].
pub struct Parser<S: LineSource> {
    source: S,
    options: ParseOptions,
    line: usize,
    state: SectionState,
    document: Map,
}

impl<S: LineSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: S, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            line: 0,
            state: SectionState::global(),
            document: Map::new(),
        }
    }

    /// Number of lines consumed so far (1-based once the first line is read).
    pub fn line(&self) -> usize {
        self.line
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &SectionState {
        &self.state
    }

    /// Sections flushed so far.
    #[cfg(test)]
    pub(crate) fn document(&self) -> &Map {
        &self.document
    }

    /// Run the whole parse. Either the complete document comes back or the
    /// first structural error does; there is no partial result.
    pub fn parse_document(mut self) -> Result<Map> {
        let scanned = self.scan();
        self.source.release();
        scanned?;

        self.finish();
        tracing::debug!(lines = self.line, keys = self.document.len(), "parsed ini document");
        Ok(self.document)
    }

    fn scan(&mut self) -> Result<()> {
        while let Some(raw) = self.next_line()? {
            self.step(raw.trim())?;
        }
        Ok(())
    }

    /// Feed one trimmed line through the state machine.
    pub fn step(&mut self, line: &str) -> Result<()> {
        let token = lexer::classify(line);
        tracing::trace!(line = self.line, ?token, "classified line");

        match token {
            LineToken::Skip => {}
            LineToken::Header(name) => {
                let next = SectionState::named(name, self.options.delimiter);
                let done = mem::replace(&mut self.state, next);
                document::flush(&mut self.document, done, MergeKind::Deep);
            }
            LineToken::Entry { key, value } => {
                let value = self.parse_value(value)?;
                self.state
                    .insert(&key, value)
                    .map_err(|conflict| IniError::SyntaxError {
                        message: conflict.to_string(),
                        line: self.line,
                        hint: Some("Use a different key name or drop the earlier assignment".into()),
                        code: Some(204),
                    })?;
            }
        }
        Ok(())
    }

    /// Flush whatever section is still open at end of input.
    fn finish(&mut self) {
        let last = mem::replace(&mut self.state, SectionState::global());
        document::flush(&mut self.document, last, MergeKind::Shallow);
    }

    fn parse_value(&mut self, raw: &str) -> Result<Value> {
        match value::coerce(raw) {
            Coerced::Value(v) => Ok(v),
            Coerced::Multiline { quote, seed } => {
                value::read_multiline(self, quote, seed).map(Value::String)
            }
        }
    }

    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        match self.source.next_line() {
            Ok(Some(line)) => {
                self.line += 1;
                Ok(Some(line))
            }
            Ok(None) => Ok(None),
            Err(IniError::SyntaxError {
                message,
                hint,
                code,
                ..
            }) => Err(IniError::SyntaxError {
                message,
                line: self.line + 1,
                hint,
                code,
            }),
            Err(e) => Err(e),
        }
    }
}
