// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::Map;
use crate::parser::{ParseOptions, Parser};
use crate::source::{FileLines, StrLines};
use crate::IniError;

mod access;
mod conversion;

/// A fully parsed INI document with dot-path lookup.
///
/// Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IniConfig {
    document: Map,
}

impl IniConfig {
    /// Load and parse an INI file, nesting sections on `:`.
    ///
    /// # Example
    /// ```ignore
    /// let config = IniConfig::from_file("app.ini")?;
    /// ```
    ///
    /// # Errors
    /// [`IniError::FileError`] if the file is missing or unreadable; a parse
    /// error carrying the line number if the content is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        Self::from_file_with_options(path, ParseOptions::default())
    }

    /// Load an INI file using `delimiter` to split section headers.
    pub fn from_file_with_delimiter<P: AsRef<Path>>(
        path: P,
        delimiter: char,
    ) -> Result<Self, IniError> {
        Self::from_file_with_options(path, ParseOptions { delimiter })
    }

    pub fn from_file_with_options<P: AsRef<Path>>(
        path: P,
        options: ParseOptions,
    ) -> Result<Self, IniError> {
        let source = FileLines::open(path)?;
        let document = Parser::with_options(source, options).parse_document()?;
        Ok(Self { document })
    }

    /// Parse INI text already in memory (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, IniError> {
        Self::from_str_with_options(content, ParseOptions::default())
    }

    pub fn from_str_with_delimiter(content: &str, delimiter: char) -> Result<Self, IniError> {
        Self::from_str_with_options(content, ParseOptions { delimiter })
    }

    pub fn from_str_with_options(content: &str, options: ParseOptions) -> Result<Self, IniError> {
        let document = Parser::with_options(StrLines::new(content), options).parse_document()?;
        Ok(Self { document })
    }

    /// The whole document.
    pub fn document(&self) -> &Map {
        &self.document
    }

    /// Render the document as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, IniError> {
        crate::export::to_json(&self.document, pretty)
    }
}

impl From<Map> for IniConfig {
    fn from(document: Map) -> Self {
        Self { document }
    }
}
