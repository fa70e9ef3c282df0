// Author: Dustin Pilgrim
// License: MIT

/// The main error type for INI loading, parsing and typed access.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IniError {
    /// The backing resource is missing, not a regular file, or unreadable.
    #[error("[INI] File Error '{path}': {message}{}", suffix(.hint, .code))]
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[INI] Syntax Error: {message} Line: {line}.{}", suffix(.hint, .code))]
    SyntaxError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a multiline value runs into the end of input.
    #[error("[INI] Unclosed string starting with '{quote}' Line: {line}.{}", suffix(.hint, .code))]
    UnclosedString {
        quote: char,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A typed accessor asked for a path the document does not contain.
    #[error("[INI] Path '{path}' not found in configuration{}", suffix(.hint, .code))]
    MissingKey {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    #[error("[INI] Type Error: {message}{}", suffix(.hint, .code))]
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    let mut out = String::new();
    if let Some(h) = hint {
        out.push_str(&format!(" Hint: {}", h));
    }
    if let Some(c) = code {
        out.push_str(&format!(" Code: {}", c));
    }
    out
}

impl IniError {
    /// True when the resource could not be opened (a usage bug, not bad content).
    pub fn is_resource_error(&self) -> bool {
        matches!(self, IniError::FileError { .. })
    }

    /// True for structural failures found while scanning the content.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            IniError::SyntaxError { .. } | IniError::UnclosedString { .. }
        )
    }

    /// 1-based line at which parsing stopped, for structural errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::SyntaxError { line, .. } | IniError::UnclosedString { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }

    pub(crate) fn missing_key(path: &str) -> Self {
        IniError::MissingKey {
            path: path.to_string(),
            hint: Some("Check that the path exists in your config file".into()),
            code: Some(304),
        }
    }

    pub(crate) fn type_error(message: String, hint: &str, code: u32) -> Self {
        IniError::TypeError {
            message,
            hint: Some(hint.into()),
            code: Some(code),
        }
    }
}

pub type Result<T> = std::result::Result<T, IniError>;
