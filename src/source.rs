// Author: Dustin Pilgrim
// License: MIT

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::Lines;

use crate::error::{IniError, Result};

/// Supplies raw text lines to the parser, one at a time, until exhausted.
pub trait LineSource {
    /// Next line without its line terminator, or `None` once the input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Give up the backing resource. Must be safe to call more than once.
    fn release(&mut self) {}
}

/// Line source backed by an open file handle.
///
/// The handle is acquired in [`FileLines::open`] and dropped exactly once: on
/// [`LineSource::release`] or, failing that, when the value itself is dropped.
pub struct FileLines {
    reader: Option<BufReader<File>>,
    path: PathBuf,
}

impl FileLines {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_home(path.as_ref())?;
        let display = path.to_string_lossy().to_string();

        if !path.is_file() {
            return Err(IniError::FileError {
                message: "File does not exist or is not a regular file".into(),
                path: display,
                hint: Some("Check that the path points to an existing file".into()),
                code: Some(301),
            });
        }

        let file = File::open(&path).map_err(|e| IniError::FileError {
            message: format!("Failed to open file: {}", e),
            path: display,
            hint: Some("Check that the file is readable".into()),
            code: Some(302),
        })?;

        tracing::debug!(path = %path.display(), "opened ini source");
        Ok(Self {
            reader: Some(BufReader::new(file)),
            path,
        })
    }

    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }
}

impl LineSource for FileLines {
    fn next_line(&mut self) -> Result<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut buf = String::new();
        match reader.read_line(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                Ok(Some(buf))
            }
            // The parser stamps the line number on this.
            Err(e) => Err(IniError::SyntaxError {
                message: format!("Failed to read line: {}", e),
                line: 0,
                hint: Some("The file must be valid UTF-8 text".into()),
                code: Some(203),
            }),
        }
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            tracing::trace!(path = %self.path.display(), "released ini source");
        }
    }
}

impl Drop for FileLines {
    fn drop(&mut self) {
        self.release();
    }
}

/// Line source over text already in memory.
pub struct StrLines<'a> {
    lines: Lines<'a>,
}

impl<'a> StrLines<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
        }
    }
}

impl LineSource for StrLines<'_> {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.next().map(str::to_string))
    }
}

/// Expand a leading "~/" against the home directory.
fn expand_home(path: &Path) -> Result<PathBuf> {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| IniError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}
