// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use crate::ast::{Map, Value};
use crate::lexer::Key;

/// Where the values of the open section will land.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionPath {
    /// Lines before the first header.
    Global,
    /// Non-empty header segments, outermost first.
    Named(Vec<String>),
}

/// The section currently being filled by key/value lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionState {
    pub path: SectionPath,
    pub values: Map,
}

/// An array key was used on a name that already holds an incompatible value.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyConflict {
    pub key: String,
    pub expected: &'static str,
    pub found: &'static str,
}

impl fmt::Display for KeyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key '{}' is used as a {} but already holds a {}",
            self.key, self.expected, self.found
        )
    }
}

impl SectionState {
    pub fn global() -> Self {
        Self {
            path: SectionPath::Global,
            values: Map::new(),
        }
    }

    /// Open a section from a header name. Empty segments (`a::b`) are dropped.
    pub fn named(name: &str, delimiter: char) -> Self {
        let segments = name
            .split(delimiter)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            path: SectionPath::Named(segments),
            values: Map::new(),
        }
    }

    /// Write one entry. Plain keys overwrite; `name[]` appends to a list and
    /// `name[id]` inserts into a map, creating either on first use.
    pub fn insert(&mut self, key: &Key<'_>, value: Value) -> Result<(), KeyConflict> {
        match key {
            Key::Plain(name) => {
                self.values.insert(name.to_string(), value);
            }
            Key::Append(name) => {
                let slot = self
                    .values
                    .entry(name.to_string())
                    .or_insert_with(|| Value::List(Vec::new()));
                match slot {
                    Value::List(items) => items.push(value),
                    other => return Err(conflict(name, "list", other)),
                }
            }
            Key::Assoc { name, id } => {
                let slot = self
                    .values
                    .entry(name.to_string())
                    .or_insert_with(|| Value::Map(Map::new()));
                match slot {
                    Value::Map(map) => {
                        map.insert(id.to_string(), value);
                    }
                    other => return Err(conflict(name, "map", other)),
                }
            }
        }
        Ok(())
    }
}

fn conflict(key: &str, expected: &'static str, found: &Value) -> KeyConflict {
    KeyConflict {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}
