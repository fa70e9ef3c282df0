// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

use super::Key;

static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([a-zA-Z][^\]]*)\]$").unwrap());

// At most one space on either side of the first `=`.
static SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?= ?").unwrap());

static ARRAY_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z]\w*)\[([^\]]*)\]$").unwrap());

/// Inner name of a `[name]` header, not split on the delimiter yet.
pub fn section_header(line: &str) -> Option<&str> {
    HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split on the first `=`. A line without one yields an empty value.
pub fn split_entry(line: &str) -> (&str, &str) {
    match SPLIT.find(line) {
        Some(m) => (&line[..m.start()], &line[m.end()..]),
        None => (line, ""),
    }
}

pub fn parse_key(raw: &str) -> Key<'_> {
    let key = raw.trim();

    let Some(caps) = ARRAY_KEY.captures(key) else {
        return Key::Plain(key);
    };

    let name = caps.get(1).map_or(key, |m| m.as_str());
    match caps.get(2).map(|m| m.as_str()) {
        Some(id) if !id.is_empty() => Key::Assoc { name, id },
        _ => Key::Append(name),
    }
}
