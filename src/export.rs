// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use crate::ast::Map;
use crate::config::IniConfig;
use crate::IniError;

/// Export a parsed document to JSON.
///
/// Values map directly: strings, integers, floats and booleans to their JSON
/// counterparts, `key[]` lists to arrays, sections and `key[id]` maps to
/// objects with keys in file order.
///
/// # Examples
/// ```no_run
/// use better_ini::{IniConfig, export};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = IniConfig::from_file("app.ini")?;
/// println!("{}", export::to_json(config.document(), true)?);
/// # Ok(())
/// # }
/// ```
pub fn to_json(document: &Map, pretty: bool) -> Result<String, IniError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };

    rendered.map_err(|e| IniError::TypeError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
        code: Some(500),
    })
}

/// Parse an INI file and export it directly to pretty JSON.
///
/// # Errors
/// Returns error if the file doesn't exist or contains malformed INI.
pub fn export_ini_file<P: AsRef<Path>>(path: P) -> Result<String, IniError> {
    let config = IniConfig::from_file(path)?;
    to_json(config.document(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_export_keeps_types_and_order() {
        let config = IniConfig::from_str(
            "name = app\nport = 8080\nratio = 0.5\ndebug = TRUE\nhosts[] = a\nhosts[] = b\n[db:primary]\nurl = \"pg://x\"",
        )
        .unwrap();

        let json_output = to_json(config.document(), false).unwrap();
        assert!(json_output.starts_with(r#"{"name":"app","port":8080,"ratio":0.5,"debug":true"#));

        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(v["hosts"], serde_json::json!(["a", "b"]));
        assert_eq!(v["db"]["primary"]["url"], "pg://x");
    }

    #[test]
    fn test_export_ini_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[assoc]\narray[key1] = one\narray[key2] = two\n").unwrap();

        let json_output = export_ini_file(file.path()).expect("Failed to export file");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["assoc"]["array"]["key1"], "one");
        assert_eq!(v["assoc"]["array"]["key2"], "two");
    }

    #[test]
    fn test_export_missing_file() {
        let err = export_ini_file("/definitely/not/here.ini").unwrap_err();
        assert!(err.is_resource_error());
    }
}
