// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::Value;

impl IniConfig {
    /// Look up a value by dot path.
    ///
    /// A key that exists verbatim at the top level wins, dots and all, so a
    /// global `section.key = x` is found before `[section] key = y`. Otherwise
    /// the path is split on `.` and walked through nested maps.
    ///
    /// # Examples
    /// ```no_run
    /// # use better_ini::IniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = IniConfig::from_file("app.ini")?;
    /// if let Some(host) = config.get_value("server.host") {
    ///     println!("host = {:?}", host);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_value(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.document.get(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.document.get(first)?;
        for seg in segments {
            current = current.as_map()?.get(seg)?;
        }
        Some(current)
    }

    /// [`IniConfig::get_value`] with a fallback.
    pub fn get_value_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get_value(path).unwrap_or(default)
    }

    /// Get a typed value using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use better_ini::IniConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = IniConfig::from_file("app.ini")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let hosts: Vec<String> = config.get("server.hosts")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// [`IniError::MissingKey`] if nothing lives at `path`,
    /// [`IniError::TypeError`] if the value does not convert to `T`.
    pub fn get<T>(&self, path: &str) -> Result<T, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        let value = self
            .get_value(path)
            .cloned()
            .ok_or_else(|| IniError::missing_key(path))?;
        T::try_from(value).map_err(|e| match e {
            IniError::TypeError { message, hint, code } => IniError::TypeError {
                message: format!("{} at `{}`", message, path),
                hint,
                code,
            },
            other => other,
        })
    }

    /// Like [`IniConfig::get`], but a missing path is `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, IniError>
    where
        T: TryFrom<Value, Error = IniError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(IniError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Typed value, or `default` when missing or of the wrong type.
    ///
    /// ```no_run
    /// # use better_ini::IniConfig;
    /// # let config = IniConfig::from_file("app.ini").unwrap();
    /// let timeout = config.get_or("server.timeout", 30i64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = IniError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Keys of the map at `path`, in file order. An empty path lists the top level.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, IniError> {
        if path.is_empty() {
            return Ok(self.document.keys().cloned().collect());
        }

        match self.get_value(path) {
            Some(Value::Map(map)) => Ok(map.keys().cloned().collect()),
            Some(other) => Err(IniError::type_error(
                format!("Path '{}' is a {}, not a map", path, other.type_name()),
                "Only sections and key[id] entries have keys",
                406,
            )),
            None => Err(IniError::missing_key(path)),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_some()
    }
}
