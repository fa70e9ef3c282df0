// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use crate::ast::{Map, Value};
use crate::IniError;

fn expected(kind: &str, value: &Value, hint: &str, code: u32) -> IniError {
    IniError::type_error(
        format!("Expected {}, got {} {:?}", kind, value.type_name(), value),
        hint,
        code,
    )
}

impl TryFrom<Value> for String {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(expected("string", &value, "Use a string value in your config", 401)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(expected("boolean", &value, "Use true or false", 404)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(expected("integer", &value, "Use a whole number in your config", 402)),
        }
    }
}

// Bounded integers go through i64 and are range checked.
macro_rules! bounded_integer {
    ($($ty:ty),*) => {$(
        impl TryFrom<Value> for $ty {
            type Error = IniError;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                let n = i64::try_from(value)?;
                <$ty>::try_from(n).map_err(|_| {
                    IniError::type_error(
                        format!("Number {} out of range for {}", n, stringify!($ty)),
                        &format!(
                            "Use a number between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        ),
                        403,
                    )
                })
            }
        }
    )*};
}

bounded_integer!(i32, u16, u32, u64, usize);

impl TryFrom<Value> for f64 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(n) => Ok(n as f64),
            _ => Err(expected("number", &value, "Use a number value in your config", 402)),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        f64::try_from(value).map(|f| f as f32)
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = IniError>,
{
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            _ => Err(expected("list", &value, "Use key[] = ... entries", 405)),
        }
    }
}

impl<T> TryFrom<Value> for HashMap<String, T>
where
    T: TryFrom<Value, Error = IniError>,
{
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => map
                .into_iter()
                .map(|(k, v)| T::try_from(v).map(|v| (k, v)))
                .collect(),
            _ => Err(expected("map", &value, "Use a section or key[id] = ... entries", 406)),
        }
    }
}

impl TryFrom<Value> for Map {
    type Error = IniError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map),
            _ => Err(expected("map", &value, "Use a section or key[id] = ... entries", 406)),
        }
    }
}
