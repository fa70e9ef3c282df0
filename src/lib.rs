pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod config;

pub use ast::{Map, Value};
pub use error::IniError;
pub use config::IniConfig;
pub use parser::ParseOptions;
