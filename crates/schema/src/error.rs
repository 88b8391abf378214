use std::fmt;

#[derive(Debug)]
pub enum SchemaError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Dictionary or template validation error (empty name, duplicate, etc.).
    ConfigValidation(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for SchemaError {}
