use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub enum ConfigError {
    Host(String),
    Encoding(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Host(s) => write!(f, "Host error: {}", s),
            ConfigError::Encoding(s) => write!(f, "Encoding error: {}", s),
        }
    }
}

impl Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Encoding(error.to_string())
    }
}
