//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// A JSON-Lines record that could not be parsed. `line` is 1-based.
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Config(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "malformed json: {}", e),
            Error::MalformedRecord { line, source } => {
                write!(f, "malformed json on line {}: {}", line, source)
            }
            Error::Glob(e) => write!(f, "could not read shard: {}", e),
            Error::GlobPattern(e) => write!(f, "invalid shard pattern: {}", e),
            Error::Config(s) => write!(f, "invalid configuration: {}", s),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::MalformedRecord { source, .. } => Some(source),
            Error::Glob(e) => Some(e),
            Error::GlobPattern(e) => Some(e),
            Error::Config(_) | Error::Custom(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
