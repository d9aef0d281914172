use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StandingsError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for StandingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for StandingsError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(err.to_string())
        } else {
            Self::Io(err.to_string())
        }
    }
}

impl From<String> for StandingsError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for StandingsError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
