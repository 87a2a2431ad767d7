use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DataError {
    Io(String),
    Http(String),
    Parse(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(msg) => write!(f, "Could not read campaign data: {msg}"),
            DataError::Http(msg) => write!(f, "Could not fetch campaign data: {msg}"),
            DataError::Parse(msg) => write!(f, "Campaign data is malformed: {msg}"),
        }
    }
}

impl Error for DataError {}
