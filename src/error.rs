use std::fmt::{self, Display};
use std::io;

/// Everything that can go wrong while configuring or running a simulation
#[derive(Debug)]
pub enum SimError {
    /// out-of-range or inconsistent configuration
    InvalidParameter(String),
    Io(io::Error),
    Json(serde_json::Error),
    Logging(String),
}

impl SimError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        SimError::InvalidParameter(msg.into())
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimError::InvalidParameter(_))
    }
}

impl From<io::Error> for SimError {
    fn from(error: io::Error) -> Self {
        SimError::Io(error)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(error: serde_json::Error) -> Self {
        SimError::Json(error)
    }
}

impl std::error::Error for SimError {}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            SimError::Io(e) => write!(f, "io error: {e}"),
            SimError::Json(e) => write!(f, "json error: {e}"),
            SimError::Logging(msg) => write!(f, "unable to set up logging: {msg}"),
        }
    }
}
