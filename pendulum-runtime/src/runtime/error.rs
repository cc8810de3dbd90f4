use std::{error, fmt, io};

use pendulum_core::DomainError;

#[derive(Debug)]
pub enum Error {
    Domain(DomainError),
    Io(io::Error),
    Config(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Domain(e) => write!(f, "domain error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Config(e) => write!(f, "config error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Domain(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
        }
    }
}

impl From<DomainError> for Error {
    fn from(e: DomainError) -> Self {
        Error::Domain(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e)
    }
}
