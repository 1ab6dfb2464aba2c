use crate::{config, fetch, notify, parse};
use std::fmt::{self, Display, Formatter};
use std::process::ExitCode;

#[derive(Debug)]
pub enum Error {
    Config(config::Error),
    Fetch(fetch::Error),
    Parse(parse::Error),
    Delivery(notify::Error),
}

impl Error {
    /// 2 for a run that never started, 1 for one that failed along the way.
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Fetch(_) | Self::Parse(_) | Self::Delivery(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<config::Error> for Error {
    fn from(e: config::Error) -> Self {
        Self::Config(e)
    }
}

impl From<fetch::Error> for Error {
    fn from(e: fetch::Error) -> Self {
        Self::Fetch(e)
    }
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<notify::Error> for Error {
    fn from(e: notify::Error) -> Self {
        Self::Delivery(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Delivery(e) => write!(f, "Delivery error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
