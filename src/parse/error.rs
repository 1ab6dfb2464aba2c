use std::fmt::Display;

use super::Layout;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The page parsed, but no weekday section could be located in it.
    NoDaySections(Layout),
    UnknownLayout(String),
}

impl Error {
    pub fn unknown_layout(name: &str) -> Self {
        Self::UnknownLayout(name.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDaySections(layout) => write!(
                f,
                "No weekday sections found using the {layout} layout; the page structure may have changed"
            ),
            Self::UnknownLayout(name) => write!(
                f,
                "Unknown page layout `{name}`, expected one of: auto, headings, containers, daypart"
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
