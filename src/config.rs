use std::{env, fmt::Display, path::PathBuf, time::Duration};

use url::Url;

use crate::fetch::Cafe;
use crate::parse::{self, Layout};

pub const DEFAULT_LOCATION: &str = "palo-alto";
pub const DEFAULT_OUTPUT: &str = "weekly_lunch_menu.html";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the week's menu comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// One page listing the whole week.
    Page { url: Url, layout: Layout },
    /// A Bon Appétit café site with one page per day.
    Cafe(Cafe),
}

/// Everything a run needs, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub source: Source,
    pub webhook_url: Url,
    pub location_label: String,
    pub output_path: PathBuf,
    pub timeout: Duration,
}

// the webhook URL is a credential
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("source", &self.source)
            .field("webhook_url", &"<redacted>")
            .field("location_label", &self.location_label)
            .field("output_path", &self.output_path)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug)]
pub enum Error {
    Missing(&'static str),
    InvalidUrl(&'static str, url::ParseError),
    InvalidLayout(parse::Error),
    DaypartNeedsCafe,
    InvalidTimeout(String),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::InvalidLayout(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(var) => write!(f, "{var} must be set"),
            Self::InvalidUrl(var, e) => write!(f, "{var} is not a valid URL: {e}"),
            Self::InvalidLayout(e) => write!(f, "MENU_LAYOUT: {e}"),
            Self::DaypartNeedsCafe => write!(
                f,
                "MENU_LAYOUT=daypart reads per-day café pages; unset MENU_SOURCE_URL and set CAFE_LOCATION instead"
            ),
            Self::InvalidTimeout(value) => write!(
                f,
                "MENU_HTTP_TIMEOUT_SECS must be a positive number of seconds, got `{value}`"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// "palo-alto" -> "Palo Alto"
fn title_case(location: &str) -> String {
    location
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let get = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let webhook_url = get("SLACK_WEBHOOK_URL").ok_or(Error::Missing("SLACK_WEBHOOK_URL"))?;
        let webhook_url =
            Url::parse(&webhook_url).map_err(|e| Error::InvalidUrl("SLACK_WEBHOOK_URL", e))?;

        let location = get("CAFE_LOCATION").unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let layout = get("MENU_LAYOUT")
            .map(|name| name.parse::<Layout>())
            .transpose()?;

        let source = match get("MENU_SOURCE_URL") {
            Some(url) => {
                let url = Url::parse(&url).map_err(|e| Error::InvalidUrl("MENU_SOURCE_URL", e))?;
                let layout = layout.unwrap_or_default();
                if layout == Layout::Daypart {
                    return Err(Error::DaypartNeedsCafe);
                }
                Source::Page { url, layout }
            }
            None => {
                if let Some(layout) = layout.filter(|l| *l != Layout::Daypart) {
                    log::warn!("MENU_LAYOUT={layout} ignored: café pages always use the daypart layout");
                }
                let cafe = Cafe::new(&location).map_err(|e| Error::InvalidUrl("CAFE_LOCATION", e))?;
                Source::Cafe(cafe)
            }
        };

        let location_label = get("MENU_LOCATION_LABEL").unwrap_or_else(|| title_case(&location));
        let output_path = get("MENU_OUTPUT").map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);
        let timeout = match get("MENU_HTTP_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT,
            Some(secs) => match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(Error::InvalidTimeout(secs)),
            },
        };

        Ok(Self {
            source,
            webhook_url,
            location_label,
            output_path,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const HOOK: &str = "https://hooks.slack.com/services/T000/B000/XXXX";

    fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_webhook_is_required() {
        assert!(matches!(
            config(&[]),
            Err(Error::Missing("SLACK_WEBHOOK_URL"))
        ));
        assert!(matches!(
            config(&[("SLACK_WEBHOOK_URL", "   ")]),
            Err(Error::Missing("SLACK_WEBHOOK_URL"))
        ));
        assert!(matches!(
            config(&[("SLACK_WEBHOOK_URL", "not a url")]),
            Err(Error::InvalidUrl("SLACK_WEBHOOK_URL", _))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("SLACK_WEBHOOK_URL", HOOK)]).unwrap();
        assert_eq!(config.webhook_url.as_str(), HOOK);
        assert_eq!(config.source, Source::Cafe(Cafe::new("palo-alto").unwrap()));
        assert_eq!(config.location_label, "Palo Alto");
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(!format!("{config:?}").contains("XXXX"));
    }

    #[test]
    fn test_page_source() {
        let config = config(&[
            ("SLACK_WEBHOOK_URL", HOOK),
            ("MENU_SOURCE_URL", "https://cafe.example.com/lunch"),
            ("MENU_LAYOUT", "containers"),
            ("MENU_LOCATION_LABEL", "HQ Café"),
            ("MENU_OUTPUT", "/tmp/menu.html"),
            ("MENU_HTTP_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(
            config.source,
            Source::Page {
                url: "https://cafe.example.com/lunch".parse().unwrap(),
                layout: Layout::Containers,
            }
        );
        assert_eq!(config.location_label, "HQ Café");
        assert_eq!(config.output_path, PathBuf::from("/tmp/menu.html"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[("SLACK_WEBHOOK_URL", HOOK), ("MENU_LAYOUT", "tables")]),
            Err(Error::InvalidLayout(_))
        ));
        assert!(matches!(
            config(&[
                ("SLACK_WEBHOOK_URL", HOOK),
                ("MENU_SOURCE_URL", "https://cafe.example.com/"),
                ("MENU_LAYOUT", "daypart"),
            ]),
            Err(Error::DaypartNeedsCafe)
        ));
        assert!(matches!(
            config(&[("SLACK_WEBHOOK_URL", HOOK), ("MENU_HTTP_TIMEOUT_SECS", "0")]),
            Err(Error::InvalidTimeout(_))
        ));
        assert!(matches!(
            config(&[("SLACK_WEBHOOK_URL", HOOK), ("CAFE_LOCATION", "two words")]),
            Err(Error::InvalidUrl("CAFE_LOCATION", _))
        ));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("san-francisco"), "San Francisco");
        assert_eq!(title_case("snap_new-york"), "Snap New York");
    }
}
