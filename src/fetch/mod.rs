use std::{fmt::Display, time::Duration};

use chrono::{NaiveDate, Weekday};
use reqwest::{Client, StatusCode};
use tracing::{instrument, Level};
use url::Url;

use crate::menu::WORKWEEK;
use crate::parse::DayPage;

static USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Short names for the Bon Appétit cafés this tool was written for.
static CAFE_LOCATIONS: &[(&str, &str)] = &[
    ("palo-alto", "snap-palo-alto"),
    ("santa-monica", "snap-santa-monica"),
    ("seattle", "snap-seattle"),
    ("san-francisco", "snap-san-francisco"),
    ("bellevue", "snap-bellevue"),
    ("new-york", "snap-new-york"),
];

#[derive(Debug)]
pub enum Error {
    Client(reqwest::Error),
    Timeout(Url),
    Status(Url, StatusCode),
    Request(Url, reqwest::Error),
}

impl Error {
    fn request(url: &Url, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(url.clone())
        } else {
            Self::Request(url.clone(), e)
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client(e) => write!(f, "Could not build HTTP client: {e}"),
            Self::Timeout(url) => write!(f, "Timed out fetching {url}"),
            Self::Status(url, status) => write!(f, "Fetching {url} returned {status}"),
            Self::Request(url, e) => write!(f, "Could not fetch {url}: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client(e) | Self::Request(_, e) => Some(e),
            Self::Timeout(_) | Self::Status(..) => None,
        }
    }
}

pub fn make_client(timeout: Duration) -> Result<Client, Error> {
    Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(Error::Client)
}

/// Fetches `url` once. Any non-2xx answer is an error.
#[instrument(skip(client, url), fields(url = %url), level = Level::DEBUG)]
pub async fn page(client: &Client, url: &Url) -> Result<String, Error> {
    let start = std::time::Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| Error::request(url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status(url.clone(), status));
    }
    let text = response.text().await.map_err(|e| Error::request(url, e))?;
    log::trace!("Got text of {url} in \t {:?}", start.elapsed());
    Ok(text)
}

/// A Bon Appétit café site, which publishes one page per date at
/// `/cafe/{yyyy-mm-dd}/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cafe {
    base: Url,
}

impl Cafe {
    /// `location` is either a known short name (`palo-alto`) or the site's
    /// subdomain itself.
    pub fn new(location: &str) -> Result<Self, url::ParseError> {
        let location = location.trim().to_lowercase();
        let subdomain = CAFE_LOCATIONS
            .iter()
            .find(|(name, _)| *name == location)
            .map_or(location.as_str(), |(_, subdomain)| *subdomain);
        let base = Url::parse(&format!("https://{subdomain}.cafebonappetit.com/"))?;
        Ok(Self { base })
    }

    #[cfg(test)]
    pub fn at(base: Url) -> Self {
        Self { base }
    }

    pub fn day_url(&self, date: NaiveDate) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("/cafe/{}/", date.format("%Y-%m-%d")));
        url
    }
}

/// Monday to Friday of the week starting at `week_of`.
pub fn date_iter(week_of: NaiveDate) -> impl Iterator<Item = (Weekday, NaiveDate)> {
    (0..).zip(WORKWEEK).map(move |(offset, day)| (day, week_of + chrono::Duration::days(offset)))
}

/// Fetches the five daily pages of `cafe`, one after the other. The first
/// failure ends the run.
#[instrument(skip_all, fields(week_of = %week_of), level = Level::DEBUG)]
pub async fn week_pages(
    client: &Client,
    cafe: &Cafe,
    week_of: NaiveDate,
) -> Result<Vec<DayPage>, Error> {
    let mut pages = Vec::with_capacity(WORKWEEK.len());
    for (day, date) in date_iter(week_of) {
        let url = cafe.day_url(date);
        log::info!("Fetching menu for {day} {date}");
        let html = page(client, &url).await?;
        pages.push(DayPage { day, url, html });
    }
    Ok(pages)
}
