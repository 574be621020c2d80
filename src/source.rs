//! Theater data sources: HTTP and local JSON file.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::model::{theaters_from_records, Theater, TheaterRecord};
use crate::traits::TheaterSource;

#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8080/data/movie_schedules_latest.json".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum FetchError {
    /// Transport failure or non-success status.
    Http(reqwest::Error),
    Io(io::Error),
    Parse(serde_json::Error),
    /// An earlier fetch in the same session failed with this message.
    PreviousFailure(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

impl From<io::Error> for FetchError {
    fn from(err: io::Error) -> Self {
        FetchError::Io(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http(err) => match err.status() {
                Some(status) => write!(f, "failed to fetch data: {}", status),
                None => write!(f, "failed to fetch data: {}", err),
            },
            FetchError::Io(err) => write!(f, "failed to read data: {}", err),
            FetchError::Parse(err) => write!(f, "malformed theater data: {}", err),
            FetchError::PreviousFailure(message) => f.write_str(message),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Http(err) => Some(err),
            FetchError::Io(err) => Some(err),
            FetchError::Parse(err) => Some(err),
            FetchError::PreviousFailure(_) => None,
        }
    }
}

/// Fetches the schedule JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    config: HttpSourceConfig,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(config: HttpSourceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

impl TheaterSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Theater>, FetchError> {
        debug!(url = %self.config.url, "fetching theater data");

        let body = self
            .client
            .get(&self.config.url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())?;

        parse_theaters(&body)
    }
}

/// Reads the schedule JSON from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TheaterSource for FileSource {
    fn fetch(&self) -> Result<Vec<Theater>, FetchError> {
        debug!(path = %self.path.display(), "reading theater data");
        let body = fs::read(&self.path)?;
        parse_theaters(&body)
    }
}

/// Decode a schedule document and assign theater ids.
pub fn parse_theaters(body: &[u8]) -> Result<Vec<Theater>, FetchError> {
    let records: Vec<TheaterRecord> = serde_json::from_slice(body)?;
    Ok(theaters_from_records(records))
}
