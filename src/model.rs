//! Theater and movie data model.
//!
//! `TheaterRecord` mirrors the scraped JSON rows. `Theater` is the loaded
//! form, carrying an id assigned at load time and an optional distance.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;

/// A movie currently showing at one theater.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Display-formatted times, in listing order.
    #[serde(default)]
    pub showtimes: Vec<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, showtimes: Vec<String>) -> Self {
        Self {
            title: title.into(),
            showtimes,
        }
    }
}

/// Stable theater identifier: the theater's position in the loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TheaterId(pub usize);

impl TheaterId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One row of the schedule dataset, as written by the scraper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheaterRecord {
    pub theater_name: String,
    #[serde(default)]
    pub theater_name_en: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub scrape_date: String,
}

/// A loaded theater.
#[derive(Debug, Clone, PartialEq)]
pub struct Theater {
    pub id: TheaterId,
    pub name: String,
    pub name_en: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub movies: Vec<Movie>,
    pub scrape_date: String,
    /// Distance from the user in kilometers. Only set by annotation.
    pub distance_km: Option<f64>,
}

impl Theater {
    fn from_record(id: TheaterId, record: TheaterRecord) -> Self {
        Self {
            id,
            name: record.theater_name,
            name_en: record.theater_name_en,
            address: record.address,
            latitude: record.latitude,
            longitude: record.longitude,
            movies: record.movies,
            scrape_date: record.scrape_date,
            distance_km: None,
        }
    }

    /// Location coordinates (lat, lng).
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Name and coordinates joined into a label key for map markers.
    ///
    /// Not unique: two theaters with the same name and coordinates collide.
    /// Use `id` to tell theaters apart.
    pub fn marker_key(&self) -> String {
        format!("{}-{}-{}", self.name, self.latitude, self.longitude)
    }
}

/// Assign ids to scraped records in dataset order.
pub fn theaters_from_records(records: Vec<TheaterRecord>) -> Vec<Theater> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| Theater::from_record(TheaterId(index), record))
        .collect()
}

/// The user's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl UserLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Great-circle distance to a theater in kilometers.
    pub fn distance_to(&self, theater: &Theater) -> f64 {
        distance_km(self.latitude, self.longitude, theater.latitude, theater.longitude)
    }
}

/// Outcome of asking for the user's position.
///
/// Failure is a value, not an error: catalog display never depends on it.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationResult {
    Resolved(UserLocation),
    Unavailable(String),
}

impl LocationResult {
    pub fn location(&self) -> Option<&UserLocation> {
        match self {
            LocationResult::Resolved(location) => Some(location),
            LocationResult::Unavailable(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, LocationResult::Resolved(_))
    }
}

/// A movie paired with the theater showing it.
///
/// `theater` indexes the theater table the entry was projected from.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieWithTheater {
    pub title: String,
    pub showtimes: Vec<String>,
    pub theater: TheaterId,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "theater_name": "TOHOシネマズ 日比谷",
            "theater_name_en": "TOHO Cinemas Hibiya",
            "address": "東京都千代田区有楽町1-1-2",
            "latitude": 35.6736,
            "longitude": 139.7597,
            "movies": [
                { "title": "名探偵コナン", "showtimes": ["10:00", "13:30"] }
            ],
            "scrape_date": "2025-03-01"
        },
        {
            "theater_name": "新宿ピカデリー",
            "latitude": 35.6926,
            "longitude": 139.7029
        }
    ]"#;

    #[test]
    fn test_records_deserialize_with_defaults() {
        let records: Vec<TheaterRecord> = serde_json::from_str(SAMPLE).expect("parse sample");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].movies[0].showtimes, vec!["10:00", "13:30"]);
        assert!(records[1].movies.is_empty());
        assert_eq!(records[1].theater_name_en, "");
        assert_eq!(records[1].scrape_date, "");
    }

    #[test]
    fn test_record_missing_coordinates_is_rejected() {
        let result: Result<Vec<TheaterRecord>, _> =
            serde_json::from_str(r#"[{ "theater_name": "no coords" }]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ids_follow_dataset_order() {
        let records: Vec<TheaterRecord> = serde_json::from_str(SAMPLE).expect("parse sample");
        let theaters = theaters_from_records(records);
        for (index, theater) in theaters.iter().enumerate() {
            assert_eq!(theater.id, TheaterId(index));
            assert!(theater.distance_km.is_none());
        }
        assert_eq!(theaters[0].name, "TOHOシネマズ 日比谷");
        assert_eq!(theaters[0].name_en, "TOHO Cinemas Hibiya");
    }

    #[test]
    fn test_marker_key() {
        let records: Vec<TheaterRecord> = serde_json::from_str(SAMPLE).expect("parse sample");
        let theaters = theaters_from_records(records);
        assert_eq!(theaters[1].marker_key(), "新宿ピカデリー-35.6926-139.7029");
    }

    #[test]
    fn test_location_result_accessors() {
        let resolved = LocationResult::Resolved(UserLocation::new(35.0, 139.0));
        let unavailable = LocationResult::Unavailable("denied".to_string());
        assert!(resolved.is_resolved());
        assert_eq!(resolved.location().map(|l| l.position()), Some((35.0, 139.0)));
        assert!(!unavailable.is_resolved());
        assert!(unavailable.location().is_none());
    }
}
