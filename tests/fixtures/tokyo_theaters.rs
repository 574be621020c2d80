//! Real Tokyo theater locations for test fixtures.
//!
//! Coordinates are approximate building positions.

use std::path::PathBuf;

use showtime_finder::model::{Movie, TheaterRecord};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

pub const TOKYO_STATION: Location = Location::new("東京駅", 35.6812, 139.7671);
pub const SHINJUKU_STATION: Location = Location::new("新宿駅", 35.6896, 139.7006);

pub const THEATERS: &[Location] = &[
    Location::new("TOHOシネマズ 新宿", 35.6951, 139.7020),
    Location::new("新宿ピカデリー", 35.6926, 139.7029),
    Location::new("TOHOシネマズ 日比谷", 35.6736, 139.7597),
    Location::new("TOHOシネマズ 日本橋", 35.6866, 139.7740),
    Location::new("TOHOシネマズ 六本木ヒルズ", 35.6604, 139.7292),
    Location::new("TOHOシネマズ 上野", 35.7126, 139.7745),
];

/// Build a scraped record at `location` showing `titles`.
pub fn record(location: &Location, titles: &[&str]) -> TheaterRecord {
    TheaterRecord {
        theater_name: location.name.to_string(),
        theater_name_en: String::new(),
        address: format!("{} 所在地", location.name),
        latitude: location.lat,
        longitude: location.lng,
        movies: titles
            .iter()
            .map(|title| Movie::new(*title, vec!["10:00".to_string(), "14:30".to_string()]))
            .collect(),
        scrape_date: "2025-03-01".to_string(),
    }
}

/// Path to the sample schedule document.
pub fn sample_schedule_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data/movie_schedules_sample.json")
}
