//! Renderer-ready view models for the movie list and the theater map.

use serde::Serialize;

use crate::catalog::resolve;
use crate::haversine::format_distance;
use crate::model::{MovieWithTheater, Theater, TheaterId, UserLocation};
use crate::normalize::{normalize_title, ScreenType, Subtitle, TheaterSeries};

/// Tokyo Station, used when the user's position is unknown.
pub const DEFAULT_CENTER: (f64, f64) = (35.6812, 139.7671);

pub const DEFAULT_ZOOM: u8 = 12;

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub default_center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    /// Title as scraped.
    pub title: String,
    /// Title with chain-specific decoration removed.
    pub display_title: String,
    pub subtitle: Subtitle,
    pub screen_type: ScreenType,
    pub theater_name: String,
    pub address: String,
    pub distance_label: Option<String>,
    pub showtimes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    /// Number of entries after filtering.
    pub total: usize,
    pub items: Vec<ListItem>,
}

impl ListView {
    /// Build from entries already filtered and sorted.
    ///
    /// Entries whose theater id is not in `theaters` are skipped.
    pub fn build(entries: &[MovieWithTheater], theaters: &[Theater]) -> Self {
        let items: Vec<ListItem> = entries
            .iter()
            .filter_map(|entry| {
                let theater = resolve(theaters, entry.theater)?;
                let normalized =
                    normalize_title(&entry.title, TheaterSeries::from_theater_name(&theater.name));
                Some(ListItem {
                    title: entry.title.clone(),
                    display_title: normalized.title,
                    subtitle: normalized.subtitle,
                    screen_type: normalized.screen_type,
                    theater_name: theater.name.clone(),
                    address: theater.address.clone(),
                    distance_label: theater.distance_km.map(format_distance),
                    showtimes: entry.showtimes.clone(),
                })
            })
            .collect();

        Self {
            total: items.len(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TheaterMarker {
    pub id: TheaterId,
    pub key: String,
    pub name: String,
    pub address: String,
    pub position: (f64, f64),
    pub distance_label: Option<String>,
    pub movie_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub user_marker: Option<(f64, f64)>,
    pub markers: Vec<TheaterMarker>,
}

impl MapView {
    pub fn build(theaters: &[Theater], location: Option<&UserLocation>, config: &MapConfig) -> Self {
        let user_marker = location.map(UserLocation::position);
        let markers = theaters
            .iter()
            .map(|theater| TheaterMarker {
                id: theater.id,
                key: theater.marker_key(),
                name: theater.name.clone(),
                address: theater.address.clone(),
                position: theater.position(),
                distance_label: theater.distance_km.map(format_distance),
                movie_count: theater.movies.len(),
            })
            .collect();

        Self {
            center: user_marker.unwrap_or(config.default_center),
            zoom: config.zoom,
            user_marker,
            markers,
        }
    }
}
