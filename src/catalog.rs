//! Catalog projection: distances, flattening, search, and ordering.
//!
//! Every function here takes its input by reference and returns a new
//! collection. Movie entries refer back to theaters by `TheaterId`, so the
//! theater table must be passed alongside them.

use std::cmp::Ordering;

use crate::model::{LocationResult, MovieWithTheater, Theater, TheaterId};

/// Look up a theater by id.
pub fn resolve(theaters: &[Theater], id: TheaterId) -> Option<&Theater> {
    theaters.get(id.index()).filter(|theater| theater.id == id)
}

/// Attach the distance from `location` to every theater.
///
/// When the location is unavailable every distance is cleared.
pub fn annotate_distances(theaters: &[Theater], location: &LocationResult) -> Vec<Theater> {
    theaters
        .iter()
        .map(|theater| Theater {
            distance_km: location.location().map(|user| user.distance_to(theater)),
            ..theater.clone()
        })
        .collect()
}

/// One entry per (movie, theater) pair, in theater order then movie order.
pub fn flatten_to_movie_list(theaters: &[Theater]) -> Vec<MovieWithTheater> {
    theaters
        .iter()
        .flat_map(|theater| {
            theater.movies.iter().map(move |movie| MovieWithTheater {
                title: movie.title.clone(),
                showtimes: movie.showtimes.clone(),
                theater: theater.id,
            })
        })
        .collect()
}

/// Keep entries whose title or theater name contains `term`, ignoring case.
///
/// An empty term keeps everything.
pub fn filter_by_search(
    entries: &[MovieWithTheater],
    theaters: &[Theater],
    term: &str,
) -> Vec<MovieWithTheater> {
    if term.is_empty() {
        return entries.to_vec();
    }

    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&needle)
                || resolve(theaters, entry.theater)
                    .is_some_and(|theater| theater.name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by the referenced theater's distance, nearest first.
///
/// Entries without a distance go last, in their input order.
pub fn sort_by_distance(entries: &[MovieWithTheater], theaters: &[Theater]) -> Vec<MovieWithTheater> {
    let distance_of = |entry: &MovieWithTheater| {
        resolve(theaters, entry.theater).and_then(|theater| theater.distance_km)
    };

    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| compare_distance(distance_of(a), distance_of(b)));
    sorted
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
