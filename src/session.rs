//! Session state and the load-then-enrich sequence.

use tracing::{debug, error, info, warn};

use crate::catalog::{annotate_distances, filter_by_search, flatten_to_movie_list, sort_by_distance};
use crate::model::{LocationResult, MovieWithTheater, Theater, UserLocation};
use crate::source::FetchError;
use crate::traits::{LocationProvider, TheaterSource};
use crate::view::{ListView, MapConfig, MapView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Ready,
    /// The data source failed; holds a human-readable message.
    Error(String),
}

/// Owns everything the list and map views are built from.
///
/// `load` runs once. Search changes re-filter and re-sort the projected
/// movies without touching the source or the location provider again.
pub struct Session<S, L> {
    source: S,
    locator: L,
    map_config: MapConfig,
    status: SessionStatus,
    loaded: bool,
    theaters: Vec<Theater>,
    movies: Vec<MovieWithTheater>,
    location: Option<LocationResult>,
    search: String,
}

impl<S, L> Session<S, L>
where
    S: TheaterSource,
    L: LocationProvider,
{
    pub fn new(source: S, locator: L) -> Self {
        Self {
            source,
            locator,
            map_config: MapConfig::default(),
            status: SessionStatus::Loading,
            loaded: false,
            theaters: Vec::new(),
            movies: Vec::new(),
            location: None,
            search: String::new(),
        }
    }

    pub fn with_map_config(mut self, map_config: MapConfig) -> Self {
        self.map_config = map_config;
        self
    }

    /// Fetch the catalog, then try to locate the user and annotate distances.
    ///
    /// A fetch failure moves the session to `SessionStatus::Error` and is
    /// returned. An unavailable location is not an error. Only the first
    /// call does any work: later calls return `Ok(())` if that load
    /// succeeded, or `FetchError::PreviousFailure` carrying its message.
    pub fn load(&mut self) -> Result<(), FetchError> {
        if self.loaded {
            warn!("session already loaded; ignoring repeated load");
            return match &self.status {
                SessionStatus::Error(message) => Err(FetchError::PreviousFailure(message.clone())),
                _ => Ok(()),
            };
        }
        self.loaded = true;
        self.status = SessionStatus::Loading;
        info!("loading theater data");

        let theaters = match self.source.fetch() {
            Ok(theaters) => theaters,
            Err(err) => {
                error!(error = %err, "theater data fetch failed");
                self.status = SessionStatus::Error(err.to_string());
                return Err(err);
            }
        };

        let location = self.locator.locate();
        self.theaters = match &location {
            LocationResult::Resolved(user) => {
                debug!(latitude = user.latitude, longitude = user.longitude, "user located");
                annotate_distances(&theaters, &location)
            }
            LocationResult::Unavailable(reason) => {
                warn!(reason = %reason, "user location unavailable; showing theaters without distances");
                theaters
            }
        };
        self.movies = flatten_to_movie_list(&self.theaters);
        self.location = Some(location);
        self.status = SessionStatus::Ready;

        info!(
            theaters = self.theaters.len(),
            movies = self.movies.len(),
            located = self.location().is_some(),
            "theater data ready"
        );
        Ok(())
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        debug!(term = %self.search, "search updated");
    }

    /// Projected movies matching the current search, nearest theater first.
    pub fn visible_movies(&self) -> Vec<MovieWithTheater> {
        let filtered = filter_by_search(&self.movies, &self.theaters, &self.search);
        sort_by_distance(&filtered, &self.theaters)
    }

    pub fn list_view(&self) -> ListView {
        ListView::build(&self.visible_movies(), &self.theaters)
    }

    pub fn map_view(&self) -> MapView {
        MapView::build(&self.theaters, self.location(), &self.map_config)
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn theaters(&self) -> &[Theater] {
        &self.theaters
    }

    /// All projected movies, unfiltered, in catalog order.
    pub fn movies(&self) -> &[MovieWithTheater] {
        &self.movies
    }

    pub fn location(&self) -> Option<&UserLocation> {
        self.location.as_ref().and_then(LocationResult::location)
    }

    pub fn location_result(&self) -> Option<&LocationResult> {
        self.location.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}
