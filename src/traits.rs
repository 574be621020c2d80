//! Seams to the outside world: where theater data and the user's position
//! come from.

use crate::model::{LocationResult, Theater};
use crate::source::FetchError;

/// Provides the theater dataset.
///
/// Called once per session. Returned theaters carry ids matching their
/// position in the returned vector.
pub trait TheaterSource {
    fn fetch(&self) -> Result<Vec<Theater>, FetchError>;
}

/// Provides the user's position, best effort.
///
/// Any failure (unsupported, permission denied, timeout) is reported as
/// `LocationResult::Unavailable` with a reason.
pub trait LocationProvider {
    fn locate(&self) -> LocationResult;
}

impl<T: TheaterSource + ?Sized> TheaterSource for &T {
    fn fetch(&self) -> Result<Vec<Theater>, FetchError> {
        (**self).fetch()
    }
}

impl<T: LocationProvider + ?Sized> LocationProvider for &T {
    fn locate(&self) -> LocationResult {
        (**self).locate()
    }
}
