//! Location providers.

use crate::model::{LocationResult, UserLocation};
use crate::traits::LocationProvider;

/// Always resolves to the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub UserLocation);

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self(UserLocation::new(latitude, longitude))
    }
}

impl LocationProvider for FixedLocation {
    fn locate(&self) -> LocationResult {
        LocationResult::Resolved(self.0)
    }
}

/// Never resolves.
#[derive(Debug, Clone)]
pub struct NoLocation {
    pub reason: String,
}

impl Default for NoLocation {
    fn default() -> Self {
        Self {
            reason: "geolocation is not supported".to_string(),
        }
    }
}

impl NoLocation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl LocationProvider for NoLocation {
    fn locate(&self) -> LocationResult {
        LocationResult::Unavailable(self.reason.clone())
    }
}
