//! showtime-finder core
//!
//! Loads a theater schedule dataset, measures distance from the user, and
//! projects it into a searchable movie list and a theater map.

pub mod traits;
pub mod model;
pub mod haversine;
pub mod catalog;
pub mod normalize;
pub mod source;
pub mod location;
pub mod view;
pub mod session;
