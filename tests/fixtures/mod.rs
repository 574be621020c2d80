//! Test fixtures for showtime-finder.
//!
//! Provides realistic test data including:
//! - Real Tokyo theater and station coordinates
//! - A record builder and a sample schedule file on disk

#![allow(dead_code)]

pub mod tokyo_theaters;

pub use tokyo_theaters::*;
