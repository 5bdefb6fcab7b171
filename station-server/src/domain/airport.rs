//! Airport records.

use super::{Frequency, Runway};

/// Conversion factor from feet to meters.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Convert an elevation in feet to whole meters, rounding half away from zero.
pub fn feet_to_meters(feet: i64) -> i64 {
    (feet as f64 * METERS_PER_FOOT).round() as i64
}

/// An airport resolved from the reference datasets.
///
/// Runways and frequencies are joined by identifier, not owned by the
/// airport row; they start empty and are attached once resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Numeric row id from the dataset, if the column exists.
    pub id: Option<String>,

    /// Identifier as written in the dataset.
    pub icao: String,

    pub name: String,

    /// Latitude in decimal degrees.
    pub lat: f64,

    /// Longitude in decimal degrees.
    pub lon: f64,

    pub elevation_ft: i64,

    pub runways: Vec<Runway>,

    pub freqs: Vec<Frequency>,
}

impl Airport {
    /// Elevation in meters, always derived from `elevation_ft`.
    pub fn elevation_m(&self) -> i64 {
        feet_to_meters(self.elevation_ft)
    }
}
