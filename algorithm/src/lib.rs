// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Runway geometry under a local flat-earth approximation.
//!
//! Geographic coordinates are linearized around a reference point into
//! northing/easting meters. This is only accurate within a few kilometers
//! of the reference point, which is the scale of an airport.

pub mod takeoff;

use common::{
    position::Position,
    runway::{Runway, RunwayLine, RunwaySegment},
};
use std::collections::HashSet;
use thiserror::Error;

/// Meters per degree of longitude at the equator (equatorial circumference / 360).
pub const EARTH_METERS_PER_DEGREE_LON: f64 = 40_075_017.0 / 360.0;

/// Meters per degree of latitude (polar circumference / 360).
pub const EARTH_METERS_PER_DEGREE_LAT: f64 = 40_007_863.0 / 360.0;

pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Runway must have positive length, got offset northing {northing} m, easting {easting} m")]
    InvalidRunwayGeometry { northing: f64, easting: f64 },
}

/// A planar northing/easting frame with its origin at a geographic position.
///
/// One degree of latitude maps to [`EARTH_METERS_PER_DEGREE_LAT`] meters.
/// One degree of longitude maps to [`EARTH_METERS_PER_DEGREE_LON`] scaled by
/// the cosine of the origin latitude, since meridians converge toward the poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalPlanarFrame {
    origin: Position,
    meters_per_degree_lon: f64,
}

impl LocalPlanarFrame {
    pub fn new(origin: &Position) -> Self {
        LocalPlanarFrame {
            origin: *origin,
            meters_per_degree_lon: EARTH_METERS_PER_DEGREE_LON * origin.latitude.to_radians().cos(),
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns `(northing, easting)` of `pos` relative to the origin in meters.
    pub fn to_local(&self, pos: &Position) -> (f64, f64) {
        let northing = (pos.latitude - self.origin.latitude) * EARTH_METERS_PER_DEGREE_LAT;
        let easting = (pos.longitude - self.origin.longitude) * self.meters_per_degree_lon;
        (northing, easting)
    }

    /// Inverse of [`LocalPlanarFrame::to_local`].
    pub fn to_geodetic(&self, northing: f64, easting: f64) -> Position {
        Position {
            latitude: self.origin.latitude + northing / EARTH_METERS_PER_DEGREE_LAT,
            longitude: self.origin.longitude + easting / self.meters_per_degree_lon,
        }
    }
}

/// Checks that a runway has a direction and returns its length in meters.
///
/// Errors:
/// - [`GeometryError::InvalidRunwayGeometry`] if the offset has zero length or is NaN.
pub fn validate_runway(runway: &RunwaySegment) -> GeometryResult<f64> {
    let length = runway.length();
    if length.is_nan() || length <= 0.0 {
        return Err(GeometryError::InvalidRunwayGeometry {
            northing: runway.northing,
            easting: runway.easting,
        });
    }
    Ok(length)
}

/// Calculates the distance in meters from a position to the closest point of a runway.
///
/// The position is converted into a [`LocalPlanarFrame`] centered at the runway
/// anchor. The position vector is projected onto the runway direction and the
/// projection is clamped to the runway ends:
///
/// - projection before the anchor: distance to the anchor,
/// - projection past the far end: distance to the far end,
/// - otherwise: perpendicular distance to the runway line.
///
/// # Parameters
/// - `runway`: The runway geometry.
/// - `pos`: The position of interest.
///
/// # Returns
/// The distance in meters, or [`GeometryError::InvalidRunwayGeometry`] if the runway
/// has no length and therefore no direction.
///
/// # Notes
/// - Coordinates are not range checked.
/// - Accuracy decreases with the distance between `pos` and the runway.
pub fn distance_from_runway(runway: &RunwaySegment, pos: &Position) -> GeometryResult<f64> {
    let runway_length = validate_runway(runway)?;
    let (mut n, mut e) = LocalPlanarFrame::new(&runway.anchor).to_local(pos);

    // Signed distance from the anchor to the foot of the perpendicular.
    let d = (n * runway.northing + e * runway.easting) / runway_length;

    if d > runway_length {
        n -= runway.northing;
        e -= runway.easting;
    } else if d > 0.0 {
        n -= d * runway.northing / runway_length;
        e -= d * runway.easting / runway_length;
    }

    Ok((n * n + e * e).sqrt())
}

/// Flat-argument form of [`distance_from_runway`].
///
/// # Parameters
/// - `runway_lat`, `runway_lon`: runway start in degrees.
/// - `runway_n`, `runway_e`: offset of the runway end relative to the start in meters.
/// - `lat`, `lon`: position of interest in degrees.
pub fn distance(
    runway_lat: f64,
    runway_lon: f64,
    runway_n: f64,
    runway_e: f64,
    lat: f64,
    lon: f64,
) -> GeometryResult<f64> {
    distance_from_runway(
        &RunwaySegment::new(Position::new(runway_lat, runway_lon), runway_n, runway_e),
        &Position::new(lat, lon),
    )
}

/// Builds a runway table row from the two geographic ends of a runway.
///
/// The western end (ties: the southern one) becomes the anchor. The anchor is
/// rounded to five decimal places, which is around one meter, and the offset
/// to the other end is rounded to whole meters. Halves round to the even
/// neighbour.
pub fn runway_from_endpoints(airport_id: &str, first: &Position, second: &Position) -> Runway {
    let (anchor, end) = if (first.longitude, first.latitude) <= (second.longitude, second.latitude)
    {
        (first, second)
    } else {
        (second, first)
    };
    let (northing, easting) = LocalPlanarFrame::new(anchor).to_local(end);
    Runway {
        airport_id: airport_id.to_owned(),
        latitude: round_to(anchor.latitude, 5),
        longitude: round_to(anchor.longitude, 5),
        northing: northing.round_ties_even(),
        easting: easting.round_ties_even(),
    }
}

/// Builds the runway table rows of all runway lines of the given airports.
///
/// Lines of other airports are dropped, the order of the remaining lines is kept.
pub fn runways_of_airports(lines: &[RunwayLine], airports: &HashSet<String>) -> Vec<Runway> {
    lines
        .iter()
        .filter(|line| airports.contains(&line.airport_id))
        .map(|line| runway_from_endpoints(&line.airport_id, &line.ends[0], &line.ends[1]))
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests;
