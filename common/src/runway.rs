// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A runway given by one of its ends and the offset to the other end.
///
/// The offset is expressed in meters in a local planar frame centered at
/// `anchor`: `northing` grows toward increasing latitude and `easting`
/// toward increasing longitude.
///
/// # Example
///
/// ```rust
/// use common::{position::Position, runway::RunwaySegment};
///
/// let segment = RunwaySegment {
///     anchor: Position::new(32.73712, -117.20436),
///     northing: -791.0,
///     easting: 2751.0,
/// };
/// assert!(segment.length() > 2800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwaySegment {
    pub anchor: Position,
    pub northing: f64,
    pub easting: f64,
}

impl RunwaySegment {
    pub fn new(anchor: Position, northing: f64, easting: f64) -> Self {
        RunwaySegment {
            anchor,
            northing,
            easting,
        }
    }

    /// Length of the segment in meters.
    pub fn length(&self) -> f64 {
        (self.northing * self.northing + self.easting * self.easting).sqrt()
    }
}

/// One row of the runway reference table.
///
/// The column names (`id`, `lat`, `lon`, `n`, `e`) are the ones used by
/// the runway table files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    #[serde(rename = "id")]
    pub airport_id: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "n")]
    pub northing: f64,
    #[serde(rename = "e")]
    pub easting: f64,
}

impl Runway {
    /// Returns the geometry of the runway.
    pub fn segment(&self) -> RunwaySegment {
        RunwaySegment::new(
            Position::new(self.latitude, self.longitude),
            self.northing,
            self.easting,
        )
    }
}

/// The two geographic ends of a runway of an airport.
#[derive(Debug, Clone, PartialEq)]
pub struct RunwayLine {
    pub airport_id: String,
    pub ends: [Position; 2],
}
