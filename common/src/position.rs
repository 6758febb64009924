// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::serde::unix_seconds;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude.
///
/// The `Position` struct is commonly used to store a point on Earth
/// in decimal degrees. Latitude values range from -90.0 to 90.0, and
/// longitude values range from -180.0 to 180.0. Values outside of this
/// range are not rejected.
///
/// # Fields
///
/// - `latitude` – The latitude in decimal degrees (positive for north, negative for south).
/// - `longitude` – The longitude in decimal degrees (positive for east, negative for west).
///
/// # Example
///
/// ```rust
/// use common::position::Position;
///
/// let pos = Position {
///     latitude: 32.73712,
///     longitude: -117.20436,
/// };
///
/// println!("{:?}", pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Creates a new [`Position`] with the given latitude and longitude.
    ///
    /// # Arguments
    ///
    /// * `latitude` - The latitude in decimal degrees.
    /// * `longitude` - The longitude in decimal degrees.
    ///
    /// # Example
    ///
    /// ```rust
    /// use common::position::Position;
    ///
    /// let pos = Position::new(32.73712, -117.20436);
    /// assert_eq!(pos.latitude, 32.73712);
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// A single telemetry sample of a user's device.
///
/// On disk the timestamp is stored as unix seconds in the column
/// `client_utc_sec`. Additional columns of the source (e.g. `activity`)
/// are ignored while reading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    pub user_id: String,
    #[serde(rename = "client_utc_sec", with = "unix_seconds")]
    pub ts: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    /// Speed in meters per second.
    pub speed: f64,
}

impl LocationSample {
    /// Creates a new [`LocationSample`].
    ///
    /// # Arguments
    ///
    /// * `user_id` – Identifier of the user the sample belongs to.
    /// * `ts` – UTC timestamp of the sample.
    /// * `latitude` – Latitude in decimal degrees.
    /// * `longitude` – Longitude in decimal degrees.
    /// * `speed` – Speed in meters per second.
    pub fn new(
        user_id: &str,
        ts: NaiveDateTime,
        latitude: f64,
        longitude: f64,
        speed: f64,
    ) -> LocationSample {
        LocationSample {
            user_id: user_id.to_owned(),
            ts,
            latitude,
            longitude,
            speed,
        }
    }

    /// Returns the geographic position of the sample.
    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}
