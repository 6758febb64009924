// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{position::LocationSample, serde::datetime};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The nearest runway a user was detected on at high speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffMatch {
    pub user_id: String,
    /// Distance to the runway in meters.
    pub distance: f64,
    pub airport_id: String,
}

/// A location sample of a user that has a [`TakeoffMatch`].
///
/// This is the row format of the per-user takeoff files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffRecord {
    pub user_id: String,
    #[serde(with = "datetime")]
    pub ts: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub distance: f64,
    pub airport_id: String,
}

impl TakeoffRecord {
    /// Joins a sample with the takeoff match of its user.
    pub fn new(sample: &LocationSample, takeoff: &TakeoffMatch) -> Self {
        TakeoffRecord {
            user_id: sample.user_id.clone(),
            ts: sample.ts,
            latitude: sample.latitude,
            longitude: sample.longitude,
            speed: sample.speed,
            distance: takeoff.distance,
            airport_id: takeoff.airport_id.clone(),
        }
    }
}
