// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::position::LocationSample;
use chrono::{DateTime, NaiveDateTime};

pub fn timestamp(seconds: i64) -> NaiveDateTime {
    DateTime::from_timestamp(seconds, 0)
        .unwrap_or_else(|| panic!("Invalid test timestamp {seconds}"))
        .naive_utc()
}

/// Samples of two users around the SAN runway and one user far away.
///
/// * `0a` rolls down the runway and takes off.
/// * `0b` is parked at the terminal and never fast.
/// * `1c` flies fast far away from any runway.
pub fn get_location_samples() -> Vec<LocationSample> {
    vec![
        LocationSample::new("0a", timestamp(1_546_300_800), 32.73700, -117.20300, 5.0),
        LocationSample::new("0a", timestamp(1_546_300_860), 32.73550, -117.19800, 50.0),
        LocationSample::new("0a", timestamp(1_546_300_920), 32.73400, -117.19300, 70.0),
        LocationSample::new("0b", timestamp(1_546_300_800), 32.73276, -117.19621, 0.0),
        LocationSample::new("0b", timestamp(1_546_300_900), 32.73280, -117.19625, 1.5),
        LocationSample::new("1c", timestamp(1_546_300_800), 33.50000, -116.00000, 200.0),
    ]
}

pub fn get_locations_as_csv<'a>() -> &'a str {
    "user_id,client_utc_sec,latitude,longitude,speed,activity\n\
     0a,1546300800,32.737,-117.203,5.0,still\n\
     0a,1546300860,32.7355,-117.198,50.0,in_vehicle\n\
     0a,1546300920,32.734,-117.193,70.0,in_vehicle\n\
     0b,1546300800,32.73276,-117.19621,0.0,still\n\
     0b,1546300900,32.7328,-117.19625,1.5,on_foot\n\
     1c,1546300800,33.5,-116.0,200.0,unknown\n"
}
