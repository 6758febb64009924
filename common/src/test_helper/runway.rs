// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    position::Position,
    runway::{Runway, RunwaySegment},
};

/// Runway 09/27 of San Diego International (SAN), anchored at its western end.
pub fn get_san_runway() -> Runway {
    Runway {
        airport_id: "SAN".to_string(),
        latitude: 32.73712,
        longitude: -117.20436,
        northing: -791.0,
        easting: 2751.0,
    }
}

pub fn get_san_segment() -> RunwaySegment {
    get_san_runway().segment()
}

/// A point before the start of the SAN runway (Slater's 50/50), 759 m away.
pub fn get_position_before_san() -> Position {
    Position::new(32.73824654300916, -117.2123593442412)
}

/// The center of the round terminal next to the middle of the SAN runway, 255 m away.
pub fn get_position_beside_san() -> Position {
    Position::new(32.73276187728815, -117.19621426797755)
}

/// A point past the end of the SAN runway (PCH and Grape), 679 m away.
pub fn get_position_after_san() -> Position {
    Position::new(32.72460070901978, -117.17159350281554)
}

/// A runway whose ends coincide.
pub fn get_zero_length_runway() -> Runway {
    Runway {
        airport_id: "ZZZ".to_string(),
        latitude: 32.73712,
        longitude: -117.20436,
        northing: 0.0,
        easting: 0.0,
    }
}

pub fn get_runway_table_as_csv<'a>() -> &'a str {
    "id,lat,lon,n,e\nSAN,32.73712,-117.20436,-791,2751\nZZZ,32.73712,-117.20436,0,0\n"
}
