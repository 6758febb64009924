// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Sources of the runway table: a GeoJSON file with one `LineString` per
//! runway and a TSV list of airports.

use crate::{StorageError, StorageResult};
use common::{position::Position, runway::RunwayLine};
use serde::Deserialize;
use std::{collections::HashSet, path::Path};
use tracing::{debug, warn};

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Option<Properties>,
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct Properties {
    #[serde(rename = "Loc_Id")]
    loc_id: Option<String>,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

impl Feature {
    fn into_runway_line(self) -> Result<RunwayLine, String> {
        let airport_id = self
            .properties
            .and_then(|p| p.loc_id)
            .ok_or_else(|| "missing Loc_Id".to_string())?;
        let geometry = self
            .geometry
            .ok_or_else(|| format!("missing geometry of {airport_id}"))?;
        if geometry.kind != "LineString" {
            return Err(format!(
                "unsupported geometry {} of {airport_id}",
                geometry.kind
            ));
        }
        let coordinates: Vec<Vec<f64>> = serde_json::from_value(geometry.coordinates)
            .map_err(|e| format!("invalid coordinates of {airport_id}: {e}"))?;
        // GeoJSON positions are [longitude, latitude].
        let ends: Vec<Position> = coordinates
            .iter()
            .filter(|c| c.len() >= 2)
            .map(|c| Position::new(c[1], c[0]))
            .collect();
        match (ends.first(), ends.last()) {
            (Some(first), Some(last)) if ends.len() >= 2 => Ok(RunwayLine {
                airport_id,
                ends: [*first, *last],
            }),
            _ => Err(format!("less than two positions for {airport_id}")),
        }
    }
}

/// Parses the runway lines of a GeoJSON `FeatureCollection`.
///
/// Features without an airport id or without a usable `LineString` are
/// skipped with a warning.
///
/// Errors:
/// - [`StorageError::Json`] if the document is not a feature collection.
pub fn parse_runway_lines(json: &str) -> StorageResult<Vec<RunwayLine>> {
    let collection: FeatureCollection = serde_json::from_str(json)?;
    let mut lines = Vec::with_capacity(collection.features.len());
    for feature in collection.features {
        match feature.into_runway_line() {
            Ok(line) => lines.push(line),
            Err(e) => warn!("Skipping runway feature. Error: {e}"),
        }
    }
    Ok(lines)
}

pub fn load_runway_lines(path: &Path) -> StorageResult<Vec<RunwayLine>> {
    let json = std::fs::read_to_string(path)?;
    let lines = parse_runway_lines(&json)?;
    debug!("Loaded {} runway lines from {}", lines.len(), path.to_string_lossy());
    if lines.is_empty() {
        return Err(StorageError::InvalidGeoJson(format!(
            "no runway lines in {}",
            path.to_string_lossy()
        )));
    }
    Ok(lines)
}

/// Loads the FAA ids of a tab separated airport list.
///
/// Errors:
/// - [`StorageError::MissingColumn`] if the file has no `FAA` column.
pub fn load_airport_ids(path: &Path) -> StorageResult<HashSet<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;
    let column = rdr
        .headers()?
        .iter()
        .position(|header| header == "FAA")
        .ok_or_else(|| StorageError::MissingColumn {
            column: "FAA".to_string(),
            path: path.to_path_buf(),
        })?;
    let mut ids = HashSet::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(id) = record.get(column)
            && !id.is_empty()
        {
            ids.insert(id.to_owned());
        }
    }
    debug!("Loaded {} airports from {}", ids.len(), path.to_string_lossy());
    Ok(ids)
}
