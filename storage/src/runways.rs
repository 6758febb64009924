// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! The runway reference table, columns `id`, `lat`, `lon`, `n` and `e`.

use crate::{
    StorageResult,
    table::{table_reader, write_table},
};
use common::runway::Runway;
use std::path::Path;
use tracing::debug;

pub fn load_runways(path: &Path) -> StorageResult<Vec<Runway>> {
    let mut rdr = table_reader(path)?;
    let mut runways = Vec::new();
    for result in rdr.deserialize() {
        runways.push(result?);
    }
    debug!("Loaded {} runways from {}", runways.len(), path.to_string_lossy());
    Ok(runways)
}

/// Writes the runway table sorted by airport id, gzip compressed for `.gz` paths.
pub fn save_runways(path: &Path, runways: &[Runway]) -> StorageResult<()> {
    let mut sorted: Vec<&Runway> = runways.iter().collect();
    sorted.sort_by(|a, b| a.airport_id.cmp(&b.airport_id));

    write_table(path, sorted)?;
    debug!("Saved {} runways to {}", runways.len(), path.to_string_lossy());
    Ok(())
}
