// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::{
    StorageResult,
    table::{table_reader, write_table},
};
use common::position::LocationSample;
use std::{
    collections::HashSet,
    fs::{DirBuilder, exists, rename},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Reads location telemetry and caches the samples of a user-id prefix.
///
/// The first load for a prefix reads the full source file, keeps the samples
/// whose `user_id` starts with the prefix and writes them to
/// `<cache_dir>/loc_<prefix>.csv`. Later loads for the same prefix only read
/// the cache file.
///
/// The cache file is first written to `loc_<prefix>.csv.tmp` and renamed once
/// complete, so an interrupted run never leaves a truncated cache behind.
///
/// ## Important
///
/// The cache is keyed by prefix only. A changed source file is not detected,
/// the cache file has to be removed by hand.
pub struct LocationCache {
    cache_dir: PathBuf,
}

impl LocationCache {
    pub fn new(cache_dir: &Path) -> StorageResult<Self> {
        DirBuilder::new().recursive(true).create(cache_dir)?;
        info!("Using location cache folder: {}", cache_dir.to_string_lossy());
        Ok(LocationCache {
            cache_dir: cache_dir.to_path_buf(),
        })
    }

    /// Returns the path of the cache file for `prefix`.
    pub fn cache_file_path(&self, prefix: &str) -> PathBuf {
        let mut file_path = self.cache_dir.clone();
        file_path.push(format!("loc_{prefix}.csv"));
        file_path
    }

    fn partial_file_path(&self, prefix: &str) -> PathBuf {
        let mut file_path = self.cache_dir.clone();
        file_path.push(format!("loc_{prefix}.csv.tmp"));
        file_path
    }

    /// Loads all samples whose user id starts with `prefix`.
    ///
    /// Errors:
    /// - Propagates I/O and CSV errors of the source and the cache file.
    pub fn load(&self, source: &Path, prefix: &str) -> StorageResult<Vec<LocationSample>> {
        let cache_file = self.cache_file_path(prefix);
        let samples = if exists(&cache_file)? {
            debug!("Reading cached locations from {}", cache_file.to_string_lossy());
            read_locations(&cache_file)?
        } else {
            debug!(
                "Reading locations from {} with user prefix \"{prefix}\"",
                source.to_string_lossy()
            );
            let mut samples = read_locations(source)?;
            samples.retain(|sample| sample.user_id.starts_with(prefix));
            let partial_file = self.partial_file_path(prefix);
            write_locations(&partial_file, &samples)?;
            rename(&partial_file, &cache_file)?;
            samples
        };

        let users: HashSet<&str> = samples.iter().map(|s| s.user_id.as_str()).collect();
        info!(
            "{} has {} locations from {} users",
            cache_file.to_string_lossy(),
            samples.len(),
            users.len()
        );
        Ok(samples)
    }
}

/// Reads location samples from a CSV or TSV file with a header row, optionally gzip compressed.
pub fn read_locations(path: &Path) -> StorageResult<Vec<LocationSample>> {
    let mut rdr = table_reader(path)?;
    let mut samples = Vec::new();
    for result in rdr.deserialize() {
        samples.push(result?);
    }
    Ok(samples)
}

/// Writes location samples to a CSV or TSV file with a header row.
pub fn write_locations(path: &Path, samples: &[LocationSample]) -> StorageResult<()> {
    write_table(path, samples)
}
