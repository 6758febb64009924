// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use crate::StorageResult;
use common::takeoff::TakeoffRecord;
use futures::future::try_join_all;
use std::{
    collections::BTreeMap,
    fs::DirBuilder,
    io,
    path::{Path, PathBuf},
};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// A file system–based storage of takeoff histories.
///
/// The history of each user is stored as a tab separated file
/// `takeoff_<user_id>.tsv` with a header row in the root directory.
/// Existing files are overwritten.
///
/// ## Important
///
/// `TakeoffStorage` **does not implement any internal synchronization or locking mechanisms**.
/// Only one instance should write to a `root_dir` at any time.
pub struct TakeoffStorage {
    root_dir: PathBuf,
}

impl TakeoffStorage {
    /// Creates the storage and its root directory.
    pub fn new(root_dir: &Path) -> StorageResult<Self> {
        DirBuilder::new().recursive(true).create(root_dir)?;
        info!("Using takeoff storage folder: {}", root_dir.to_string_lossy());
        Ok(TakeoffStorage {
            root_dir: root_dir.to_path_buf(),
        })
    }

    /// Constructs the path of the takeoff file of `user_id`.
    ///
    /// Path separators in `user_id` are replaced by `_` so that every file
    /// ends up directly in the root directory.
    pub fn file_path(&self, user_id: &str) -> PathBuf {
        let name: String = user_id
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        let mut file_path = self.root_dir.clone();
        file_path.push(format!("takeoff_{name}.tsv"));
        file_path
    }

    /// Writes the history of one user and returns the file path.
    ///
    /// Errors:
    /// - Propagates CSV serialization errors and I/O errors from file creation, writing, or syncing.
    pub async fn save_history(
        &self,
        user_id: &str,
        records: &[TakeoffRecord],
    ) -> StorageResult<PathBuf> {
        let data = to_tsv(records)?;
        let file_path = self.file_path(user_id);
        self.save_bytes(&file_path, &data).await?;
        debug!(
            "Stored {} takeoff records of user {} in {}",
            records.len(),
            user_id,
            file_path.to_string_lossy()
        );
        Ok(file_path)
    }

    /// Writes the histories of all users and returns the written file paths.
    pub async fn save_all(
        &self,
        histories: &BTreeMap<String, Vec<TakeoffRecord>>,
    ) -> StorageResult<Vec<PathBuf>> {
        let paths = try_join_all(
            histories
                .iter()
                .map(|(user_id, records)| self.save_history(user_id, records)),
        )
        .await?;
        info!(
            "Stored takeoffs of {} users in {}",
            paths.len(),
            self.root_dir.to_string_lossy()
        );
        Ok(paths)
    }

    /// Writes arbitrary bytes to the file at `path`, ensuring they are persisted.
    ///
    /// The file is created if it does not exist, or truncated if it does. After writing
    /// `data`, the file is explicitly synced to ensure durability.
    async fn save_bytes(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
        Ok(())
    }
}

fn to_tsv(records: &[TakeoffRecord]) -> StorageResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}
