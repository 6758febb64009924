// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use std::{io, path::PathBuf};
use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("System input/output error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to read or write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(String),
    #[error("Column {column} not found in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
}
