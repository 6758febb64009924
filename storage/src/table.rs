// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Delimited table files with a header row.
//!
//! `.tsv` files are tab separated, all others comma separated. A trailing
//! `.gz` compresses the file and the extension before it picks the delimiter.

use crate::StorageResult;
use flate2::{Compression, read::GzDecoder, write::GzEncoder};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

/// Returns true for gzip compressed files (`.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Returns the field delimiter for a table file, tab for `.tsv` and `.tsv.gz`
/// files and comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    let table = if is_gzip(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };
    match table.and_then(Path::extension) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

/// Opens a table file for reading, `.gz` files are decompressed on the fly.
pub fn table_reader(path: &Path) -> StorageResult<csv::Reader<Box<dyn Read>>> {
    let file = File::open(path)?;
    let input: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter_for(path))
        .from_reader(input))
}

/// Writes `rows` with a header row to `path` and syncs the file to disk.
///
/// Errors:
/// - Propagates I/O and CSV errors, the file may be incomplete then.
pub fn write_table<T, I>(path: &Path, rows: I) -> StorageResult<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let delimiter = delimiter_for(path);
    let file = File::create(path)?;
    let file = if is_gzip(path) {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_rows(&mut encoder, delimiter, rows)?;
        encoder.finish()?
    } else {
        write_rows(&file, delimiter, rows)?;
        file
    };
    file.sync_all()?;
    Ok(())
}

fn write_rows<W, T, I>(output: W, delimiter: u8, rows: I) -> StorageResult<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(output);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
