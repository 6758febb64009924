// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Storage crate of the takeoff finder
//!
//! Provides reading of the location telemetry, the runway sources and the
//! runway table as well as writing of the per-user takeoff files.

pub mod error;
pub mod locations;
pub mod runway_lines;
pub mod runways;
pub mod table;
pub mod takeoffs;

pub use error::{StorageError, StorageResult};
pub use locations::LocationCache;
pub use table::delimiter_for;
pub use takeoffs::TakeoffStorage;
