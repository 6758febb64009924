// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Serde helpers for the timestamp formats used in the data files.

pub mod datetime;
pub mod unix_seconds;
