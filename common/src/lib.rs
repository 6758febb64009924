// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Common Modul for the takeoff finder
//!
//! Provides the common data types that are used across every crate.

pub mod position;
pub mod runway;
pub mod serde;
pub mod takeoff;
pub mod test_helper;
