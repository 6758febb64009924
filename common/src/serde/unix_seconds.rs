// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Unix timestamps in seconds.
//!
//! Whole seconds are written as integers, timestamps with a sub-second part
//! as floating point seconds. Reading accepts both.

use chrono::{DateTime, NaiveDateTime, Timelike};
use serde::{self, Deserialize, Deserializer, Serializer};

pub fn serialize<S>(datetime: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let seconds = datetime.and_utc().timestamp();
    match datetime.nanosecond() {
        0 => serializer.serialize_i64(seconds),
        nanos => serializer.serialize_f64(seconds as f64 + f64::from(nanos) / 1e9),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = f64::deserialize(deserializer)?;
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
        .map(|datetime| datetime.naive_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("timestamp {seconds} out of range")))
}
