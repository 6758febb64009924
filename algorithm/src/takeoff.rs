// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

//! Detection of takeoffs from location telemetry.

use crate::{distance_from_runway, validate_runway};
use common::{
    position::LocationSample,
    runway::Runway,
    takeoff::{TakeoffMatch, TakeoffRecord},
};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// Speed above which a sample counts as high speed, 100 mph in meters per second.
pub const DEFAULT_SPEED_THRESHOLD_MPS: f64 = 44.704;

/// Distance to a runway below which a high speed sample counts as a takeoff.
pub const DEFAULT_DISTANCE_THRESHOLD_METERS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffThresholds {
    /// Samples must be strictly faster than this, in meters per second.
    pub speed_mps: f64,
    /// Matches must be strictly closer than this, in meters.
    pub distance_m: f64,
}

impl Default for TakeoffThresholds {
    fn default() -> Self {
        TakeoffThresholds {
            speed_mps: DEFAULT_SPEED_THRESHOLD_MPS,
            distance_m: DEFAULT_DISTANCE_THRESHOLD_METERS,
        }
    }
}

/// Returns the nearest runway match of every user that took off.
///
/// Every sample faster than the speed threshold is paired with every runway.
/// Pairs closer than the distance threshold are takeoff candidates and for each
/// user the closest candidate is kept. Runways without a valid geometry are
/// skipped.
///
/// # Parameters
/// - `samples`: Location samples of any number of users.
/// - `runways`: The runway reference table.
/// - `thresholds`: Speed and distance thresholds.
///
/// # Returns
/// One [`TakeoffMatch`] per user, sorted by user id. On equal distances the
/// first pair in sample order, then runway order, wins.
pub fn find_takeoffs(
    samples: &[LocationSample],
    runways: &[Runway],
    thresholds: &TakeoffThresholds,
) -> Vec<TakeoffMatch> {
    let runways: Vec<&Runway> = runways
        .iter()
        .filter(|runway| {
            if let Err(e) = validate_runway(&runway.segment()) {
                warn!("Skipping runway of airport {}. Error: {}", runway.airport_id, e);
                return false;
            }
            true
        })
        .collect();
    let runways = runways.as_slice();

    let high_speed: Vec<&LocationSample> = samples
        .iter()
        .filter(|sample| sample.speed > thresholds.speed_mps)
        .collect();
    info!(
        "Matching {} high speed samples against {} runways",
        high_speed.len(),
        runways.len()
    );

    let candidates: Vec<TakeoffMatch> = high_speed
        .par_iter()
        .flat_map_iter(|sample| {
            let pos = sample.position();
            runways.iter().filter_map(move |runway| {
                let distance = distance_from_runway(&runway.segment(), &pos).ok()?;
                (distance < thresholds.distance_m).then(|| TakeoffMatch {
                    user_id: sample.user_id.clone(),
                    distance,
                    airport_id: runway.airport_id.clone(),
                })
            })
        })
        .collect();

    let mut nearest = BTreeMap::<String, TakeoffMatch>::new();
    for candidate in candidates {
        match nearest.get(&candidate.user_id) {
            Some(best) if best.distance <= candidate.distance => (),
            _ => {
                nearest.insert(candidate.user_id.clone(), candidate);
            }
        }
    }
    for takeoff in nearest.values() {
        debug!(
            "User {} took off at {} ({:.1} m from runway)",
            takeoff.user_id, takeoff.airport_id, takeoff.distance
        );
    }
    nearest.into_values().collect()
}

/// Groups the full location history of every user with a takeoff.
///
/// Each sample of a matched user is joined with the user's [`TakeoffMatch`].
/// Samples of users without a match are dropped. Within a user the input order
/// of the samples is kept.
pub fn takeoff_histories(
    samples: &[LocationSample],
    takeoffs: &[TakeoffMatch],
) -> BTreeMap<String, Vec<TakeoffRecord>> {
    let by_user: HashMap<&str, &TakeoffMatch> = takeoffs
        .iter()
        .map(|takeoff| (takeoff.user_id.as_str(), takeoff))
        .collect();
    let mut histories = BTreeMap::<String, Vec<TakeoffRecord>>::new();
    for sample in samples {
        if let Some(takeoff) = by_user.get(sample.user_id.as_str()) {
            histories
                .entry(sample.user_id.clone())
                .or_default()
                .push(TakeoffRecord::new(sample, takeoff));
        }
    }
    histories
}
