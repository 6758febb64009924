use super::assert_close;
use crate::takeoff::{TakeoffThresholds, find_takeoffs, takeoff_histories};
use common::position::LocationSample;
use common::runway::Runway;
use common::test_helper::location::{get_location_samples, timestamp};
use common::test_helper::runway::{get_san_runway, get_zero_length_runway};

fn get_runway_at_last_sample() -> Runway {
    Runway {
        airport_id: "XXX".to_string(),
        latitude: 32.734,
        longitude: -117.193,
        northing: 100.0,
        easting: 100.0,
    }
}

#[test_log::test]
fn detect_takeoff_of_fast_user_on_runway() {
    let takeoffs = find_takeoffs(
        &get_location_samples(),
        &[get_san_runway()],
        &TakeoffThresholds::default(),
    );
    assert_eq!(takeoffs.len(), 1);
    assert_eq!(takeoffs[0].user_id, "0a");
    assert_eq!(takeoffs[0].airport_id, "SAN");
    assert_close(takeoffs[0].distance, 8.46, 0.01);
}

#[test_log::test]
fn nearest_runway_wins() {
    let takeoffs = find_takeoffs(
        &get_location_samples(),
        &[get_san_runway(), get_runway_at_last_sample()],
        &TakeoffThresholds::default(),
    );
    assert_eq!(takeoffs.len(), 1);
    assert_eq!(takeoffs[0].airport_id, "XXX");
    assert_eq!(takeoffs[0].distance, 0.0);
}

#[test_log::test]
fn zero_length_runway_is_skipped() {
    let takeoffs = find_takeoffs(
        &get_location_samples(),
        &[get_zero_length_runway(), get_san_runway()],
        &TakeoffThresholds::default(),
    );
    assert_eq!(takeoffs.len(), 1);
    assert_eq!(takeoffs[0].airport_id, "SAN");
}

#[test_log::test]
fn speed_threshold_is_strict() {
    let samples = vec![LocationSample::new(
        "0d",
        timestamp(1_546_300_800),
        32.7355,
        -117.198,
        44.704,
    )];
    let takeoffs = find_takeoffs(&samples, &[get_san_runway()], &TakeoffThresholds::default());
    assert!(takeoffs.is_empty());
}

#[test_log::test]
fn distance_threshold_filters_matches() {
    let thresholds = TakeoffThresholds {
        distance_m: 5.0,
        ..TakeoffThresholds::default()
    };
    let takeoffs = find_takeoffs(&get_location_samples(), &[get_san_runway()], &thresholds);
    assert!(takeoffs.is_empty());
}

#[test_log::test]
fn equal_distances_keep_first_runway() {
    let mut twin = get_san_runway();
    twin.airport_id = "TWN".to_string();
    let takeoffs = find_takeoffs(
        &get_location_samples(),
        &[get_san_runway(), twin],
        &TakeoffThresholds::default(),
    );
    assert_eq!(takeoffs[0].airport_id, "SAN");
}

#[test_log::test]
fn no_runways_no_takeoffs() {
    let takeoffs = find_takeoffs(&get_location_samples(), &[], &TakeoffThresholds::default());
    assert!(takeoffs.is_empty());
}

#[test]
fn history_contains_all_samples_of_matched_users() {
    let samples = get_location_samples();
    let takeoffs = find_takeoffs(&samples, &[get_san_runway()], &TakeoffThresholds::default());
    let histories = takeoff_histories(&samples, &takeoffs);

    assert_eq!(histories.len(), 1);
    let history = &histories["0a"];
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].speed, 5.0);
    assert_eq!(history[2].speed, 70.0);
    assert!(
        history
            .iter()
            .all(|record| record.airport_id == "SAN" && record.distance == takeoffs[0].distance)
    );
}
