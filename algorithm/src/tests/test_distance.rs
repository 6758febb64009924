use super::assert_close;
use crate::{GeometryError, LocalPlanarFrame, distance, distance_from_runway, validate_runway};
use common::position::Position;
use common::runway::RunwaySegment;
use common::test_helper::runway::{
    get_position_after_san, get_position_before_san, get_position_beside_san, get_san_segment,
};

fn san_distance(pos: &Position) -> f64 {
    distance_from_runway(&get_san_segment(), pos)
        .unwrap_or_else(|e| panic!("Failed to calculate distance. Error: {e}"))
}

/// The SAN runway with its ends swapped.
fn reversed_san_segment() -> RunwaySegment {
    let san = get_san_segment();
    let end = LocalPlanarFrame::new(&san.anchor).to_geodetic(san.northing, san.easting);
    let (northing, easting) = LocalPlanarFrame::new(&end).to_local(&san.anchor);
    RunwaySegment::new(end, northing, easting)
}

#[test]
fn position_before_runway_start() {
    assert_close(san_distance(&get_position_before_san()), 759.0, 1.0);
}

#[test]
fn position_beside_runway() {
    assert_close(san_distance(&get_position_beside_san()), 255.0, 1.0);
}

#[test]
fn position_after_runway_end() {
    assert_close(san_distance(&get_position_after_san()), 679.0, 1.0);
}

#[test]
fn flat_arguments_match_segment() {
    let pos = get_position_beside_san();
    let result = distance(
        32.73712,
        -117.20436,
        -791.0,
        2751.0,
        pos.latitude,
        pos.longitude,
    );
    assert_eq!(result, Ok(san_distance(&pos)));
}

#[test]
fn zero_length_runway_is_rejected() {
    let result = distance(32.73712, -117.20436, 0.0, 0.0, 32.7, -117.2);
    assert_eq!(
        result,
        Err(GeometryError::InvalidRunwayGeometry {
            northing: 0.0,
            easting: 0.0
        })
    );
}

#[test]
fn nan_runway_is_rejected() {
    let result = distance(32.73712, -117.20436, f64::NAN, 10.0, 32.7, -117.2);
    assert!(matches!(
        result,
        Err(GeometryError::InvalidRunwayGeometry { .. })
    ));
}

#[test]
fn valid_runway_reports_its_length() {
    let san = get_san_segment();
    assert_eq!(validate_runway(&san), Ok(san.length()));
}

#[test]
fn runway_without_direction_fails_validation() {
    let anchor = Position::new(32.73712, -117.20436);
    assert_eq!(
        validate_runway(&RunwaySegment::new(anchor, 0.0, 0.0)),
        Err(GeometryError::InvalidRunwayGeometry {
            northing: 0.0,
            easting: 0.0
        })
    );
    assert!(validate_runway(&RunwaySegment::new(anchor, 5.0, f64::NAN)).is_err());
}

#[test]
fn distance_is_never_negative() {
    for lat_step in -10..=10 {
        for lon_step in -10..=10 {
            let pos = Position::new(
                32.73712 + f64::from(lat_step) * 0.003,
                -117.20436 + f64::from(lon_step) * 0.003,
            );
            assert!(san_distance(&pos) >= 0.0);
        }
    }
}

#[test]
fn position_on_anchor_has_zero_distance() {
    assert_eq!(san_distance(&get_san_segment().anchor), 0.0);
}

#[test]
fn swapping_runway_ends_keeps_distance() {
    let reversed = reversed_san_segment();
    for pos in [
        get_position_before_san(),
        get_position_beside_san(),
        get_position_after_san(),
    ] {
        let swapped = distance_from_runway(&reversed, &pos)
            .unwrap_or_else(|e| panic!("Failed to calculate distance. Error: {e}"));
        assert_close(swapped, san_distance(&pos), 1.0);
    }
}

#[test]
fn clamp_to_start_before_runway() {
    let san = get_san_segment();
    let pos = get_position_before_san();
    let (n, e) = LocalPlanarFrame::new(&san.anchor).to_local(&pos);
    assert!(n * san.northing + e * san.easting <= 0.0);
    assert_close(san_distance(&pos), (n * n + e * e).sqrt(), 1e-6);
}

#[test]
fn clamp_to_end_after_runway() {
    let san = get_san_segment();
    let pos = get_position_after_san();
    let (n, e) = LocalPlanarFrame::new(&san.anchor).to_local(&pos);
    assert!((n * san.northing + e * san.easting) / san.length() > san.length());
    let (n, e) = (n - san.northing, e - san.easting);
    assert_close(san_distance(&pos), (n * n + e * e).sqrt(), 1e-6);
}

#[test]
fn distance_grows_perpendicular_to_runway() {
    let san = get_san_segment();
    let frame = LocalPlanarFrame::new(&san.anchor);
    let (unit_n, unit_e) = (san.northing / san.length(), san.easting / san.length());
    let (foot_n, foot_e) = (san.northing * 0.4, san.easting * 0.4);

    let mut last = -1.0;
    for offset in [0.0, 1.0, 10.0, 50.0, 200.0, 1000.0] {
        let pos = frame.to_geodetic(foot_n - unit_e * offset, foot_e + unit_n * offset);
        let result = san_distance(&pos);
        assert_close(result, offset, 1e-3);
        assert!(result > last, "{result} is not larger than {last}");
        last = result;
    }
}

#[test]
fn local_frame_round_trip() {
    let frame = LocalPlanarFrame::new(&get_san_segment().anchor);
    let pos = get_position_beside_san();
    let (n, e) = frame.to_local(&pos);
    let back = frame.to_geodetic(n, e);
    assert_close(back.latitude, pos.latitude, 1e-9);
    assert_close(back.longitude, pos.longitude, 1e-9);
}

#[test]
fn longitude_scale_shrinks_with_latitude() {
    let equator = LocalPlanarFrame::new(&Position::new(0.0, 0.0));
    let north = LocalPlanarFrame::new(&Position::new(60.0, 0.0));
    let (_, e_equator) = equator.to_local(&Position::new(0.0, 1.0));
    let (_, e_north) = north.to_local(&Position::new(60.0, 1.0));
    assert_close(e_equator, crate::EARTH_METERS_PER_DEGREE_LON, 1e-6);
    assert_close(e_north, e_equator * 0.5, 1e-6);
}
