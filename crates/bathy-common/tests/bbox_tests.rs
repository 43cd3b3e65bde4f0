//! Tests for BoundingBox construction from survey samples.

use bathy_common::{BoundingBox, Sample};
use test_utils::{create_bowl_survey, create_survey_line};

fn to_samples(rows: &[(f64, f64, f64)]) -> Vec<Sample> {
    rows.iter()
        .map(|&(lat, lon, depth)| Sample::new(lat, lon, depth))
        .collect()
}

// ============================================================================
// from_samples tests
// ============================================================================

#[test]
fn test_bbox_scenario_rows() {
    let samples = vec![Sample::new(10.0, 20.0, 5.0), Sample::new(10.2, 20.2, 7.0)];
    let bbox = BoundingBox::from_samples(&samples).unwrap();
    assert_eq!(bbox.min_lat, 10.0);
    assert_eq!(bbox.max_lat, 10.2);
    assert_eq!(bbox.min_lon, 20.0);
    assert_eq!(bbox.max_lon, 20.2);
}

#[test]
fn test_bbox_contains_every_sample() {
    let samples = to_samples(&create_bowl_survey(15, 12));
    let bbox = BoundingBox::from_samples(&samples).unwrap();

    for s in &samples {
        assert!(s.latitude >= bbox.min_lat && s.latitude <= bbox.max_lat);
        assert!(s.longitude >= bbox.min_lon && s.longitude <= bbox.max_lon);
        assert!(bbox.contains_point(s.longitude, s.latitude));
    }
}

#[test]
fn test_bbox_bounds_are_attained() {
    let samples = to_samples(&create_bowl_survey(9, 7));
    let bbox = BoundingBox::from_samples(&samples).unwrap();

    assert!(samples.iter().any(|s| s.latitude == bbox.min_lat));
    assert!(samples.iter().any(|s| s.latitude == bbox.max_lat));
    assert!(samples.iter().any(|s| s.longitude == bbox.min_lon));
    assert!(samples.iter().any(|s| s.longitude == bbox.max_lon));
}

#[test]
fn test_bbox_single_sample_is_degenerate() {
    let bbox = BoundingBox::from_samples(&[Sample::new(45.5, -122.6, 3.0)]).unwrap();
    assert_eq!(bbox.width(), 0.0);
    assert_eq!(bbox.height(), 0.0);
    assert!(bbox.is_degenerate());
}

#[test]
fn test_bbox_constant_latitude_is_degenerate() {
    // A transect sailed due east
    let samples = to_samples(&create_survey_line(45.0, -122.0, 0.0, 0.001, 20));
    let bbox = BoundingBox::from_samples(&samples).unwrap();
    assert_eq!(bbox.height(), 0.0);
    assert!(bbox.width() > 0.0);
    assert!(bbox.is_degenerate());
}

#[test]
fn test_bbox_empty() {
    assert!(BoundingBox::from_samples(&[]).is_none());
}

// ============================================================================
// contains_point tests
// ============================================================================

#[test]
fn test_contains_point_edges_inclusive() {
    let bbox = BoundingBox::new(20.0, 10.0, 20.2, 10.2);
    assert!(bbox.contains_point(20.0, 10.0));
    assert!(bbox.contains_point(20.2, 10.2));
    assert!(!bbox.contains_point(20.21, 10.1));
    assert!(!bbox.contains_point(20.1, 9.99));
}
