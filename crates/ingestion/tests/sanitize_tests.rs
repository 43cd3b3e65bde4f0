//! Tests for the depth sanity filter and the Ingester entry point.

use bathy_common::{BoundingBox, Sample};
use ingestion::{sanitize, Ingester, IngestionError};
use test_utils::{
    create_bowl_survey, inject_sensor_errors, write_csv_fixture, ALL_ERRORS_CSV, SCENARIO_CSV,
};

const THRESHOLD: f64 = 1000.0;

fn bowl_with_errors(stride: usize) -> (Vec<Sample>, usize) {
    let mut survey = create_bowl_survey(10, 10);
    let corrupted = inject_sensor_errors(&mut survey, stride);
    let samples = survey
        .into_iter()
        .map(|(lat, lon, depth)| Sample::new(lat, lon, depth))
        .collect();
    (samples, corrupted)
}

// ============================================================================
// sanitize
// ============================================================================

#[test]
fn test_every_kept_sample_is_within_threshold() {
    let (samples, _) = bowl_with_errors(3);
    let clean = sanitize(samples, THRESHOLD);

    assert!(clean.samples().iter().all(|s| s.depth.abs() < THRESHOLD));
}

#[test]
fn test_no_sample_at_or_above_threshold_survives() {
    let samples = vec![
        Sample::new(1.0, 1.0, 999.999),
        Sample::new(2.0, 2.0, 1000.0),
        Sample::new(3.0, 3.0, -1000.0),
        Sample::new(4.0, 4.0, 1_000_000.0),
        Sample::new(5.0, 5.0, f64::NAN),
        Sample::new(6.0, 6.0, -0.5),
    ];
    let clean = sanitize(samples, THRESHOLD);

    assert_eq!(
        clean.samples(),
        &[Sample::new(1.0, 1.0, 999.999), Sample::new(6.0, 6.0, -0.5)]
    );
}

#[test]
fn test_counts_and_equal_lengths() {
    let (samples, corrupted) = bowl_with_errors(4);
    let total = samples.len();
    let clean = sanitize(samples, THRESHOLD);

    assert_eq!(clean.total(), total);
    assert_eq!(clean.dropped(), corrupted);
    assert_eq!(clean.kept(), total - corrupted);
    assert_eq!(clean.latitudes().count(), clean.kept());
    assert_eq!(clean.longitudes().count(), clean.kept());
    assert_eq!(clean.depths().count(), clean.kept());
}

#[test]
fn test_order_is_preserved() {
    let (samples, _) = bowl_with_errors(2);
    let expected: Vec<Sample> = samples
        .iter()
        .copied()
        .filter(|s| s.depth.abs() < THRESHOLD)
        .collect();

    assert_eq!(sanitize(samples, THRESHOLD).into_samples(), expected);
}

// ============================================================================
// Ingester
// ============================================================================

#[test]
fn test_ingest_scenario() {
    let fixture = write_csv_fixture("scenario.csv", SCENARIO_CSV).unwrap();
    let result = Ingester::new(THRESHOLD).ingest_file(&fixture.path).unwrap();

    assert_eq!(result.rows_read, 3);
    assert_eq!(result.rows_dropped, 1);
    assert_eq!(
        result.samples,
        vec![Sample::new(10.0, 20.0, 5.0), Sample::new(10.2, 20.2, 7.0)]
    );

    let bbox = BoundingBox::from_samples(&result.samples).unwrap();
    assert_eq!((bbox.min_lat, bbox.max_lat), (10.0, 10.2));
    assert_eq!((bbox.min_lon, bbox.max_lon), (20.0, 20.2));
}

#[test]
fn test_ingest_all_errors_fails() {
    let fixture = write_csv_fixture("dry.csv", ALL_ERRORS_CSV).unwrap();
    let err = Ingester::new(THRESHOLD).ingest_file(&fixture.path).unwrap_err();

    match &err {
        IngestionError::NoValidSamples { total, threshold, .. } => {
            assert_eq!(*total, 3);
            assert_eq!(*threshold, THRESHOLD);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("No valid samples"));
}

#[test]
fn test_ingest_empty_file_fails() {
    let err = Ingester::new(THRESHOLD)
        .ingest_samples(Vec::new(), "empty.csv")
        .unwrap_err();
    assert!(matches!(err, IngestionError::NoValidSamples { total: 0, .. }));
}

#[test]
fn test_custom_threshold() {
    let samples = vec![Sample::new(1.0, 1.0, 40.0), Sample::new(2.0, 2.0, 60.0)];
    let result = Ingester::new(50.0).ingest_samples(samples, "shallow").unwrap();
    assert_eq!(result.samples.len(), 1);
    assert_eq!(result.rows_dropped, 1);
}
