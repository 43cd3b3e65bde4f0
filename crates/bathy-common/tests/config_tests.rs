//! Tests for DepthMapConfig loading and validation.

use bathy_common::{BathyError, DepthMapConfig};
use std::io::Write;

// ============================================================================
// File loading
// ============================================================================

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "depth_sanity_constraint: 250.0").unwrap();
    writeln!(file, "num_latitude_points: 40").unwrap();

    let config = DepthMapConfig::from_file(file.path()).unwrap();
    assert_eq!(config.depth_sanity_constraint, 250.0);
    assert_eq!(config.num_latitude_points, 40);
    assert_eq!(config.num_longitude_points, 100);
}

#[test]
fn test_from_file_missing() {
    let err = DepthMapConfig::from_file("/nonexistent/depth-map.yaml").unwrap_err();
    assert!(matches!(err, BathyError::ConfigRead { .. }));
}

#[test]
fn test_from_file_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "num_latitude_points: lots").unwrap();

    let err = DepthMapConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, BathyError::ConfigParse { .. }));
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
fn test_env_overrides() {
    std::env::set_var("DEPTH_SANITY_CONSTRAINT", "500");
    std::env::set_var("GRID_LON_POINTS", "not-a-number");
    let config = DepthMapConfig::default().with_env_overrides();
    std::env::remove_var("DEPTH_SANITY_CONSTRAINT");
    std::env::remove_var("GRID_LON_POINTS");

    assert_eq!(config.depth_sanity_constraint, 500.0);
    // Unparseable override is ignored
    assert_eq!(config.num_longitude_points, 100);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validate_rejects_bad_values() {
    let bad = [
        DepthMapConfig {
            depth_sanity_constraint: 0.0,
            ..Default::default()
        },
        DepthMapConfig {
            depth_sanity_constraint: f64::NAN,
            ..Default::default()
        },
        DepthMapConfig {
            num_longitude_points: 1,
            ..Default::default()
        },
        DepthMapConfig {
            lat_lon_ticks: 0,
            ..Default::default()
        },
        DepthMapConfig {
            color_levels: 0,
            ..Default::default()
        },
    ];

    for config in bad {
        assert!(
            matches!(config.validate(), Err(BathyError::InvalidConfig(_))),
            "expected {:?} to be rejected",
            config
        );
    }
}
