//! Tests for colormaps, banded scales and grid resampling.

use renderer::gradient::{sample_bilinear, BandedScale, Color, Colormap};

// ============================================================================
// Colormap tests
// ============================================================================

#[test]
fn test_blues_darkens_monotonically() {
    let cmap = Colormap::blues();
    let lum = |c: Color| c.r as u32 + c.g as u32 + c.b as u32;

    let mut prev = lum(cmap.at(0.0));
    for i in 1..=20 {
        let current = lum(cmap.at(i as f32 / 20.0));
        assert!(current <= prev, "luminance rose at step {}", i);
        prev = current;
    }
}

#[test]
fn test_blues_is_blue() {
    let cmap = Colormap::blues();
    for i in 0..=10 {
        let c = cmap.at(i as f32 / 10.0);
        assert!(c.b >= c.r && c.b >= c.g);
        assert_eq!(c.a, 255);
    }
}

#[test]
fn test_colormap_interpolates_between_stops() {
    let cmap = Colormap::new(vec![Color::rgb(0, 0, 0), Color::rgb(200, 100, 50)]).unwrap();
    assert_eq!(cmap.at(0.5), Color::rgb(100, 50, 25));
}

#[test]
fn test_colormap_requires_stops() {
    assert!(Colormap::new(vec![]).is_none());
    let single = Colormap::new(vec![Color::WHITE]).unwrap();
    assert_eq!(single.at(0.7), Color::WHITE);
}

// ============================================================================
// BandedScale tests
// ============================================================================

#[test]
fn test_symmetric_bands() {
    let scale = BandedScale::new(-20.0, 20.0, 30);
    assert_eq!(scale.edge(0), -20.0);
    assert_eq!(scale.edge(30), 20.0);
    assert!((scale.edge(15) - 0.0).abs() < 1e-5);

    assert_eq!(scale.band_of(-0.1), Some(14));
    assert_eq!(scale.band_of(0.1), Some(15));
}

#[test]
fn test_palette_has_one_color_per_band() {
    let scale = BandedScale::new(-1.0, 1.0, 30);
    let palette = scale.palette_over(&Colormap::blues(), -1.0, 1.0);
    assert_eq!(palette.len(), 30);
    // Adjacent bands are distinguishable at the ends
    assert_ne!(palette[0], palette[29]);
}

#[test]
fn test_zero_range_uses_middle_band() {
    let scale = BandedScale::new(0.0, 0.0, 30);
    assert_eq!(scale.band_of(0.0), Some(15));
}

#[test]
fn test_zero_bands_clamped_to_one() {
    let scale = BandedScale::new(-1.0, 1.0, 0);
    assert_eq!(scale.bands, 1);
    assert_eq!(scale.band_of(0.9), Some(0));
}

// ============================================================================
// sample_bilinear tests
// ============================================================================

#[test]
fn test_sample_bilinear_corners_and_centre() {
    let data = [0.0, 10.0, 20.0, 30.0];
    assert_eq!(sample_bilinear(&data, 2, 2, 0.0, 0.0), 0.0);
    assert_eq!(sample_bilinear(&data, 2, 2, 1.0, 1.0), 30.0);
    assert!((sample_bilinear(&data, 2, 2, 0.5, 0.5) - 15.0).abs() < 1e-5);
}

#[test]
fn test_sample_bilinear_out_of_range() {
    let data = [1.0; 4];
    assert!(sample_bilinear(&data, 2, 2, -0.1, 0.0).is_nan());
    assert!(sample_bilinear(&data, 2, 2, 0.0, 1.1).is_nan());
}

#[test]
fn test_sample_bilinear_size_mismatch() {
    assert!(sample_bilinear(&[1.0; 3], 2, 2, 0.0, 0.0).is_nan());
}
