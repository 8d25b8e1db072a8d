//! Fuzz target for ring smoothing.
//!
//! Interprets the input as a list of f64 coordinate pairs followed by a
//! sharpness byte and checks that smoothing either fails cleanly or returns
//! a closed ring of the requested length.

#![no_main]

use curvebake::{BakeConfig, Point, smooth_ring};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&sharpness, coords)) = data.split_last() else {
        return;
    };
    if coords.len() > 16 * 512 {
        return;
    }

    let ring: Vec<Point> = coords
        .chunks_exact(16)
        .map(|chunk| {
            let mut x = [0u8; 8];
            let mut y = [0u8; 8];
            x.copy_from_slice(&chunk[..8]);
            y.copy_from_slice(&chunk[8..]);
            Point::new(f64::from_le_bytes(x), f64::from_le_bytes(y))
        })
        .collect();

    let config = BakeConfig::new(97, sharpness as f64 / 255.0).expect("valid config");
    if let Ok(curve) = smooth_ring(&ring, &config) {
        assert_eq!(curve.first(), curve.last());
        assert_eq!(curve.len(), 98);
        assert!(curve.iter().all(|p| p.is_finite()));
    }
});
