//! Fuzz target for document decoding and baking.
//!
//! This fuzzer tests that:
//! 1. Decoding never panics on malformed JSON or unexpected shapes
//! 2. Baking any decoded document never panics
//! 3. Baking always returns one region per input region

#![no_main]

use curvebake::{BakeConfig, RegionDocument, bake};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(value) = serde_json::from_slice(data) else {
        return;
    };
    let Ok(document) = RegionDocument::from_value(value) else {
        return;
    };

    let config = BakeConfig::new(64, 0.85).expect("valid config");
    let baked = bake(document.regions(), &config);
    assert_eq!(baked.len(), document.len());

    let _ = document.with_regions(baked).to_pretty_json();
});
