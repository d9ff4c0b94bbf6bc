// Host-side sanity checks for web constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        LOADING_OVERLAY_ID,
        CTA_ROOT_ID,
        CTA_TEXT_ID,
        CTA_BAR_ID,
        CTA_CHECK_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn default_sizes_sit_inside_their_ranges() {
    assert!((SPHERE_SIZE_RANGE.0..=SPHERE_SIZE_RANGE.1).contains(&DEFAULT_SPHERE_SIZE));
    assert!(
        (TRACKED_SPHERE_SIZE_RANGE.0..=TRACKED_SPHERE_SIZE_RANGE.1)
            .contains(&DEFAULT_TRACKED_SPHERE_SIZE)
    );
}

#[test]
fn frame_delta_cap_is_positive() {
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC <= 0.25);
}
