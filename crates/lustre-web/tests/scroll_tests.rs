// Host-side tests for the pure scroll math.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/scroll.rs");
}

use scroll::*;

#[test]
fn region_spans_one_viewport_of_scroll() {
    // section top sits 1600px down the page, viewport is 800px tall:
    // the tween runs from scrollY 800 (top enters viewport bottom)
    // to scrollY 1600 (top reaches viewport top)
    let (start, end) = region_bounds(1600.0, 800.0);
    assert_eq!(start, 800.0);
    assert_eq!(end, 1600.0);
}

#[test]
fn first_section_can_start_above_the_page_top() {
    let (start, end) = region_bounds(400.0, 900.0);
    assert!(start < 0.0);
    assert_eq!(end, 400.0);
    // a negative start is still a valid span
    lustre_core::TriggerRegion::new(".hero", start, end).unwrap();
}

#[test]
fn measured_bounds_feed_the_resolver() {
    let (start, end) = region_bounds(1600.0, 800.0);
    let mut region = lustre_core::TriggerRegion::new(".cam-view-2", 0.0, 1.0).unwrap();
    region.set_bounds(start, end).unwrap();
    assert_eq!(region.progress(1200.0), 0.5);
}

#[test]
fn layout_starts_stale_until_first_measure() {
    let mut layout = RegionLayout::new();
    assert!(layout.is_stale());
    layout.invalidate();
    assert!(layout.is_stale());
}
