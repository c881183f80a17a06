// Tests for the loader progress tracker.

use lustre_core::{LoadPhase, LoadTracker};

#[test]
fn bar_tracks_progress_ratio() {
    let mut load = LoadTracker::new();
    assert_eq!(load.bar_scale(), 0.0);
    load.on_start();
    assert_eq!(load.phase(), LoadPhase::Loading);
    load.on_progress(512.0, 1024.0);
    assert!((load.bar_scale() - 0.5).abs() < 1e-6);
    load.on_progress(1024.0, 1024.0);
    assert!((load.bar_scale() - 1.0).abs() < 1e-6);
    load.on_load();
    assert!(load.is_done());
    assert_eq!(load.bar_scale(), 1.0);
}

#[test]
fn unknown_total_reports_an_empty_bar() {
    let mut load = LoadTracker::new();
    load.on_start();
    load.on_progress(100.0, 0.0);
    assert_eq!(load.bar_scale(), 0.0);
}

#[test]
fn failure_is_explicit_and_never_freezes_the_bar() {
    let mut load = LoadTracker::new();
    load.on_start();
    load.on_progress(300.0, 1024.0);
    load.on_error("fetch aborted");
    assert!(load.is_failed());
    assert!(!load.is_done());
    // the bar completes so the failed styling is visible, not a stuck bar
    assert_eq!(load.bar_scale(), 1.0);
}

#[test]
fn a_new_start_resets_previous_progress() {
    let mut load = LoadTracker::new();
    load.on_start();
    load.on_progress(1024.0, 1024.0);
    load.on_load();
    // model switch kicks off a second sequential load
    load.on_start();
    assert_eq!(load.phase(), LoadPhase::Loading);
    assert_eq!(load.bar_scale(), 0.0);
}
