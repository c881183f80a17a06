// Tests for the scroll animator: the mode gate, override fan-out, the
// remembered pose, and the end-to-end scroll scenario.

use glam::Vec3;
use lustre_core::{
    Ease, ModelVariant, PageSpec, ScenePose, SceneTarget, ScrollAnimator, ScrollBinding, Srgb,
    Timeline, Track, TrackValue, TriggerRegion, GEM_COLOR_TRACKS, METAL_COLOR_TRACKS,
};

fn rest_pose() -> ScenePose {
    ScenePose {
        position: Vec3::new(3.0, -0.8, 1.2),
        target: Vec3::ZERO,
        rotation: Vec3::ZERO,
    }
}

fn camera_binding() -> ScrollBinding {
    let track = Track::new(
        "cam",
        TrackValue::Vector(Vec3::new(3.0, -0.8, 1.2)),
        TrackValue::Vector(Vec3::new(1.28, -1.7, 5.86)),
        Ease::Linear,
    )
    .unwrap();
    ScrollBinding {
        region: TriggerRegion::new(".cam-view-2", 800.0, 1600.0).unwrap(),
        timeline: Timeline::new().tween(SceneTarget::CameraPosition, track, 1.0),
    }
}

fn advance_collect(animator: &mut ScrollAnimator, scroll_y: f32) -> Vec<(SceneTarget, TrackValue)> {
    let mut out = Vec::new();
    animator.advance(scroll_y, &mut |t, v| out.push((t, v)));
    out
}

#[test]
fn scroll_region_drives_the_camera_end_to_end() {
    let mut animator = ScrollAnimator::new(vec![camera_binding()], rest_pose());
    animator.set_enabled(true);

    let at_top = advance_collect(&mut animator, 800.0);
    assert_eq!(
        at_top[0].1,
        TrackValue::Vector(Vec3::new(3.0, -0.8, 1.2))
    );

    let mid = advance_collect(&mut animator, 1200.0);
    match mid[0].1 {
        TrackValue::Vector(v) => {
            assert!((v - Vec3::new(2.14, -1.25, 3.53)).length() < 1e-3);
        }
        ref other => panic!("unexpected value {:?}", other),
    }

    // past the region's end the progress clamps to 1
    let past = advance_collect(&mut animator, 2000.0);
    assert_eq!(
        past[0].1,
        TrackValue::Vector(Vec3::new(1.28, -1.7, 5.86))
    );
}

#[test]
fn disabled_animator_emits_nothing() {
    let mut animator = ScrollAnimator::new(vec![camera_binding()], rest_pose());
    assert!(advance_collect(&mut animator, 1200.0).is_empty());
    animator.set_enabled(true);
    assert!(!advance_collect(&mut animator, 1200.0).is_empty());
    animator.set_enabled(false);
    assert!(advance_collect(&mut animator, 1200.0).is_empty());
}

#[test]
fn non_scrub_region_toggles_between_end_states() {
    let track = Track::new(
        "fade",
        TrackValue::Scalar(0.0),
        TrackValue::Scalar(1.0),
        Ease::Linear,
    )
    .unwrap();
    let binding = ScrollBinding {
        region: TriggerRegion::new(".cam-view-2", 800.0, 1600.0)
            .unwrap()
            .with_scrub(false),
        timeline: Timeline::new().tween(SceneTarget::CameraPosition, track, 1.0),
    };
    let mut animator = ScrollAnimator::new(vec![binding], rest_pose());
    animator.set_enabled(true);

    // above the span: start state; anywhere inside it: end state already
    assert_eq!(
        advance_collect(&mut animator, 700.0)[0].1,
        TrackValue::Scalar(0.0)
    );
    assert_eq!(
        advance_collect(&mut animator, 900.0)[0].1,
        TrackValue::Scalar(1.0)
    );
    assert_eq!(
        advance_collect(&mut animator, 2000.0)[0].1,
        TrackValue::Scalar(1.0)
    );
}

#[test]
fn repeated_advance_with_same_scroll_is_identical() {
    let mut animator = ScrollAnimator::new(vec![camera_binding()], rest_pose());
    animator.set_enabled(true);
    let first = advance_collect(&mut animator, 1234.0);
    let second = advance_collect(&mut animator, 1234.0);
    assert_eq!(first, second);
}

#[test]
fn last_pose_follows_the_scrub() {
    let mut animator = ScrollAnimator::new(vec![camera_binding()], rest_pose());
    animator.set_enabled(true);
    advance_collect(&mut animator, 1600.0);
    let pose = animator.last_pose();
    assert!((pose.position - Vec3::new(1.28, -1.7, 5.86)).length() < 1e-6);
    // the untouched fields keep their seed
    assert_eq!(pose.target, Vec3::ZERO);
}

#[test]
fn gem_override_pins_every_gem_track() {
    let page = PageSpec::new(ModelVariant::Classic, false);
    let bindings = page.scroll_bindings().unwrap();
    let mut animator = ScrollAnimator::new(bindings, page.rest_pose());
    animator.set_enabled(true);

    let ruby = Srgb::hex(0xF70DB1);
    animator.override_colors(GEM_COLOR_TRACKS, ruby);
    assert!(animator.using_custom_colors());

    // at any scroll position the gem color stays pinned
    for scroll_y in [0.0, 0.3, 0.9, 400.0] {
        let values = advance_collect(&mut animator, scroll_y);
        for (target, value) in values {
            if target == SceneTarget::MaterialColor("gems") {
                assert_eq!(value, TrackValue::Color(ruby));
            }
        }
    }

    animator.clear_overrides();
    assert!(!animator.using_custom_colors());
    let values = advance_collect(&mut animator, 0.0);
    let gem = values
        .iter()
        .find(|(t, _)| *t == SceneTarget::MaterialColor("gems"))
        .unwrap();
    assert_eq!(gem.1, TrackValue::Color(Srgb::WHITE));
}

#[test]
fn metal_override_leaves_gems_alone() {
    let page = PageSpec::new(ModelVariant::Classic, false);
    let mut animator = ScrollAnimator::new(page.scroll_bindings().unwrap(), page.rest_pose());
    animator.set_enabled(true);

    let rose = Srgb::hex(0xFA8787);
    animator.override_colors(METAL_COLOR_TRACKS, rose);

    let values = advance_collect(&mut animator, 0.0);
    for (target, value) in values {
        match target {
            SceneTarget::MaterialColor("silver") | SceneTarget::MaterialColor("gold") => {
                assert_eq!(value, TrackValue::Color(rose));
            }
            SceneTarget::MaterialColor("gems") => {
                // gem tracks keep auto-lerping
                assert_ne!(value, TrackValue::Color(rose));
            }
            _ => {}
        }
    }
}

#[test]
fn unknown_override_id_reports_not_found() {
    let mut animator = ScrollAnimator::new(vec![camera_binding()], rest_pose());
    assert!(!animator.set_track_override("nope", TrackValue::Scalar(1.0)));
}
