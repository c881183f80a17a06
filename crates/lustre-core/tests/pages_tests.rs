// Tests for the declarative page catalogue.

use glam::Vec3;
use lustre_core::{
    InspectMenu, ModelVariant, PageSpec, ScenePose, SceneTarget, TrackValue,
    EXPLORE_POSITION, INTRO_POSITION_FROM, INTRO_POSITION_TO,
};

fn every_page() -> Vec<PageSpec> {
    vec![
        PageSpec::new(ModelVariant::Classic, false),
        PageSpec::new(ModelVariant::Classic, true),
        PageSpec::new(ModelVariant::Compare, false),
        PageSpec::new(ModelVariant::Compare, true),
    ]
}

#[test]
fn all_page_variants_build_without_configuration_errors() {
    for page in every_page() {
        page.intro_timeline().unwrap();
        let bindings = page.scroll_bindings().unwrap();
        assert_eq!(bindings.len(), 2);
        let from = page.rest_pose();
        page.explore_timeline(from).unwrap();
        page.inspect_timeline(InspectMenu::Gems, from).unwrap();
        page.inspect_timeline(InspectMenu::Materials, from).unwrap();
        page.exit_timeline(from, from).unwrap();
    }
}

#[test]
fn intro_flies_the_camera_to_the_rest_pose() {
    let page = PageSpec::new(ModelVariant::Classic, false);
    let tl = page.intro_timeline().unwrap();

    let mut position_end = None;
    tl.advance(1.0, &mut |t, v| {
        if let (SceneTarget::CameraPosition, TrackValue::Vector(p)) = (t, v) {
            position_end = Some(p);
        }
    });
    assert_eq!(position_end, Some(Vec3::from_array(INTRO_POSITION_TO)));

    let mut position_start = None;
    tl.advance(0.0, &mut |t, v| {
        if let (SceneTarget::CameraPosition, TrackValue::Vector(p)) = (t, v) {
            position_start = Some(p);
        }
    });
    assert_eq!(position_start, Some(Vec3::from_array(INTRO_POSITION_FROM)));
    assert_eq!(page.rest_pose().position, Vec3::from_array(INTRO_POSITION_TO));
}

#[test]
fn mobile_pages_aim_the_intro_differently() {
    let desktop = PageSpec::new(ModelVariant::Classic, false).rest_pose();
    let mobile = PageSpec::new(ModelVariant::Classic, true).rest_pose();
    assert_ne!(desktop.target, mobile.target);
    assert_eq!(desktop.position, mobile.position);
}

#[test]
fn variants_name_their_own_scene_objects() {
    let classic = ModelVariant::Classic.spec();
    let compare = ModelVariant::Compare.spec();
    assert_ne!(classic.asset_path, compare.asset_path);
    assert_ne!(classic.root_object, compare.root_object);
    assert_eq!(classic.gem_objects.len(), 6);
    assert_eq!(compare.gem_objects.len(), 1);
    assert_eq!(ModelVariant::Classic.other(), ModelVariant::Compare);
    assert_eq!(ModelVariant::Compare.other(), ModelVariant::Classic);
}

#[test]
fn explore_timeline_starts_from_the_handed_in_pose() {
    let page = PageSpec::new(ModelVariant::Classic, false);
    let from = ScenePose {
        position: Vec3::new(9.0, 9.0, 9.0),
        target: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };
    let tl = page.explore_timeline(from).unwrap();

    let mut at_start = None;
    let mut at_end = None;
    tl.advance(0.0, &mut |t, v| {
        if let (SceneTarget::CameraPosition, TrackValue::Vector(p)) = (t, v) {
            at_start = Some(p);
        }
    });
    tl.advance(1.0, &mut |t, v| {
        if let (SceneTarget::CameraPosition, TrackValue::Vector(p)) = (t, v) {
            at_end = Some(p);
        }
    });
    assert_eq!(at_start, Some(from.position));
    assert_eq!(at_end, Some(Vec3::from_array(EXPLORE_POSITION)));
}
