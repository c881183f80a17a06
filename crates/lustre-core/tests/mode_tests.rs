// Tests for the session mode state machine.

use lustre_core::{InspectMenu, ModeAction, ModeController, ModeEvent, SessionMode};

#[test]
fn starts_idle_with_scroll_bound() {
    let ctl = ModeController::new();
    assert_eq!(ctl.mode(), SessionMode::Idle);
    assert!(ctl.scroll_bound());
}

#[test]
fn exit_from_idle_is_a_no_op() {
    let mut ctl = ModeController::new();
    assert_eq!(ctl.on_event(ModeEvent::Exit), None);
    assert_eq!(ctl.mode(), SessionMode::Idle);
    assert!(ctl.scroll_bound());
}

#[test]
fn menus_cannot_open_from_idle() {
    let mut ctl = ModeController::new();
    assert_eq!(ctl.on_event(ModeEvent::OpenGemMenu), None);
    assert_eq!(ctl.on_event(ModeEvent::OpenMaterialMenu), None);
    assert_eq!(ctl.mode(), SessionMode::Idle);
}

#[test]
fn enter_explore_unbinds_scroll() {
    let mut ctl = ModeController::new();
    assert_eq!(
        ctl.on_event(ModeEvent::EnterExplore),
        Some(ModeAction::PlayExploreIntro)
    );
    assert_eq!(ctl.mode(), SessionMode::Exploring);
    assert!(!ctl.scroll_bound());
}

#[test]
fn repeated_enter_explore_is_a_no_op() {
    let mut ctl = ModeController::new();
    ctl.on_event(ModeEvent::EnterExplore);
    assert_eq!(ctl.on_event(ModeEvent::EnterExplore), None);
    assert_eq!(ctl.mode(), SessionMode::Exploring);
}

#[test]
fn menus_open_from_exploring_and_switch_while_configuring() {
    let mut ctl = ModeController::new();
    ctl.on_event(ModeEvent::EnterExplore);
    assert_eq!(
        ctl.on_event(ModeEvent::OpenGemMenu),
        Some(ModeAction::PlayInspect(InspectMenu::Gems))
    );
    assert_eq!(ctl.mode(), SessionMode::Configuring);
    // switching menus stays in Configuring
    assert_eq!(
        ctl.on_event(ModeEvent::OpenMaterialMenu),
        Some(ModeAction::PlayInspect(InspectMenu::Materials))
    );
    assert_eq!(ctl.mode(), SessionMode::Configuring);
}

#[test]
fn scroll_rebinds_only_after_the_exit_flight_lands() {
    let mut ctl = ModeController::new();
    ctl.on_event(ModeEvent::EnterExplore);
    assert_eq!(ctl.on_event(ModeEvent::Exit), Some(ModeAction::PlayExit));
    assert_eq!(ctl.mode(), SessionMode::Idle);
    // the exit playback still owns the camera
    assert!(!ctl.scroll_bound());
    ctl.exit_completed();
    assert!(ctl.scroll_bound());
}

#[test]
fn exit_works_from_configuring_too() {
    let mut ctl = ModeController::new();
    ctl.on_event(ModeEvent::EnterExplore);
    ctl.on_event(ModeEvent::OpenGemMenu);
    assert_eq!(ctl.on_event(ModeEvent::Exit), Some(ModeAction::PlayExit));
    assert_eq!(ctl.mode(), SessionMode::Idle);
}
