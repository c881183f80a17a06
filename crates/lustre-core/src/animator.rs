use glam::Vec3;

use crate::color::Srgb;
use crate::region::TriggerRegion;
use crate::scene::SceneTarget;
use crate::timeline::Timeline;
use crate::track::TrackValue;

/// Camera pose plus hero-object rotation, as last written by scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePose {
    pub position: Vec3,
    pub target: Vec3,
    pub rotation: Vec3,
}

/// A scroll region driving one scrub timeline.
#[derive(Clone, Debug)]
pub struct ScrollBinding {
    pub region: TriggerRegion,
    pub timeline: Timeline,
}

/// Drives every scroll binding from a single scroll position.
///
/// The binding list is built once at page setup from the declarative page
/// spec; there is no per-page imperative wiring. The enabled gate is flipped
/// by the mode controller, and the pose last written by a scrub pass is kept
/// so exit flights can return to it.
pub struct ScrollAnimator {
    bindings: Vec<ScrollBinding>,
    enabled: bool,
    last_pose: ScenePose,
}

impl ScrollAnimator {
    pub fn new(bindings: Vec<ScrollBinding>, rest_pose: ScenePose) -> Self {
        Self {
            bindings,
            enabled: false,
            last_pose: rest_pose,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The regions, for re-measuring bounds after a layout change.
    pub fn regions_mut(&mut self) -> impl Iterator<Item = &mut TriggerRegion> {
        self.bindings.iter_mut().map(|b| &mut b.region)
    }

    /// Resolve every region against `scroll_y` and scrub its timeline.
    /// A no-op while the mode controller has scroll binding disabled.
    pub fn advance(&mut self, scroll_y: f32, apply: &mut dyn FnMut(SceneTarget, TrackValue)) {
        if !self.enabled {
            return;
        }
        let mut pose = self.last_pose;
        for binding in &self.bindings {
            let mut progress = binding.region.progress(scroll_y);
            if !binding.region.scrub() {
                // non-scrub regions toggle once the span is entered
                progress = if progress > 0.0 { 1.0 } else { 0.0 };
            }
            binding.timeline.advance(progress, &mut |t, v| {
                if let TrackValue::Vector(vec) = v {
                    match t {
                        SceneTarget::CameraPosition => pose.position = vec,
                        SceneTarget::CameraTarget => pose.target = vec,
                        SceneTarget::ObjectRotation(_) => pose.rotation = vec,
                        _ => {}
                    }
                }
                apply(t, v);
            });
        }
        self.last_pose = pose;
    }

    /// Pose last produced by scrolling (or seeded at setup); exit flights
    /// tween back to this.
    pub fn last_pose(&self) -> ScenePose {
        self.last_pose
    }

    /// Seed the remembered pose, e.g. with the intro flight's end pose.
    pub fn set_pose(&mut self, pose: ScenePose) {
        self.last_pose = pose;
    }

    /// Pin one track to an externally assigned value. Returns false when no
    /// track carries the id.
    pub fn set_track_override(&mut self, id: &str, value: TrackValue) -> bool {
        let mut found = false;
        for binding in &mut self.bindings {
            for track in binding.timeline.tracks_mut() {
                if track.id() == id {
                    match track.set_override(value) {
                        Ok(()) => found = true,
                        Err(e) => log::warn!("[animator] override rejected: {}", e),
                    }
                }
            }
        }
        found
    }

    /// Route a user color pick into every listed color track's override gate.
    pub fn override_colors(&mut self, ids: &[&str], color: Srgb) {
        for id in ids {
            if !self.set_track_override(id, TrackValue::Color(color)) {
                log::warn!("[animator] no color track '{}' to override", id);
            }
        }
    }

    /// Drop every override; the auto-lerp owns the colors again.
    pub fn clear_overrides(&mut self) {
        for binding in &mut self.bindings {
            for track in binding.timeline.tracks_mut() {
                track.clear_override();
            }
        }
    }

    /// True when any color track is currently overridden.
    pub fn using_custom_colors(&self) -> bool {
        self.bindings.iter().any(|b| {
            b.timeline
                .tracks()
                .any(|t| t.is_color() && t.override_active())
        })
    }
}
