//! Declarative page catalogue.
//!
//! The four near-identical page scripts of the showcase collapse into
//! [`PageSpec`] builders parameterized by model variant and form factor. The
//! web layer asks for timelines and bindings here instead of wiring tweens by
//! hand.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use crate::animator::{ScenePose, ScrollBinding};
use crate::color::Srgb;
use crate::constants::*;
use crate::ease::Ease;
use crate::error::AnimError;
use crate::mode::InspectMenu;
use crate::region::TriggerRegion;
use crate::scene::SceneTarget;
use crate::timeline::Timeline;
use crate::track::{Track, TrackValue};

/// Logical scene names the timelines write to; the viewer-side registry maps
/// them onto each model's actual object names.
pub const RING_OBJECT: &str = "ring";
pub const SILVER_MATERIAL: &str = "silver";
pub const GOLD_MATERIAL: &str = "gold";
pub const GEM_MATERIAL: &str = "gems";

/// Color tracks a gem pick overrides.
pub const GEM_COLOR_TRACKS: &[&str] = &["forever.gems", "emotions.gems"];

/// Color tracks a metal pick overrides, per metal slot.
pub const SILVER_COLOR_TRACKS: &[&str] = &["forever.silver", "emotions.silver"];
pub const GOLD_COLOR_TRACKS: &[&str] = &["forever.gold", "emotions.gold"];

/// Both metal slots together.
pub const METAL_COLOR_TRACKS: &[&str] = &[
    "forever.silver",
    "forever.gold",
    "emotions.silver",
    "emotions.gold",
];

/// Which ring model the page is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelVariant {
    Classic,
    Compare,
}

impl ModelVariant {
    pub fn spec(self) -> &'static ModelSpec {
        match self {
            ModelVariant::Classic => &CLASSIC,
            ModelVariant::Compare => &COMPARE,
        }
    }

    /// The variant the model switcher swaps to.
    pub fn other(self) -> Self {
        match self {
            ModelVariant::Classic => ModelVariant::Compare,
            ModelVariant::Compare => ModelVariant::Classic,
        }
    }
}

/// Per-variant asset, scene naming and hero-object rotations.
#[derive(Debug)]
pub struct ModelSpec {
    pub asset_path: &'static str,
    pub root_object: &'static str,
    pub silver_object: &'static str,
    pub gold_object: &'static str,
    pub gem_objects: &'static [&'static str],
    pub rest_rotation: [f32; 3],
    pub forever_rotation: [f32; 3],
    pub emotions_rotation: [f32; 3],
    pub explore_rotation: [f32; 3],
}

const CLASSIC: ModelSpec = ModelSpec {
    asset_path: "./assets/ring_webgi.glb",
    root_object: "Scene",
    silver_object: "silver",
    gold_object: "gold",
    gem_objects: &[
        "diamonds",
        "diamonds001",
        "diamonds002",
        "diamonds003",
        "diamonds004",
        "diamonds005",
    ],
    rest_rotation: [-FRAC_PI_2, 0.0, 0.0],
    forever_rotation: [0.0, 0.0, FRAC_PI_2],
    emotions_rotation: [0.0, 0.0, -FRAC_PI_2],
    explore_rotation: [-FRAC_PI_2, 0.0, -FRAC_PI_2],
};

const COMPARE: ModelSpec = ModelSpec {
    asset_path: "./assets/ring2_webgi.glb",
    root_object: "Scene_1",
    silver_object: "alliance",
    gold_object: "entourage",
    gem_objects: &["Object"],
    rest_rotation: [FRAC_PI_2, 0.92, 0.0],
    forever_rotation: [-FRAC_PI_3, -0.92, 0.0],
    emotions_rotation: [0.92, 0.92, FRAC_PI_3],
    explore_rotation: [0.0, 0.0, 0.0],
};

#[inline]
fn v3(a: [f32; 3]) -> TrackValue {
    TrackValue::Vector(Vec3::from_array(a))
}

#[inline]
fn col(c: Srgb) -> TrackValue {
    TrackValue::Color(c)
}

/// Everything the web layer needs to drive one page variant.
#[derive(Clone, Copy, Debug)]
pub struct PageSpec {
    pub variant: ModelVariant,
    pub is_mobile: bool,
}

impl PageSpec {
    pub fn new(variant: ModelVariant, is_mobile: bool) -> Self {
        Self { variant, is_mobile }
    }

    pub fn model(&self) -> &'static ModelSpec {
        self.variant.spec()
    }

    fn intro_target_to(&self) -> [f32; 3] {
        if self.is_mobile {
            INTRO_TARGET_TO_MOBILE
        } else {
            INTRO_TARGET_TO
        }
    }

    /// Flight played once the first model load completes.
    pub fn intro_timeline(&self) -> Result<Timeline, AnimError> {
        let position = Track::new(
            "intro.cam.position",
            v3(INTRO_POSITION_FROM),
            v3(INTRO_POSITION_TO),
            Ease::PowerOut(1),
        )?;
        let target = Track::new(
            "intro.cam.target",
            v3(INTRO_TARGET_FROM),
            v3(self.intro_target_to()),
            Ease::PowerOut(1),
        )?;
        Ok(Timeline::new()
            .tween(SceneTarget::CameraPosition, position, INTRO_DURATION_SECS)
            .tween_offset(
                SceneTarget::CameraTarget,
                target,
                INTRO_DURATION_SECS,
                -INTRO_DURATION_SECS,
            ))
    }

    /// Pose the intro flight lands on; seeds the scroll animator.
    pub fn rest_pose(&self) -> ScenePose {
        ScenePose {
            position: Vec3::from_array(INTRO_POSITION_TO),
            target: Vec3::from_array(self.intro_target_to()),
            rotation: Vec3::from_array(self.model().rest_rotation),
        }
    }

    /// The scroll-driven section bindings. Regions carry placeholder bounds
    /// here; the web layer measures real pixel spans from live layout before
    /// the first scrub pass.
    pub fn scroll_bindings(&self) -> Result<Vec<ScrollBinding>, AnimError> {
        let m = self.model();
        let forever_target = if self.is_mobile {
            FOREVER_TARGET_MOBILE
        } else {
            FOREVER_TARGET
        };

        let forever = Timeline::new()
            .tween(
                SceneTarget::CameraPosition,
                Track::new(
                    "forever.cam.position",
                    v3(INTRO_POSITION_TO),
                    v3(FOREVER_POSITION),
                    Ease::Linear,
                )?,
                1.0,
            )
            .tween_offset(
                SceneTarget::CameraTarget,
                Track::new(
                    "forever.cam.target",
                    v3(self.intro_target_to()),
                    v3(forever_target),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::ObjectRotation(RING_OBJECT),
                Track::new(
                    "forever.ring.rotation",
                    v3(m.rest_rotation),
                    v3(m.forever_rotation),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::MaterialColor(SILVER_MATERIAL),
                Track::new(
                    "forever.silver",
                    col(SILVER_BASE),
                    col(METAL_BLUSH),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::MaterialColor(GOLD_MATERIAL),
                Track::new(
                    "forever.gold",
                    col(GOLD_BASE),
                    col(METAL_BLUSH),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::MaterialColor(GEM_MATERIAL),
                Track::new("forever.gems", col(GEM_BASE), col(GEM_ICE), Ease::Linear)?,
                1.0,
                -1.0,
            );

        let emotions = Timeline::new()
            .tween(
                SceneTarget::CameraPosition,
                Track::new(
                    "emotions.cam.position",
                    v3(FOREVER_POSITION),
                    v3(EMOTIONS_POSITION),
                    Ease::Linear,
                )?,
                1.0,
            )
            .tween_offset(
                SceneTarget::CameraTarget,
                Track::new(
                    "emotions.cam.target",
                    v3(forever_target),
                    v3(EMOTIONS_TARGET),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::ObjectRotation(RING_OBJECT),
                Track::new(
                    "emotions.ring.rotation",
                    v3(m.forever_rotation),
                    v3(m.emotions_rotation),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::MaterialColor(SILVER_MATERIAL),
                Track::new(
                    "emotions.silver",
                    col(METAL_BLUSH),
                    col(METAL_HONEY),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::MaterialColor(GOLD_MATERIAL),
                Track::new(
                    "emotions.gold",
                    col(METAL_BLUSH),
                    col(METAL_HONEY),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            )
            .tween_offset(
                SceneTarget::MaterialColor(GEM_MATERIAL),
                Track::new(
                    "emotions.gems",
                    col(GEM_ICE),
                    col(GEM_MAGENTA),
                    Ease::Linear,
                )?,
                1.0,
                -1.0,
            );

        Ok(vec![
            ScrollBinding {
                region: TriggerRegion::new(".cam-view-2", 0.0, 1.0)?,
                timeline: forever,
            },
            ScrollBinding {
                region: TriggerRegion::new(".cam-view-3", 0.0, 1.0)?,
                timeline: emotions,
            },
        ])
    }

    /// Flight into the free-orbit configurator view.
    pub fn explore_timeline(&self, from: ScenePose) -> Result<Timeline, AnimError> {
        let m = self.model();
        let position = Track::new(
            "explore.cam.position",
            TrackValue::Vector(from.position),
            v3(EXPLORE_POSITION),
            Ease::PowerOut(1),
        )?;
        let target = Track::new(
            "explore.cam.target",
            TrackValue::Vector(from.target),
            v3(EXPLORE_TARGET),
            Ease::PowerOut(1),
        )?;
        let rotation = Track::new(
            "explore.ring.rotation",
            TrackValue::Vector(from.rotation),
            v3(m.explore_rotation),
            Ease::PowerOut(1),
        )?;
        Ok(Timeline::new()
            .tween(SceneTarget::CameraPosition, position, EXPLORE_DURATION_SECS)
            .tween_offset(
                SceneTarget::CameraTarget,
                target,
                EXPLORE_DURATION_SECS,
                -EXPLORE_DURATION_SECS,
            )
            .tween_offset(
                SceneTarget::ObjectRotation(RING_OBJECT),
                rotation,
                EXPLORE_DURATION_SECS,
                -EXPLORE_DURATION_SECS,
            ))
    }

    /// Camera repositioning for a configurator menu. The ring keeps its
    /// explore orientation.
    pub fn inspect_timeline(
        &self,
        menu: InspectMenu,
        from: ScenePose,
    ) -> Result<Timeline, AnimError> {
        let (to_position, to_target, duration) = match menu {
            InspectMenu::Gems => {
                let target = if self.is_mobile {
                    GEM_VIEW_TARGET_MOBILE
                } else {
                    GEM_VIEW_TARGET
                };
                (GEM_VIEW_POSITION, target, GEM_VIEW_DURATION_SECS)
            }
            InspectMenu::Materials => (EXPLORE_POSITION, EXPLORE_TARGET, EXPLORE_DURATION_SECS),
        };
        let position = Track::new(
            "inspect.cam.position",
            TrackValue::Vector(from.position),
            v3(to_position),
            Ease::PowerOut(1),
        )?;
        let target = Track::new(
            "inspect.cam.target",
            TrackValue::Vector(from.target),
            v3(to_target),
            Ease::PowerOut(1),
        )?;
        Ok(Timeline::new()
            .tween(SceneTarget::CameraPosition, position, duration)
            .tween_offset(SceneTarget::CameraTarget, target, duration, -duration))
    }

    /// Flight back from the configurator to the last scroll-derived pose.
    pub fn exit_timeline(&self, from: ScenePose, to: ScenePose) -> Result<Timeline, AnimError> {
        let position = Track::new(
            "exit.cam.position",
            TrackValue::Vector(from.position),
            TrackValue::Vector(to.position),
            Ease::PowerOut(4),
        )?;
        let target = Track::new(
            "exit.cam.target",
            TrackValue::Vector(from.target),
            TrackValue::Vector(to.target),
            Ease::PowerOut(4),
        )?;
        let rotation = Track::new(
            "exit.ring.rotation",
            TrackValue::Vector(from.rotation),
            TrackValue::Vector(to.rotation),
            Ease::PowerOut(4),
        )?;
        Ok(Timeline::new()
            .tween(SceneTarget::CameraPosition, position, EXIT_DURATION_SECS)
            .tween_offset(
                SceneTarget::CameraTarget,
                target,
                EXIT_DURATION_SECS,
                -EXIT_DURATION_SECS,
            )
            .tween_offset(
                SceneTarget::ObjectRotation(RING_OBJECT),
                rotation,
                EXIT_ROTATION_SECS,
                -EXIT_DURATION_SECS,
            ))
    }
}
