use glam::Vec3;

use crate::color::Srgb;
use crate::error::AnimError;
use crate::track::TrackValue;

/// The scene field a track writes into. Object and material names are
/// resolved by the sink; a material name may fan out to a whole group of
/// meshes (every gem shares one color).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneTarget {
    CameraPosition,
    CameraTarget,
    ObjectRotation(&'static str),
    MaterialColor(&'static str),
}

/// Narrow mutation surface of the external viewer's scene.
///
/// Implementations own nothing: they write through to the camera and to named
/// objects held by the viewer. Name lookups can fail after a model swap, which
/// is why the object setters are fallible.
pub trait SceneSink {
    fn set_camera_position(&mut self, position: Vec3);
    fn set_camera_target(&mut self, target: Vec3);
    fn set_object_rotation(&mut self, name: &str, euler: Vec3) -> Result<(), AnimError>;
    fn set_material_color(&mut self, name: &str, color: Srgb) -> Result<(), AnimError>;
}

/// Coalesces scene writes into a single per-frame render trigger.
///
/// Any number of `apply` calls between two `take_dirty` reads raise the flag
/// once; the render loop consumes it once per frame, so scene-graph and
/// shadow recompute stay O(1) per frame no matter how many tracks fired.
pub struct SceneBridge<S: SceneSink> {
    sink: S,
    dirty: bool,
}

impl<S: SceneSink> SceneBridge<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, dirty: false }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Write one interpolated value into the scene. A mismatched target/value
    /// pair or a missing object is logged and skipped, so one broken track
    /// cannot halt a sequencer pass over the others.
    pub fn apply(&mut self, target: SceneTarget, value: TrackValue) {
        let result = match (target, value) {
            (SceneTarget::CameraPosition, TrackValue::Vector(v)) => {
                self.sink.set_camera_position(v);
                Ok(())
            }
            (SceneTarget::CameraTarget, TrackValue::Vector(v)) => {
                self.sink.set_camera_target(v);
                Ok(())
            }
            (SceneTarget::ObjectRotation(name), TrackValue::Vector(v)) => {
                self.sink.set_object_rotation(name, v)
            }
            (SceneTarget::MaterialColor(name), TrackValue::Color(c)) => {
                self.sink.set_material_color(name, c)
            }
            (t, v) => {
                log::warn!("[scene] {} value cannot drive {:?}", v.kind(), t);
                return;
            }
        };
        match result {
            Ok(()) => self.dirty = true,
            Err(e) => log::warn!("[scene] {}", e),
        }
    }

    /// Consume the dirty flag. Called exactly once per rendered frame.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
