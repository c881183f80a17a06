use thiserror::Error;

/// Errors raised by the animation engine.
///
/// Configuration problems are caught eagerly while a page is being set up;
/// after setup only `ObjectNotFound` (a named object vanishing across a model
/// swap) and `Load` can occur.
#[derive(Debug, Error)]
pub enum AnimError {
    #[error("track '{id}': start keyframe is {start} but end keyframe is {end}")]
    KindMismatch {
        id: &'static str,
        start: &'static str,
        end: &'static str,
    },

    #[error("region '{anchor}': start offset {start}px must lie above end offset {end}px")]
    BadRegion {
        anchor: &'static str,
        start: f32,
        end: f32,
    },

    #[error("scene object '{0}' not found after load")]
    ObjectNotFound(String),

    #[error("asset load failed: {0}")]
    Load(String),
}
