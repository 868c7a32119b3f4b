//! Error types shared by the pose, counter and classifier modules

use wasm_bindgen::JsValue;

use crate::pose::BodyLandmark;

/// Everything that can go wrong while tracking a frame
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackingError {
    /// Requested landmark is absent (no pose, or gated by visibility)
    #[error("landmark `{0}` is missing from the current frame")]
    MissingLandmark(BodyLandmark),

    /// Joint angle requested at a vertex that coincides with a neighbour
    #[error("joint angle at `{0}` is undefined (coincident landmarks)")]
    DegenerateGeometry(BodyLandmark),

    #[error("unknown exercise label `{0}`")]
    UnknownExercise(String),

    #[error("unknown landmark name `{0}`")]
    UnknownLandmark(String),

    #[error("invalid landmark frame: expected {expected} values, got {got}")]
    InvalidFrameLength { expected: usize, got: usize },

    #[error("invalid prediction: expected {expected} probabilities, got {got}")]
    InvalidPrediction { expected: usize, got: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
}

impl TrackingError {
    /// Per-frame conditions the rep counter skips instead of failing on
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TrackingError::MissingLandmark(_) | TrackingError::DegenerateGeometry(_)
        )
    }
}

impl From<TrackingError> for JsValue {
    fn from(err: TrackingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
