//! Measured angles handed back to the host for annotation

use crate::error::TrackingError;
use crate::geometry::{try_joint_angle, Point2};
use crate::pose::{BodyLandmark, LandmarkSet};

/// Joint angle measured this frame, located at its vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleReading {
    pub vertex: BodyLandmark,
    /// Normalized (x, y) of the vertex
    pub position: Point2,
    pub degrees: f32,
}

impl AngleReading {
    /// Measure the angle proximal-vertex-distal from the landmark set
    pub fn measure(
        landmarks: &LandmarkSet,
        proximal: BodyLandmark,
        vertex: BodyLandmark,
        distal: BodyLandmark,
    ) -> Result<Self, TrackingError> {
        let a = landmarks.position(proximal)?;
        let b = landmarks.position(vertex)?;
        let c = landmarks.position(distal)?;
        let degrees = try_joint_angle(a, b, c).ok_or(TrackingError::DegenerateGeometry(vertex))?;

        Ok(Self { vertex, position: b, degrees })
    }

    /// Vertex position in pixels for a frame of `width` × `height`
    pub fn pixel_position(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.position.0 * width as f32) as i32,
            (self.position.1 * height as f32) as i32,
        )
    }
}

/// Result of one counter update
#[derive(Debug, Clone, PartialEq)]
pub struct RepUpdate {
    /// Angles used by the rule, for visualization
    pub angles: Vec<AngleReading>,
    /// True when this frame crossed the completion edge
    pub completed: bool,
}
