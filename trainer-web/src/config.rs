//! Runtime thresholds forwarded from the host UI
//!
//! Detection and tracking confidence configure the pose estimator in JS;
//! Rust only stores them so the host has one place to read them from.

use crate::error::TrackingError;

/// Frame size the angle annotations are scaled to by default
pub const OVERLAY_WIDTH: u32 = 640;
pub const OVERLAY_HEIGHT: u32 = 480;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainerConfig {
    /// Minimum keypoint detection confidence (pose estimator)
    pub min_detection_confidence: f32,
    /// Minimum tracking confidence (pose estimator)
    pub min_tracking_confidence: f32,
    /// Below this the current action is cleared
    pub min_classification_confidence: f32,
    /// Landmarks below this visibility count as missing (0 = off)
    pub min_landmark_visibility: f32,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
            min_classification_confidence: 0.5,
            min_landmark_visibility: 0.0,
        }
    }
}

fn unit_interval(name: &'static str, value: f32) -> Result<f32, TrackingError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(TrackingError::InvalidThreshold { name, value })
    }
}

impl TrainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the three UI sliders at once; nothing changes if any is invalid
    pub fn set_thresholds(
        &mut self,
        detection: f32,
        tracking: f32,
        classification: f32,
    ) -> Result<(), TrackingError> {
        let detection = unit_interval("min_detection_confidence", detection)?;
        let tracking = unit_interval("min_tracking_confidence", tracking)?;
        let classification = unit_interval("min_classification_confidence", classification)?;

        self.min_detection_confidence = detection;
        self.min_tracking_confidence = tracking;
        self.min_classification_confidence = classification;
        Ok(())
    }

    pub fn set_classification_threshold(&mut self, value: f32) -> Result<(), TrackingError> {
        self.min_classification_confidence = unit_interval("min_classification_confidence", value)?;
        Ok(())
    }

    pub fn set_visibility_threshold(&mut self, value: f32) -> Result<(), TrackingError> {
        self.min_landmark_visibility = unit_interval("min_landmark_visibility", value)?;
        Ok(())
    }
}
